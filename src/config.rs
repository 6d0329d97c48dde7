use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
    pub predict_path: String,
    /// Multipart field the backend reads the image from.
    pub upload_field_name: String,
    /// `None` leaves timing out to the server.
    pub request_timeout: Option<Duration>,
    pub error_display_duration: Duration,
    pub meter_fill_delay: Duration,
    pub preview_max_edge: u32,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
}

impl Config {
    pub fn predict_url(&self) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            self.predict_path.trim_start_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            predict_path: "/predict".to_string(),
            upload_field_name: "file".to_string(),
            request_timeout: None,
            error_display_duration: Duration::from_secs(5),
            meter_fill_delay: Duration::from_millis(100),
            preview_max_edge: 512,
            logger_timezone: mountain_standard_time(),
            window_size: [480.0, 640.0],
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap_or(chrono::Utc.fix())
}
