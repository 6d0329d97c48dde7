use crate::config::Config;
use crate::file_source::{impl_fake::FileSourceFake, interface::SelectedFile};
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::prediction_client::impl_fake::PredictionClientFake;
use crate::upload_view::{impl_fake::UploadViewFake, interface::ViewState};
use crate::upload_widget::core::Model;
use crate::upload_widget::main::UploadWidget;
use std::io::Cursor;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const WAIT_LIMIT: Duration = Duration::from_secs(5);

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub file_source: Arc<FileSourceFake>,
    pub prediction_client: Arc<PredictionClientFake>,
    pub snapshots: Arc<Mutex<Vec<ViewState>>>,
    pub widget: UploadWidget,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with(Config::default(), Duration::ZERO)
    }

    pub fn with(config: Config, latency: Duration) -> Self {
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let file_source = Arc::new(FileSourceFake::new(logger.clone()));
        let prediction_client =
            Arc::new(PredictionClientFake::new(logger.clone()).with_latency(latency));
        let snapshots = Arc::new(Mutex::new(Vec::new()));
        let view = Arc::new(Mutex::new(UploadViewFake::new(snapshots.clone())));
        let widget = UploadWidget::new(
            config.clone(),
            logger.clone(),
            file_source.clone(),
            prediction_client.clone(),
            view,
        );

        Self {
            config,
            logger,
            file_source,
            prediction_client,
            snapshots,
            widget,
        }
    }

    pub fn model(&self) -> &Model {
        &self.widget.model
    }

    /// The view as of the last render pass.
    pub fn view(&self) -> ViewState {
        self.snapshots
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    pub fn snapshots(&self) -> Vec<ViewState> {
        self.snapshots.lock().unwrap().clone()
    }

    /// Feeds worker messages into the widget until `done` holds or time runs out.
    pub fn run_until(&mut self, done: impl Fn(&Model) -> bool) -> bool {
        let deadline = Instant::now() + WAIT_LIMIT;
        loop {
            if done(&self.widget.model) {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.widget.msg_receiver.recv_timeout(remaining) {
                Ok(msg) => self.widget.dispatch(msg),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return done(&self.widget.model)
                }
            }
        }
    }

    /// Processes whatever arrives within `window`.
    pub fn settle(&mut self, window: Duration) {
        let deadline = Instant::now() + window;
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            match self.widget.msg_receiver.recv_timeout(remaining) {
                Ok(msg) => self.widget.dispatch(msg),
                Err(_) => break,
            }
        }
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        width,
        height,
        image::Rgba([200, 120, 40, 255]),
    ));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();
    bytes
}

pub fn cat_png() -> SelectedFile {
    SelectedFile::new("Cat.png", png_bytes(8, 8))
}
