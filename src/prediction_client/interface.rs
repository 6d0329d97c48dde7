use crate::file_source::interface::SelectedFile;
use crate::prediction_client::error::PredictError;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Percentage in `[0, 100]`, absent when the backend does not report one.
    pub confidence: Option<f32>,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            label: label.into(),
            confidence: confidence.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 100.0) }),
        }
    }
}

pub trait PredictionClient: Send + Sync {
    /// Sends one image to the backend. Exactly one request per call, no retries.
    fn predict(&self, file: &SelectedFile) -> Result<Prediction, PredictError>;
}
