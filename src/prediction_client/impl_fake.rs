use crate::file_source::interface::SelectedFile;
use crate::library::logger::interface::Logger;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::{Prediction, PredictionClient};
use rand::Rng;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const ANIMALS: [&str; 10] = [
    "butterfly", "cat", "chicken", "cow", "dog", "elephant", "horse", "sheep", "spider",
    "squirrel",
];

/// Answers from a scripted queue, or with a random animal once the queue is empty.
pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    scripted: Mutex<VecDeque<Result<Prediction, PredictError>>>,
    latency: Duration,
    calls: Mutex<Vec<SelectedFile>>,
}

impl PredictionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
            scripted: Mutex::new(VecDeque::new()),
            latency: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn queue(&self, result: Result<Prediction, PredictError>) {
        if let Ok(mut scripted) = self.scripted.lock() {
            scripted.push_back(result);
        }
    }

    pub fn calls(&self) -> Vec<SelectedFile> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn random_prediction() -> Prediction {
        let mut rng = rand::rng();
        let label = ANIMALS[rng.random_range(0..ANIMALS.len())];
        let confidence: f32 = rng.random_range(50.0..100.0);
        Prediction::new(label, Some((confidence * 10.0).round() / 10.0))
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(&self, file: &SelectedFile) -> Result<Prediction, PredictError> {
        let _ = self
            .logger
            .info(&format!("PredictionClientFake::predict({:?})", file));

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(file.clone());
        }

        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let scripted = self.scripted.lock().ok().and_then(|mut s| s.pop_front());

        scripted.unwrap_or_else(|| Ok(Self::random_prediction()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use crate::prediction_client::error::TransportFailure;

    fn fake() -> PredictionClientFake {
        PredictionClientFake::new(Arc::new(LoggerConsole::new(
            chrono::FixedOffset::east_opt(0).unwrap(),
        )))
    }

    #[test]
    fn test_scripted_results_come_first() {
        let client = fake();
        client.queue(Err(PredictError::Transport(TransportFailure::Connect)));
        let file = SelectedFile::new("a.png", vec![1u8]);

        assert!(client.predict(&file).is_err());

        let random = client.predict(&file).unwrap();
        assert!(ANIMALS.contains(&random.label.as_str()));
        let confidence = random.confidence.unwrap();
        assert!((50.0..=100.0).contains(&confidence));
        assert_eq!(client.calls().len(), 2);
    }
}
