use crate::config::Config;
use crate::file_source::interface::FileSource;
use crate::library::logger::interface::Logger;
use crate::prediction_client::error::{PredictError, TransportFailure};
use crate::prediction_client::interface::PredictionClient;
use crate::upload_widget::core::{Effect, Msg};
use crate::upload_widget::preview::decode_preview;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs one effect to completion and reports back with exactly one message.
#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    file_source: Arc<dyn FileSource + Send + Sync>,
    prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    msg_sender: Sender<Msg>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        file_source: Arc<dyn FileSource + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        msg_sender: Sender<Msg>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("run_effect"),
            file_source,
            prediction_client,
            msg_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        let msg = match effect {
            Effect::OpenFilePicker => {
                let picked = self.file_source.pick().and_then(|chosen| match chosen {
                    Some(path) => self.file_source.load(&path).map(Some),
                    None => Ok(None),
                });
                Msg::FilePicked(picked)
            }
            Effect::LoadFile { path } => Msg::FileLoaded(self.file_source.load(&path).map(Some)),
            Effect::DecodePreview { selection_id, file } => {
                let result = decode_preview(&file.bytes, self.config.preview_max_edge)
                    .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>);
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .warn(&format!("Preview unavailable for {}: {}", file.name, e));
                }
                Msg::PreviewDecoded {
                    selection_id,
                    result,
                }
            }
            Effect::SubmitPrediction { request_id, file } => {
                // A panicking client must still end the request, or loading never clears.
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    self.prediction_client.predict(&file)
                }))
                .unwrap_or_else(|_| {
                    Err(PredictError::Transport(TransportFailure::Other(
                        "prediction worker panicked".to_string(),
                    )))
                });
                Msg::PredictionDone { request_id, result }
            }
            Effect::ScheduleMeterFill { outcome_id, delay } => {
                std::thread::sleep(delay);
                Msg::MeterFillDue { outcome_id }
            }
            Effect::ScheduleErrorExpiry { banner_id, delay } => {
                std::thread::sleep(delay);
                Msg::ErrorExpired { banner_id }
            }
        };

        if self.msg_sender.send(msg).is_err() {
            let _ = self.logger.warn("Widget is gone, dropping effect result");
        }
    }
}
