use config::Config;
use file_source::impl_native::FileSourceNative;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use prediction_client::impl_http::PredictionClientHttp;
use std::sync::{Arc, Mutex};
use upload_view::impl_gui::{run_window, UploadViewGui};
use upload_view::interface::ViewState;
use upload_widget::main::UploadWidget;

mod config;
mod file_source;
mod library;
mod prediction_client;
mod upload_view;
mod upload_widget;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let file_source = Arc::new(FileSourceNative::new(logger.clone()));

    let prediction_client = Arc::new(PredictionClientHttp::new(&config, logger.clone())?);

    logger.info(&format!("Predicting against {}", config.predict_url()))?;

    let view_state = Arc::new(Mutex::new(ViewState::default()));

    let view = Arc::new(Mutex::new(UploadViewGui::new(view_state.clone())));

    let widget = UploadWidget::new(
        config.clone(),
        logger,
        file_source,
        prediction_client,
        view,
    );

    run_window(&config, widget, view_state)?;

    Ok(())
}
