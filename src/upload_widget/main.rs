use crate::config::Config;
use crate::file_source::interface::{FileSource, SelectedFile};
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::upload_view::interface::UploadView;
use crate::upload_widget::core::{init, transition, Effect, Model, Msg};
use crate::upload_widget::render::Render;
use crate::upload_widget::run_effect::RunEffect;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};

/// Owns the upload state. Every mutation goes through `dispatch` on the thread
/// that owns the widget; effects run on worker threads and answer via `Msg`.
pub struct UploadWidget {
    pub model: Model,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub render: Render,
    pub run_effect: RunEffect,
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Receiver<Msg>,
}

impl UploadWidget {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        file_source: Arc<dyn FileSource + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        view: Arc<Mutex<dyn UploadView + Send + Sync>>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let logger = logger.with_namespace("upload_widget");
        let run_effect = RunEffect::new(
            config.clone(),
            logger.clone(),
            file_source,
            prediction_client,
            msg_sender.clone(),
        );
        let (model, effects) = init();

        let widget = Self {
            model,
            config,
            logger,
            render: Render::new(view),
            run_effect,
            msg_sender,
            msg_receiver,
        };

        widget.render_model();
        widget.spawn_effects(effects);

        widget
    }

    pub fn browse(&mut self) {
        self.dispatch(Msg::BrowseRequested);
    }

    pub fn drop_file(&mut self, path: PathBuf) {
        self.dispatch(Msg::FileDropped(path));
    }

    pub fn provide_file(&mut self, file: SelectedFile) {
        self.dispatch(Msg::FileProvided(file));
    }

    pub fn set_drag_hover(&mut self, hovering: bool) {
        if self.model.drag_hover != hovering {
            self.dispatch(Msg::DragHoverChanged(hovering));
        }
    }

    pub fn clear(&mut self) {
        self.dispatch(Msg::RemoveRequested);
    }

    pub fn submit(&mut self) {
        self.dispatch(Msg::SubmitRequested);
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(Msg::ErrorDismissed);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let _ = self.logger.info(&format!(
            "\nold model:\n\t{:?}\n\nmsg:\n\t{:?}",
            self.model, msg,
        ));

        let (new_model, effects) = transition(&self.config, std::mem::take(&mut self.model), msg);

        let _ = self.logger.info(&format!(
            "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
            new_model, effects
        ));

        self.model = new_model;

        self.render_model();
        self.spawn_effects(effects);
    }

    /// Applies every message the workers have sent so far without blocking.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        loop {
            match self.msg_receiver.try_recv() {
                Ok(msg) => {
                    self.dispatch(msg);
                    processed += 1;
                }
                // The widget holds a sender itself, so disconnection cannot happen.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        processed
    }

    fn render_model(&self) {
        if let Err(e) = self.render.render(&self.model) {
            let _ = self.logger.warn(&format!("Render failed: {}", e));
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
