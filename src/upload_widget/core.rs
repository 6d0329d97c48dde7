use crate::config::Config;
use crate::file_source::interface::SelectedFile;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::Prediction;
use crate::upload_widget::error::ValidationError;
use crate::upload_widget::preview::PreviewImage;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    Decoding,
    Ready(PreviewImage),
    /// Decoding failed; the file stays selected.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub id: u64,
    pub file: SelectedFile,
    pub preview: PreviewState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight {
        request_id: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub id: u64,
    pub prediction: Prediction,
    pub meter_percent: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub selection: Option<Selection>,
    pub request: RequestState,
    pub outcome: Option<Outcome>,
    pub banner: Option<Banner>,
    pub drag_hover: bool,
    /// Set while a native file dialog is showing.
    pub picker_open: bool,
    pub last_id: u64,
}

impl Model {
    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::InFlight { .. })
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selection.as_ref().map(|s| &s.file)
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug)]
pub enum Msg {
    BrowseRequested,
    FileDropped(PathBuf),
    /// A file that arrived with its contents already in memory.
    FileProvided(SelectedFile),
    DragHoverChanged(bool),
    /// The file dialog closed; `None` means it was cancelled.
    FilePicked(Result<Option<SelectedFile>, Box<dyn std::error::Error + Send + Sync>>),
    FileLoaded(Result<Option<SelectedFile>, Box<dyn std::error::Error + Send + Sync>>),
    PreviewDecoded {
        selection_id: u64,
        result: Result<PreviewImage, Box<dyn std::error::Error + Send + Sync>>,
    },
    RemoveRequested,
    SubmitRequested,
    PredictionDone {
        request_id: u64,
        result: Result<Prediction, PredictError>,
    },
    MeterFillDue {
        outcome_id: u64,
    },
    ErrorExpired {
        banner_id: u64,
    },
    ErrorDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    OpenFilePicker,
    LoadFile { path: PathBuf },
    DecodePreview { selection_id: u64, file: SelectedFile },
    SubmitPrediction { request_id: u64, file: SelectedFile },
    ScheduleMeterFill { outcome_id: u64, delay: Duration },
    ScheduleErrorExpiry { banner_id: u64, delay: Duration },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let mut model = model;

    match msg {
        // Selection gestures
        Msg::BrowseRequested => {
            if model.is_loading() {
                return show_error(config, model, ValidationError::Busy.user_message());
            }
            if model.picker_open {
                return (model, vec![]);
            }
            model.picker_open = true;
            (model, vec![Effect::OpenFilePicker])
        }
        Msg::FileDropped(path) => {
            model.drag_hover = false;
            if model.is_loading() {
                return show_error(config, model, ValidationError::Busy.user_message());
            }
            (model, vec![Effect::LoadFile { path }])
        }
        Msg::FileProvided(file) => {
            model.drag_hover = false;
            select_file(config, model, file)
        }
        Msg::FilePicked(result) => {
            model.picker_open = false;
            transition(config, model, Msg::FileLoaded(result))
        }
        Msg::FileLoaded(Ok(Some(file))) => select_file(config, model, file),
        Msg::FileLoaded(Ok(None)) => (model, vec![]),
        Msg::FileLoaded(Err(e)) => show_error(
            config,
            model,
            ValidationError::Unreadable(e.to_string()).user_message(),
        ),
        Msg::DragHoverChanged(hovering) => {
            model.drag_hover = hovering;
            (model, vec![])
        }

        // Preview
        Msg::PreviewDecoded {
            selection_id,
            result,
        } => {
            if let Some(selection) = model.selection.as_mut() {
                if selection.id == selection_id {
                    selection.preview = match result {
                        Ok(preview) => PreviewState::Ready(preview),
                        Err(_) => PreviewState::Unavailable,
                    };
                }
            }
            (model, vec![])
        }

        // Removal is ignored while a request is in flight
        Msg::RemoveRequested => {
            if model.is_loading() {
                return (model, vec![]);
            }
            model.selection = None;
            model.outcome = None;
            model.banner = None;
            (model, vec![])
        }

        // Submission
        Msg::SubmitRequested => {
            if model.is_loading() {
                return (model, vec![]);
            }
            let file = match model.selected_file().cloned() {
                Some(file) => file,
                None => {
                    return show_error(
                        config,
                        model,
                        ValidationError::NoFileSelected.user_message(),
                    )
                }
            };
            let request_id = model.next_id();
            model.request = RequestState::InFlight { request_id };
            model.outcome = None;
            model.banner = None;
            (model, vec![Effect::SubmitPrediction { request_id, file }])
        }
        Msg::PredictionDone { request_id, result } => {
            if model.request != (RequestState::InFlight { request_id }) {
                return (model, vec![]);
            }
            model.request = RequestState::Idle;
            match result {
                Ok(prediction) => {
                    let outcome_id = model.next_id();
                    model.outcome = Some(Outcome {
                        id: outcome_id,
                        prediction,
                        meter_percent: 0.0,
                    });
                    (
                        model,
                        vec![Effect::ScheduleMeterFill {
                            outcome_id,
                            delay: config.meter_fill_delay,
                        }],
                    )
                }
                Err(e) => show_error(config, model, e.user_message()),
            }
        }

        // Timers
        Msg::MeterFillDue { outcome_id } => {
            if let Some(outcome) = model.outcome.as_mut() {
                if outcome.id == outcome_id {
                    outcome.meter_percent = outcome.prediction.confidence.unwrap_or(0.0);
                }
            }
            (model, vec![])
        }
        Msg::ErrorExpired { banner_id } => {
            if model.banner.as_ref().map(|b| b.id) == Some(banner_id) {
                model.banner = None;
            }
            (model, vec![])
        }
        Msg::ErrorDismissed => {
            model.banner = None;
            (model, vec![])
        }
    }
}

fn select_file(config: &Config, model: Model, file: SelectedFile) -> (Model, Vec<Effect>) {
    let mut model = model;

    if model.is_loading() {
        return show_error(config, model, ValidationError::Busy.user_message());
    }

    if !file.is_image() {
        let rejection = ValidationError::NotAnImage {
            content_type: file.content_type.clone(),
        };
        return show_error(config, model, rejection.user_message());
    }

    let selection_id = model.next_id();
    model.selection = Some(Selection {
        id: selection_id,
        file: file.clone(),
        preview: PreviewState::Decoding,
    });
    model.outcome = None;
    model.banner = None;

    (model, vec![Effect::DecodePreview { selection_id, file }])
}

/// Replaces whatever banner is showing; the old banner's expiry no longer matches.
fn show_error(config: &Config, model: Model, message: String) -> (Model, Vec<Effect>) {
    let mut model = model;
    let banner_id = model.next_id();
    model.banner = Some(Banner {
        id: banner_id,
        message,
    });
    (
        model,
        vec![Effect::ScheduleErrorExpiry {
            banner_id,
            delay: config.error_display_duration,
        }],
    )
}
