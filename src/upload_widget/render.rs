use crate::upload_view::interface::{ButtonState, UploadView};
use crate::upload_widget::core::{Model, PreviewState};
use crate::upload_widget::result_view::ResultView;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    view: Arc<Mutex<dyn UploadView + Send + Sync>>,
}

impl Render {
    pub fn new(view: Arc<Mutex<dyn UploadView + Send + Sync>>) -> Self {
        Self { view }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut view = self.view.lock().map_err(|e| e.to_string())?;

        let loading = model.is_loading();

        match &model.selection {
            Some(selection) => {
                view.show_file_info(Some(&selection.file.name))?;
                match &selection.preview {
                    PreviewState::Ready(preview) => view.show_preview(Some(preview))?,
                    PreviewState::Decoding | PreviewState::Unavailable => view.show_preview(None)?,
                }
                view.show_predict_button(if loading {
                    ButtonState::Disabled
                } else {
                    ButtonState::Enabled
                })?;
            }
            None => {
                view.show_file_info(None)?;
                view.show_preview(None)?;
                view.show_predict_button(ButtonState::Hidden)?;
            }
        }

        view.set_remove_enabled(!loading)?;
        view.show_loader(loading)?;

        match &model.outcome {
            Some(outcome) => view.show_result(Some(&ResultView::from_outcome(outcome)))?,
            None => view.show_result(None)?,
        }

        view.show_error(model.banner.as_ref().map(|b| b.message.as_str()))?;
        view.set_drag_hover(model.drag_hover)?;

        view.flush()
    }
}
