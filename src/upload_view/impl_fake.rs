use crate::upload_view::interface::{ButtonState, UploadView, ViewResult, ViewState};
use crate::upload_widget::preview::PreviewImage;
use crate::upload_widget::result_view::ResultView;
use std::sync::{Arc, Mutex};

/// Records the current view and a snapshot per render pass.
pub struct UploadViewFake {
    state: ViewState,
    snapshots: Arc<Mutex<Vec<ViewState>>>,
}

impl UploadViewFake {
    pub fn new(snapshots: Arc<Mutex<Vec<ViewState>>>) -> Self {
        Self {
            state: ViewState::default(),
            snapshots,
        }
    }
}

impl UploadView for UploadViewFake {
    fn show_file_info(&mut self, file_name: Option<&str>) -> ViewResult {
        self.state.file_name = file_name.map(str::to_string);
        Ok(())
    }

    fn show_preview(&mut self, preview: Option<&PreviewImage>) -> ViewResult {
        self.state.preview = preview.cloned();
        Ok(())
    }

    fn show_predict_button(&mut self, state: ButtonState) -> ViewResult {
        self.state.predict_button = state;
        Ok(())
    }

    fn set_remove_enabled(&mut self, enabled: bool) -> ViewResult {
        self.state.remove_enabled = enabled;
        Ok(())
    }

    fn show_loader(&mut self, visible: bool) -> ViewResult {
        self.state.loading = visible;
        Ok(())
    }

    fn show_result(&mut self, result: Option<&ResultView>) -> ViewResult {
        self.state.result = result.cloned();
        Ok(())
    }

    fn show_error(&mut self, message: Option<&str>) -> ViewResult {
        self.state.error = message.map(str::to_string);
        Ok(())
    }

    fn set_drag_hover(&mut self, hovering: bool) -> ViewResult {
        self.state.drag_hover = hovering;
        Ok(())
    }

    fn flush(&mut self) -> ViewResult {
        self.snapshots
            .lock()
            .map_err(|e| e.to_string())?
            .push(self.state.clone());
        Ok(())
    }
}
