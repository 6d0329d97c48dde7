use crate::upload_widget::preview::PreviewImage;
use crate::upload_widget::result_view::ResultView;

pub type ViewResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Hidden,
    Enabled,
    Disabled,
}

/// Everything the upload surface shows at one moment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// File-info row; hidden when `None`.
    pub file_name: Option<String>,
    pub preview: Option<PreviewImage>,
    pub predict_button: ButtonState,
    pub remove_enabled: bool,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub drag_hover: bool,
}

/// The visible surface of the upload widget.
pub trait UploadView: Send + Sync {
    fn show_file_info(&mut self, file_name: Option<&str>) -> ViewResult;

    fn show_preview(&mut self, preview: Option<&PreviewImage>) -> ViewResult;

    fn show_predict_button(&mut self, state: ButtonState) -> ViewResult;

    fn set_remove_enabled(&mut self, enabled: bool) -> ViewResult;

    fn show_loader(&mut self, visible: bool) -> ViewResult;

    fn show_result(&mut self, result: Option<&ResultView>) -> ViewResult;

    /// `None` hides the error banner.
    fn show_error(&mut self, message: Option<&str>) -> ViewResult;

    fn set_drag_hover(&mut self, hovering: bool) -> ViewResult;

    /// Called once after every render pass.
    fn flush(&mut self) -> ViewResult {
        Ok(())
    }
}
