use thiserror::Error;

/// Rejections decided locally, before any network traffic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("not an image: {content_type}")]
    NotAnImage { content_type: String },

    #[error("no file selected")]
    NoFileSelected,

    #[error("a prediction is in flight")]
    Busy,

    #[error("unreadable file: {0}")]
    Unreadable(String),
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::NotAnImage { .. } => "Please upload a valid image file",
            ValidationError::NoFileSelected => "Please select an image first",
            ValidationError::Busy => {
                "A prediction is already in progress. Please wait for it to finish."
            }
            ValidationError::Unreadable(_) => {
                "Could not read the selected file. Please try another one."
            }
        }
        .to_string()
    }
}
