use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum TransportFailure {
    /// Connection refused, DNS failure, unreachable host.
    Connect,
    Timeout,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerFailure {
    /// The server supplied its own `error` or `message`.
    Reported(String),
    Overloaded,
    StartingUp,
    GatewayTimeout,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("transport failure: {0:?}")]
    Transport(TransportFailure),

    #[error("server responded {status}: {failure:?}")]
    Server { status: u16, failure: ServerFailure },

    #[error("model is still loading")]
    ModelNotReady,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl PredictError {
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Transport(failure) => {
                let detail = match failure {
                    TransportFailure::Connect => {
                        "Cannot connect to server. Server may be down or starting up. "
                    }
                    TransportFailure::Timeout => "The request timed out. ",
                    TransportFailure::Other(_) => "Network connection failed. ",
                };
                format!("Network error. {}Please wait a moment and try again.", detail)
            }
            PredictError::Server { status, failure } => match failure {
                ServerFailure::Reported(message) => message.clone(),
                ServerFailure::Overloaded => {
                    "Server is overloaded or crashed. The model might be too large for the server. Try again in a moment.".to_string()
                }
                ServerFailure::StartingUp => {
                    "Service unavailable. Server is starting up, please wait 30 seconds and try again.".to_string()
                }
                ServerFailure::GatewayTimeout => {
                    "Request timeout. Prediction took too long. Server might need more resources.".to_string()
                }
                ServerFailure::Generic => format!("Server error ({})", status),
            },
            PredictError::ModelNotReady => {
                "Model is loading. Please wait a moment and try again.".to_string()
            }
            PredictError::InvalidResponse(_) => {
                "Unexpected response from server. Please try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for PredictError {
    fn from(err: reqwest::Error) -> Self {
        let failure = if err.is_connect() {
            TransportFailure::Connect
        } else if err.is_timeout() {
            TransportFailure::Timeout
        } else {
            TransportFailure::Other(err.to_string())
        };
        PredictError::Transport(failure)
    }
}
