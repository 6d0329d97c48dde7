use crate::prediction_client::error::{PredictError, ServerFailure};
use crate::prediction_client::interface::Prediction;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PredictionBody {
    #[serde(alias = "label", alias = "class")]
    prediction: Option<String>,
    #[serde(alias = "score")]
    confidence: Option<f32>,
    model_loading: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    model_loading: Option<bool>,
}

/// Turns a completed HTTP exchange into a prediction or a classified failure.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<Prediction, PredictError> {
    if !(200..300).contains(&status) {
        return Err(interpret_failure(status, body));
    }

    let parsed: PredictionBody = serde_json::from_slice(body)
        .map_err(|e| PredictError::InvalidResponse(e.to_string()))?;

    if parsed.model_loading.unwrap_or(false) {
        return Err(PredictError::ModelNotReady);
    }

    match parsed.prediction {
        Some(label) if !label.trim().is_empty() => Ok(Prediction::new(label, parsed.confidence)),
        _ => Err(PredictError::InvalidResponse(
            "response has no prediction".to_string(),
        )),
    }
}

fn interpret_failure(status: u16, body: &[u8]) -> PredictError {
    let failure = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => {
            if status == 503 && parsed.model_loading.unwrap_or(false) {
                return PredictError::ModelNotReady;
            }
            match parsed.error.or(parsed.message) {
                Some(message) if !message.is_empty() => ServerFailure::Reported(message),
                _ => ServerFailure::Generic,
            }
        }
        Err(_) => canned_failure(status),
    };

    PredictError::Server { status, failure }
}

fn canned_failure(status: u16) -> ServerFailure {
    match status {
        502 => ServerFailure::Overloaded,
        503 => ServerFailure::StartingUp,
        504 => ServerFailure::GatewayTimeout,
        _ => ServerFailure::Generic,
    }
}
