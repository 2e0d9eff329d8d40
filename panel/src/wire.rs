//! Wire types for the remote `/predict` endpoint.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::state::Prediction;

/// Address of the prediction service when nothing else is configured.
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:8000/predict";

/// Error returned by a [`crate::Predictor`] when no usable prediction came back.
///
/// The panel collapses every variant into the same failure result; the
/// distinction only exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The service could not be reached (connect error, timeout, aborted body).
    #[error("prediction service unreachable: {0}")]
    Unreachable(String),
    /// The service answered with a non-success HTTP status.
    #[error("prediction service returned status {0}")]
    Status(u16),
    /// The response body was not a prediction.
    #[error("malformed prediction body: {0}")]
    Malformed(String),
}

impl PredictError {
    /// Short machine-readable code for structured logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "E_UNREACHABLE",
            Self::Status(_) => "E_STATUS",
            Self::Malformed(_) => "E_MALFORMED",
        }
    }
}

/// JSON body posted to the prediction service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Input text exactly as the user typed it (not trimmed).
    pub text: String,
}

/// Parse a success response body into a [`Prediction`].
///
/// # Errors
///
/// Returns [`PredictError::Malformed`] if the body is not a JSON object with
/// at least a string `predicted_label`.
pub fn parse_prediction(body: &[u8]) -> Result<Prediction, PredictError> {
    serde_json::from_slice::<Prediction>(body).map_err(|e| PredictError::Malformed(e.to_string()))
}
