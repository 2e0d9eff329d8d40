//! HTTP call to the prediction service.
//!
//! Browser (csr): real request via `gloo-net` to the fixed
//! [`DEFAULT_PREDICT_URL`]. Native builds: there is no browser to send
//! from, so `predict` reports the service as unreachable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a `PredictError`; the panel reducer turns it
//! into the fixed failure result, so nothing here panics or propagates.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use panel::DEFAULT_PREDICT_URL;
use panel::{PredictError, PredictRequest, Prediction};

/// Turn a finished HTTP exchange into a prediction.
#[cfg(any(test, feature = "csr"))]
fn decode_response(status: u16, body: &[u8]) -> Result<Prediction, PredictError> {
    if !(200..300).contains(&status) {
        return Err(PredictError::Status(status));
    }
    panel::wire::parse_prediction(body)
}

/// POST `request` to the prediction service.
///
/// # Errors
///
/// Returns `PredictError::Unreachable` for network failures (and always
/// outside the browser), `Status` for non-2xx answers, and `Malformed` for
/// bodies that are not a prediction.
pub async fn predict(request: &PredictRequest) -> Result<Prediction, PredictError> {
    #[cfg(feature = "csr")]
    {
        let result = send(request).await;
        match &result {
            Ok(prediction) => log::info!("prediction received: {}", prediction.predicted_label),
            Err(e) => log::warn!("prediction request failed [{}]: {e}", e.code()),
        }
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(PredictError::Unreachable("not available outside the browser".to_owned()))
    }
}

#[cfg(feature = "csr")]
async fn send(request: &PredictRequest) -> Result<Prediction, PredictError> {
    let resp = gloo_net::http::Request::post(DEFAULT_PREDICT_URL)
        .json(request)
        .map_err(|e| PredictError::Unreachable(e.to_string()))?
        .send()
        .await
        .map_err(|e| PredictError::Unreachable(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .binary()
        .await
        .map_err(|e| PredictError::Unreachable(e.to_string()))?;
    decode_response(status, &body)
}

/// Browser transport as a [`panel::Predictor`].
pub struct BrowserPredictor;

impl panel::Predictor for BrowserPredictor {
    async fn predict(&self, request: &PredictRequest) -> Result<Prediction, PredictError> {
        predict(request).await
    }
}
