//! The submit operation and the transport seam it calls through.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;

use crate::state::{Effect, PanelEvent, PanelState, Prediction};
use crate::wire::{PredictError, PredictRequest};

/// A transport that can ask the remote service for a prediction.
pub trait Predictor {
    /// Send one request. Every failure mode is reported as a [`PredictError`].
    fn predict(&self, request: &PredictRequest) -> impl Future<Output = Result<Prediction, PredictError>>;
}

/// What `submit` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or a request was already in flight. Nothing was sent.
    Skipped,
    /// One request was sent and its outcome is now in `state.result`.
    Completed,
}

/// Submit the current input text.
///
/// Runs at most one outbound call and always leaves the panel `Idle` when a
/// call was made. Errors from the predictor become the fixed failure result
/// and are not returned.
pub async fn submit<P: Predictor>(state: &mut PanelState, predictor: &P) -> SubmitOutcome {
    let Effect::Request(request) = state.apply(PanelEvent::Submit) else {
        return SubmitOutcome::Skipped;
    };
    let outcome = predictor.predict(&request).await;
    state.apply(PanelEvent::Settled(outcome));
    SubmitOutcome::Completed
}
