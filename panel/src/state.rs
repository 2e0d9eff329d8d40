//! Panel state and the reducer that drives it.
//!
//! DESIGN
//! ======
//! `PanelState` is the single owner of the input text, the request state,
//! and the last result. Every transition goes through [`PanelState::apply`],
//! which returns an [`Effect`] telling the caller whether a request has to be
//! sent. The reducer never performs I/O.
//!
//! Invariants kept by `apply`:
//! - while `Pending`, the result is `Absent` (stale content is cleared when a
//!   request starts);
//! - at most one request is in flight: `Submit` while `Pending` is ignored;
//! - a settlement only lands while `Pending`, and always returns to `Idle`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::wire::{PredictError, PredictRequest};

/// Label shown when the prediction service could not be used.
pub const FAILURE_LABEL: &str = "❌ Error";

/// Message shown when the prediction service could not be used.
pub const FAILURE_MESSAGE: &str = "Backend not reachable. Please check FastAPI server.";

/// Whether a prediction request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
}

/// A classification returned by the prediction service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: BTreeMap<String, f64>,
}

/// Missing and `null` fields both fall back to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Outcome of the most recent submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PredictionResult {
    /// Nothing to show: no submission has completed, or one is in flight.
    #[default]
    Absent,
    /// The service answered with a prediction.
    Success(Prediction),
    /// The service could not be used. Always carries the fixed failure shape.
    Failure(Prediction),
}

impl PredictionResult {
    /// The fixed failure result: error marker, fixed message, zero confidence,
    /// no scores.
    #[must_use]
    pub fn failure() -> Self {
        Self::Failure(Prediction {
            predicted_label: FAILURE_LABEL.to_owned(),
            message: FAILURE_MESSAGE.to_owned(),
            confidence: 0.0,
            scores: BTreeMap::new(),
        })
    }

    /// The prediction to display, if any.
    #[must_use]
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Absent => None,
            Self::Success(p) | Self::Failure(p) => Some(p),
        }
    }

    /// True for the fixed failure result.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Input to the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    /// The user changed the input text.
    Edit(String),
    /// The user asked for a prediction of the current text.
    Submit,
    /// The outbound call finished, successfully or not.
    Settled(Result<Prediction, PredictError>),
}

/// What the caller must do after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send this request to the prediction service, then feed the outcome
    /// back as [`PanelEvent::Settled`].
    Request(PredictRequest),
}

/// Complete state of the prediction panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    pub text: String,
    pub request: RequestState,
    pub result: PredictionResult,
}

impl PanelState {
    /// True while a request is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.request == RequestState::Pending
    }

    /// Apply one event and return the effect the caller has to run.
    pub fn apply(&mut self, event: PanelEvent) -> Effect {
        match event {
            PanelEvent::Edit(text) => {
                self.text = text;
                Effect::None
            }
            PanelEvent::Submit => {
                if self.text.trim().is_empty() || self.is_pending() {
                    return Effect::None;
                }
                self.request = RequestState::Pending;
                self.result = PredictionResult::Absent;
                Effect::Request(PredictRequest {
                    text: self.text.clone(),
                })
            }
            PanelEvent::Settled(outcome) => {
                if !self.is_pending() {
                    return Effect::None;
                }
                self.result = match outcome {
                    Ok(prediction) => PredictionResult::Success(prediction),
                    Err(_) => PredictionResult::failure(),
                };
                self.request = RequestState::Idle;
                Effect::None
            }
        }
    }
}
