//! Prediction request panel shared by the terminal and browser front ends.
//!
//! This crate owns the panel state machine, the wire types for the
//! `/predict` endpoint, the label classifier, and the render model derived
//! from state. It performs no I/O itself: transports plug in through the
//! [`Predictor`] trait.
//!
//! DESIGN
//! ======
//! All panel state lives in one owned [`PanelState`] value that changes only
//! through [`PanelState::apply`]. Front ends keep that value wherever their
//! runtime wants it (a plain `&mut` in the CLI, an `RwSignal` in Leptos) and
//! feed events into it.

pub mod classify;
pub mod state;
pub mod submit;
pub mod view;
pub mod wire;

pub use classify::{LabelCategory, classify};
pub use state::{Effect, PanelEvent, PanelState, Prediction, PredictionResult, RequestState};
pub use submit::{Predictor, SubmitOutcome, submit};
pub use view::{PanelView, ResultView, ScoreRow, render};
pub use wire::{DEFAULT_PREDICT_URL, PredictError, PredictRequest};
