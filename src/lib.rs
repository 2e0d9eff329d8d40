//! # newscheck
//!
//! Terminal front end for the fake news prediction panel.
//!
//! The panel logic (state machine, classification, render model) lives in
//! the `panel` crate. This crate adds what a terminal needs around it: an
//! HTTP transport built on `reqwest`, typed configuration, and a plain-text
//! renderer for the panel view.

pub mod config;
pub mod error;
pub mod http;
pub mod terminal;

pub use config::{PredictorConfig, Timeouts};
pub use error::CliError;
pub use http::HttpPredictor;
