//! Typed configuration for the HTTP predictor.
//!
//! Values come from CLI flags with environment fallbacks (see `main.rs`):
//! - `NEWSCHECK_PREDICT_URL`: endpoint, default [`panel::DEFAULT_PREDICT_URL`]
//! - `NEWSCHECK_CONNECT_TIMEOUT_SECS`: default 10
//! - `NEWSCHECK_REQUEST_TIMEOUT_SECS`: unset means the transport default

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use reqwest::Url;

use crate::error::CliError;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect_secs: u64,
    /// Whole-request timeout. `None` leaves it to the transport.
    pub request_secs: Option<u64>,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    pub endpoint: Url,
    pub timeouts: Timeouts,
}

impl PredictorConfig {
    /// Build a config, validating that the endpoint is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidEndpoint`] for unparsable URLs or other
    /// schemes, and [`CliError::InvalidTimeout`] for a zero connect timeout.
    pub fn new(endpoint: &str, timeouts: Timeouts) -> Result<Self, CliError> {
        let invalid = |reason: String| CliError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason,
        };
        let url = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme `{other}` (expected http or https)"))),
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host".to_owned()));
        }
        if timeouts.connect_secs == 0 {
            return Err(CliError::InvalidTimeout("connect timeout must be at least one second".to_owned()));
        }
        Ok(Self { endpoint: url, timeouts })
    }
}
