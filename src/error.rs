//! Errors surfaced by the `newscheck` binary.
//!
//! Transport failures never show up here: the panel turns them into its
//! fixed failure result. `CliError` only covers what happens around a
//! submission (configuration, input, output).

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid endpoint `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
    #[error("input text is empty; nothing to check")]
    EmptyInput,
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}
