//! `reqwest` transport for the prediction service.
//!
//! ERROR HANDLING
//! ==============
//! Connect failures, timeouts, non-2xx statuses, and unparsable bodies are
//! all reported as `PredictError`. They are logged here with a per-request
//! id; the panel then collapses them into its single failure result.

use std::time::Duration;

use panel::wire::parse_prediction;
use panel::{PredictError, PredictRequest, Prediction, Predictor};
use reqwest::Url;
use uuid::Uuid;

use crate::config::PredictorConfig;
use crate::error::CliError;

pub struct HttpPredictor {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpPredictor {
    /// Build the underlying HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::HttpClientBuild`] if `reqwest` cannot initialize
    /// its client (for example, TLS backend setup failure).
    pub fn new(config: &PredictorConfig) -> Result<Self, CliError> {
        let mut builder = reqwest::Client::builder().connect_timeout(Duration::from_secs(config.timeouts.connect_secs));
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| CliError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn send(&self, request: &PredictRequest) -> Result<Prediction, PredictError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| PredictError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PredictError::Unreachable(e.to_string()))?;
        parse_prediction(&body)
    }
}

impl Predictor for HttpPredictor {
    async fn predict(&self, request: &PredictRequest) -> Result<Prediction, PredictError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(
            %request_id,
            endpoint = %self.endpoint,
            chars = request.text.chars().count(),
            "sending prediction request"
        );

        let result = self.send(request).await;
        match &result {
            Ok(prediction) => tracing::info!(
                %request_id,
                label = %prediction.predicted_label,
                confidence = prediction.confidence,
                scores = prediction.scores.len(),
                "prediction received"
            ),
            Err(e) => tracing::warn!(%request_id, code = e.code(), error = %e, "prediction request failed"),
        }
        result
    }
}
