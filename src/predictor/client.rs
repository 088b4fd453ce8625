//! HTTP client for the attrition prediction service
//!
//! The form value is posted as a flat JSON object and the JSON response
//! body is handed back untouched.

use crate::config::TuiConfig;
use crate::state::{FormValue, Prediction};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use super::traits::PredictorClientTrait;

/// Failure talking to the prediction service
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("failed to reach prediction service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("prediction service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid prediction payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the prediction service
pub struct PredictorClient {
    http: Client,
    endpoint: String,
}

impl PredictorClient {
    /// Create a client posting to `address` + `path`
    pub fn new(address: &str, path: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: join_endpoint(address, path),
        })
    }

    /// Create a client from user configuration (env override included)
    pub fn from_config(config: &TuiConfig) -> Result<Self> {
        Self::new(
            &config.resolved_address(),
            &config.resolved_predict_path(),
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictorClientTrait for PredictorClient {
    async fn predict(&self, params: &FormValue) -> Result<Prediction, PredictorError> {
        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, endpoint = %self.endpoint, fields = params.len(), "Posting params");

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Request-Id", request_id.to_string())
            .json(params)
            .send()
            .await
            .map_err(PredictorError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%request_id, %status, "Prediction request rejected");
            return Err(PredictorError::Status { status, body });
        }

        let prediction: Prediction = response.json().await.map_err(PredictorError::Decode)?;
        tracing::info!(%request_id, "Prediction received");
        Ok(prediction)
    }
}

/// Join a base address and a path with exactly one slash between them
fn join_endpoint(address: &str, path: &str) -> String {
    format!(
        "{}/{}",
        address.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_endpoint_single_slash() {
        assert_eq!(
            join_endpoint("http://localhost:8000/", "/api/predict"),
            "http://localhost:8000/api/predict"
        );
        assert_eq!(
            join_endpoint("http://localhost:8000", "api/predict"),
            "http://localhost:8000/api/predict"
        );
    }

    #[test]
    fn test_new_builds_endpoint() {
        let client = PredictorClient::new(
            "http://127.0.0.1:8000",
            "/api/predict",
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/api/predict");
    }

    #[test]
    fn test_from_default_config() {
        let client = PredictorClient::from_config(&TuiConfig::default()).unwrap();
        assert!(client.endpoint().ends_with("/api/predict"));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Port 9 (discard) is closed on test machines
        let client = PredictorClient::new(
            "http://127.0.0.1:9",
            "/api/predict",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let result = client.predict(&FormValue::default()).await;
        assert!(matches!(result, Err(PredictorError::Transport(_))));
    }

    #[test]
    fn test_status_error_message() {
        let err = PredictorError::Status {
            status: StatusCode::BAD_REQUEST,
            body: "missing age".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "prediction service returned 400 Bad Request: missing age"
        );
    }
}
