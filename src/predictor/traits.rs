//! Trait abstraction for the prediction client to enable mocking in tests

use crate::state::{FormValue, Prediction};
use async_trait::async_trait;

use super::client::PredictorError;

/// Trait for prediction service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictorClientTrait: Send + Sync {
    /// Submit the full form value and return the service's verdict
    async fn predict(&self, params: &FormValue) -> Result<Prediction, PredictorError>;
}
