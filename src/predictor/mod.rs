//! Prediction service client module

mod client;
mod traits;

pub use client::{PredictorClient, PredictorError};
pub use traits::PredictorClientTrait;

#[cfg(test)]
pub use traits::MockPredictorClientTrait;
