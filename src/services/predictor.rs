use crate::core::{encode, validate, ValidationError};
use crate::models::FlightQuery;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when requesting a prediction
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch flight price")]
    Api,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Prediction service client
///
/// Owns the single boundary-crossing operation: validate the query,
/// one-hot encode it, POST the feature vector to the configured service
/// and return the predicted price in INR. One attempt per call - no
/// retries, no caching, and no client-side timeout (the transport's own
/// behavior governs how long a call may take).
pub struct PredictorClient {
    base_url: String,
    client: Client,
}

impl PredictorClient {
    /// Create a new prediction client
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Request a price prediction for the given flight query
    ///
    /// An invalid query fails immediately with the rule violation,
    /// without any network activity.
    pub async fn predict(&self, query: &FlightQuery) -> Result<f64, PredictorError> {
        validate(query)?;

        let features = encode(query);

        let url = format!("{}/predict", self.base_url.trim_end_matches('/'));

        tracing::debug!("Requesting prediction from: {}", url);

        let response = self.client.post(&url).json(&features).send().await?;

        if !response.status().is_success() {
            tracing::error!("Prediction service returned {}", response.status());
            return Err(PredictorError::Api);
        }

        let json: Value = response.json().await?;

        let prediction = json
            .get("prediction")
            .and_then(|p| p.as_f64())
            .ok_or_else(|| PredictorError::InvalidResponse("Missing prediction field".into()))?;

        tracing::debug!(
            "Predicted price {:.2} INR for {} -> {}",
            prediction,
            query.source.label(),
            query.destination.label()
        );

        Ok(prediction)
    }
}
