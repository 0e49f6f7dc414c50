use serde::{Deserialize, Serialize};

/// Response body from the prediction service.
///
/// The body may carry additional fields; only `prediction` is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
}
