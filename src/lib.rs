//! Farecast - flight price prediction client
//!
//! This library collects flight attributes, one-hot encodes them into the
//! fixed 34-field feature vector the remote model was trained on, submits
//! the vector to the prediction service, and renders the returned price
//! with currency conversion.

pub mod config;
pub mod core;
pub mod form;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{convert, encode, format_price, validate, ValidationError};
pub use crate::form::{apply_field, FieldError, FormController};
pub use crate::models::{
    Airline, CabinClass, City, Currency, FeatureVector, FlightQuery, TimeSlot,
};
pub use crate::services::{PredictorClient, PredictorError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let vector = encode(&FlightQuery::default());
        assert_eq!(vector.airline, [1, 0, 0, 0, 0, 0]);
    }
}
