use crate::core::format_price;
use crate::models::{Airline, CabinClass, City, Currency, FlightQuery, TimeSlot};
use crate::services::{PredictorClient, PredictorError};
use thiserror::Error;

/// Errors from applying a field edit to the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

fn invalid(field: &str, value: &str) -> FieldError {
    FieldError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Apply a single field edit to a flight query, returning the updated
/// query.
///
/// This is the form's reducer: every input path (CLI flags, interactive
/// edits) funnels through it, so parsing and clamping behave identically
/// everywhere. Enumerated fields accept the wire token, the display name,
/// or the airport/IATA code; numeric fields are clamped to their input
/// floors (duration at 1, days_left at 0) the way the form inputs clamp.
pub fn apply_field(
    query: &FlightQuery,
    field: &str,
    value: &str,
) -> Result<FlightQuery, FieldError> {
    let mut next = query.clone();

    match field {
        "stops" => {
            let stops: u8 = value.parse().map_err(|_| invalid(field, value))?;
            if stops > 3 {
                return Err(invalid(field, value));
            }
            next.stops = stops;
        }
        "class" => {
            next.cabin_class = CabinClass::parse(value).ok_or_else(|| invalid(field, value))?;
        }
        "airline" => {
            next.airline = Airline::parse(value).ok_or_else(|| invalid(field, value))?;
        }
        "source" => {
            next.source = City::parse(value).ok_or_else(|| invalid(field, value))?;
        }
        "destination" => {
            next.destination = City::parse(value).ok_or_else(|| invalid(field, value))?;
        }
        "departure" => {
            next.departure = TimeSlot::parse(value).ok_or_else(|| invalid(field, value))?;
        }
        "arrival" => {
            next.arrival = TimeSlot::parse(value).ok_or_else(|| invalid(field, value))?;
        }
        "duration" => {
            let duration: f64 = value.parse().map_err(|_| invalid(field, value))?;
            if !duration.is_finite() {
                return Err(invalid(field, value));
            }
            next.duration_minutes = duration.max(1.0);
        }
        "days_left" => {
            let days: i64 = value.parse().map_err(|_| invalid(field, value))?;
            next.days_left = days.max(0);
        }
        _ => return Err(FieldError::UnknownField(field.to_string())),
    }

    Ok(next)
}

/// Form state for one prediction cycle
///
/// Owns the editable flight query, the submission state ({idle, loading,
/// success, error}) and the display currency. A submission sets loading,
/// clears the previous error, runs the client, then stores either the
/// prediction or a display message. Switching the display currency
/// re-renders the stored prediction without touching the network.
#[derive(Debug)]
pub struct FormController {
    pub query: FlightQuery,
    pub prediction: Option<f64>,
    pub loading: bool,
    pub error: Option<String>,
    pub currency: Currency,
}

impl FormController {
    /// Create a controller seeded with the documented form defaults.
    pub fn new() -> Self {
        Self {
            query: FlightQuery::default(),
            prediction: None,
            loading: false,
            error: None,
            currency: Currency::Inr,
        }
    }

    /// Apply a field edit to the current query.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        self.query = apply_field(&self.query, field, value)?;
        Ok(())
    }

    /// Submit the current query for prediction.
    ///
    /// Inert while a request is already pending. Errors never escape;
    /// they are converted to display state.
    pub async fn submit(&mut self, client: &PredictorClient) {
        if self.loading {
            tracing::warn!("Submission ignored: a prediction request is already pending");
            return;
        }

        self.loading = true;
        self.error = None;

        tracing::info!(
            "Submitting prediction request: {} ({}) -> {} ({}), {}",
            self.query.source.label(),
            self.query.source.airport_code(),
            self.query.destination.label(),
            self.query.destination.airport_code(),
            self.query.airline.display_name()
        );

        match client.predict(&self.query).await {
            Ok(prediction) => {
                self.prediction = Some(prediction);
            }
            Err(e) => {
                tracing::error!("Prediction failed: {}", e);
                self.error = Some(display_message(&e));
            }
        }

        self.loading = false;
    }

    /// Change the display currency. The stored prediction is re-rendered
    /// through the formatter; no new request is issued.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// The stored prediction formatted in the display currency.
    pub fn formatted_price(&self) -> Option<String> {
        self.prediction
            .map(|price| format_price(price, self.currency))
    }

    /// One-line route summary, as the form header shows it.
    pub fn route_summary(&self) -> String {
        format!(
            "{} ({}) -> {} ({}), {}, {}, {}",
            self.query.source.label(),
            self.query.source.airport_code(),
            self.query.destination.label(),
            self.query.destination.airport_code(),
            self.query.airline.display_name(),
            self.query.cabin_class.label(),
            self.query.stops_label()
        )
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a predictor failure to the message shown in the error panel.
///
/// Validation messages surface verbatim; the API failure keeps its
/// generic message; anything else collapses to the fallback.
fn display_message(err: &PredictorError) -> String {
    match err {
        PredictorError::Validation(e) => e.to_string(),
        PredictorError::Api => err.to_string(),
        _ => "An error occurred".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    #[test]
    fn test_reducer_updates_single_field() {
        let query = FlightQuery::default();
        let next = apply_field(&query, "airline", "Vistara").unwrap();

        assert_eq!(next.airline, Airline::Vistara);
        // Everything else untouched.
        assert_eq!(next.source, query.source);
        assert_eq!(next.duration_minutes, query.duration_minutes);
    }

    #[test]
    fn test_reducer_does_not_mutate_input() {
        let query = FlightQuery::default();
        let _ = apply_field(&query, "destination", "Mumbai").unwrap();
        assert_eq!(query.destination, City::Delhi);
    }

    #[test]
    fn test_reducer_accepts_codes() {
        let query = FlightQuery::default();
        let next = apply_field(&query, "source", "MAA").unwrap();
        assert_eq!(next.source, City::Chennai);

        let next = apply_field(&query, "airline", "UK").unwrap();
        assert_eq!(next.airline, Airline::Vistara);
    }

    #[test]
    fn test_reducer_clamps_numeric_floors() {
        let query = FlightQuery::default();

        let next = apply_field(&query, "duration", "0").unwrap();
        assert_eq!(next.duration_minutes, 1.0);

        let next = apply_field(&query, "days_left", "-4").unwrap();
        assert_eq!(next.days_left, 0);
    }

    #[test]
    fn test_reducer_rejects_unknown_field() {
        let query = FlightQuery::default();
        let err = apply_field(&query, "price", "100").unwrap_err();
        assert_eq!(err, FieldError::UnknownField("price".to_string()));
    }

    #[test]
    fn test_reducer_rejects_out_of_domain_values() {
        let query = FlightQuery::default();
        assert!(apply_field(&query, "stops", "4").is_err());
        assert!(apply_field(&query, "class", "2").is_err());
        assert!(apply_field(&query, "departure", "Midnight").is_err());
    }

    #[test]
    fn test_formatted_price_follows_currency() {
        let mut controller = FormController::new();
        controller.prediction = Some(100.0);

        assert_eq!(controller.formatted_price(), Some("₹100.00".to_string()));

        controller.set_currency(Currency::Usd);
        assert_eq!(controller.formatted_price(), Some("$1.20".to_string()));
    }

    #[test]
    fn test_route_summary_defaults() {
        let controller = FormController::new();
        assert_eq!(
            controller.route_summary(),
            "Bangalore (BLR) -> Delhi (DEL), AirAsia, Economy, Non-stop"
        );
    }

    #[test]
    fn test_validation_message_surfaces_verbatim() {
        let err = PredictorError::Validation(ValidationError::SameCities);
        assert_eq!(
            display_message(&err),
            "Source and destination cities cannot be the same"
        );
    }

    #[test]
    fn test_unexpected_error_uses_fallback_message() {
        let err = PredictorError::InvalidResponse("Missing prediction field".into());
        assert_eq!(display_message(&err), "An error occurred");
    }
}
