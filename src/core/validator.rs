use crate::models::FlightQuery;
use thiserror::Error;

/// Domain-rule violations, surfaced verbatim to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Source and destination cities cannot be the same")]
    SameCities,

    #[error("Duration must be greater than 0")]
    NonPositiveDuration,

    #[error("Days left cannot be negative")]
    NegativeDaysLeft,
}

/// Check a flight query against the domain rules.
///
/// Checks short-circuit in precedence order; only the first violated
/// rule is reported.
pub fn validate(query: &FlightQuery) -> Result<(), ValidationError> {
    if query.source == query.destination {
        return Err(ValidationError::SameCities);
    }

    if query.duration_minutes <= 0.0 {
        return Err(ValidationError::NonPositiveDuration);
    }

    if query.days_left < 0 {
        return Err(ValidationError::NegativeDaysLeft);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    #[test]
    fn test_default_query_is_valid() {
        assert_eq!(validate(&FlightQuery::default()), Ok(()));
    }

    #[test]
    fn test_same_cities_rejected() {
        let mut query = FlightQuery::default();
        query.destination = query.source;

        let err = validate(&query).unwrap_err();
        assert_eq!(err, ValidationError::SameCities);
        assert_eq!(
            err.to_string(),
            "Source and destination cities cannot be the same"
        );
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let mut query = FlightQuery::default();
        query.duration_minutes = 0.0;

        let err = validate(&query).unwrap_err();
        assert_eq!(err.to_string(), "Duration must be greater than 0");
    }

    #[test]
    fn test_negative_days_left_rejected() {
        let mut query = FlightQuery::default();
        query.days_left = -1;

        let err = validate(&query).unwrap_err();
        assert_eq!(err.to_string(), "Days left cannot be negative");
    }

    #[test]
    fn test_same_cities_takes_precedence() {
        // All three rules violated at once; only the first is reported.
        let mut query = FlightQuery::default();
        query.source = City::Mumbai;
        query.destination = City::Mumbai;
        query.duration_minutes = -5.0;
        query.days_left = -1;

        assert_eq!(validate(&query), Err(ValidationError::SameCities));
    }

    #[test]
    fn test_duration_checked_before_days_left() {
        let mut query = FlightQuery::default();
        query.duration_minutes = 0.0;
        query.days_left = -1;

        assert_eq!(validate(&query), Err(ValidationError::NonPositiveDuration));
    }
}
