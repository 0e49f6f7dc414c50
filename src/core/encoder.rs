use crate::models::{Airline, City, FeatureVector, FlightQuery, TimeSlot};

/// Encode a flight query into the feature vector the model expects.
///
/// Total and deterministic: the scalar fields are copied through and each
/// of the five categorical groups expands to one binary indicator per
/// domain value, in the domain's declared order. Exactly one indicator is
/// set per group.
pub fn encode(query: &FlightQuery) -> FeatureVector {
    FeatureVector {
        stops: query.stops,
        cabin_class: query.cabin_class.code(),
        duration: query.duration_minutes,
        days_left: query.days_left,
        airline: one_hot(&Airline::ALL, &query.airline),
        source: one_hot(&City::ALL, &query.source),
        destination: one_hot(&City::ALL, &query.destination),
        departure: one_hot(&TimeSlot::ALL, &query.departure),
        arrival: one_hot(&TimeSlot::ALL, &query.arrival),
    }
}

/// Expand a selected value into indicators over its ordered domain.
#[inline]
fn one_hot<T: PartialEq, const N: usize>(domain: &[T; N], selected: &T) -> [u8; N] {
    let mut flags = [0u8; N];
    for (flag, value) in flags.iter_mut().zip(domain) {
        *flag = (value == selected) as u8;
    }
    flags
}
