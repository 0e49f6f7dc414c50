use crate::models::domain::{Airline, City, TimeSlot};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Total number of fields in the wire body (4 scalars + 30 indicators).
pub const FIELD_COUNT: usize = 34;

/// Number of one-hot indicator fields (5 groups x 6 domain values).
pub const ONE_HOT_COUNT: usize = 30;

/// The flattened numeric representation submitted to the prediction
/// service.
///
/// Indicator groups are stored as fixed-size arrays aligned with the
/// corresponding `ALL` domain arrays. Serialization expands them into the
/// 34 named JSON fields (`stops`, `class`, `duration`, `days_left`,
/// `airline_AirAsia` ... `arrival_Late_Night`) the remote model expects,
/// in declared domain order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub stops: u8,
    pub cabin_class: u8,
    pub duration: f64,
    pub days_left: i64,
    pub airline: [u8; 6],
    pub source: [u8; 6],
    pub destination: [u8; 6],
    pub departure: [u8; 6],
    pub arrival: [u8; 6],
}

impl FeatureVector {
    /// All 34 fields as (name, value) pairs, scalars first, then each
    /// indicator group in declared domain order. Field names here are the
    /// exact wire names.
    pub fn ordered_fields(&self) -> Vec<(String, f64)> {
        let mut fields = Vec::with_capacity(FIELD_COUNT);
        fields.push(("stops".to_string(), self.stops as f64));
        fields.push(("class".to_string(), self.cabin_class as f64));
        fields.push(("duration".to_string(), self.duration));
        fields.push(("days_left".to_string(), self.days_left as f64));

        for (airline, flag) in Airline::ALL.iter().zip(&self.airline) {
            fields.push((format!("airline_{}", airline.label()), *flag as f64));
        }
        for (city, flag) in City::ALL.iter().zip(&self.source) {
            fields.push((format!("source_{}", city.label()), *flag as f64));
        }
        for (city, flag) in City::ALL.iter().zip(&self.destination) {
            fields.push((format!("destination_{}", city.label()), *flag as f64));
        }
        for (slot, flag) in TimeSlot::ALL.iter().zip(&self.departure) {
            fields.push((format!("departure_{}", slot.label()), *flag as f64));
        }
        for (slot, flag) in TimeSlot::ALL.iter().zip(&self.arrival) {
            fields.push((format!("arrival_{}", slot.label()), *flag as f64));
        }

        fields
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        map.serialize_entry("stops", &self.stops)?;
        map.serialize_entry("class", &self.cabin_class)?;
        map.serialize_entry("duration", &self.duration)?;
        map.serialize_entry("days_left", &self.days_left)?;

        for (airline, flag) in Airline::ALL.iter().zip(&self.airline) {
            map.serialize_entry(&format!("airline_{}", airline.label()), flag)?;
        }
        for (city, flag) in City::ALL.iter().zip(&self.source) {
            map.serialize_entry(&format!("source_{}", city.label()), flag)?;
        }
        for (city, flag) in City::ALL.iter().zip(&self.destination) {
            map.serialize_entry(&format!("destination_{}", city.label()), flag)?;
        }
        for (slot, flag) in TimeSlot::ALL.iter().zip(&self.departure) {
            map.serialize_entry(&format!("departure_{}", slot.label()), flag)?;
        }
        for (slot, flag) in TimeSlot::ALL.iter().zip(&self.arrival) {
            map.serialize_entry(&format!("arrival_{}", slot.label()), flag)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::encode;
    use crate::models::domain::FlightQuery;

    #[test]
    fn test_field_count() {
        let vector = encode(&FlightQuery::default());
        assert_eq!(vector.ordered_fields().len(), FIELD_COUNT);
    }

    #[test]
    fn test_field_count_matches_domain_arithmetic() {
        // 5 groups, each as wide as its domain, plus the 4 scalars.
        assert_eq!(
            ONE_HOT_COUNT,
            Airline::ALL.len() + 2 * City::ALL.len() + 2 * TimeSlot::ALL.len()
        );
        assert_eq!(FIELD_COUNT, ONE_HOT_COUNT + 4);
    }

    #[test]
    fn test_json_body_has_exact_keys() {
        let vector = encode(&FlightQuery::default());
        let json = serde_json::to_value(&vector).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), FIELD_COUNT);
        assert_eq!(obj["stops"], 3);
        assert_eq!(obj["class"], 0);
        assert_eq!(obj["duration"], 120.0);
        assert_eq!(obj["days_left"], 10);
        assert_eq!(obj["airline_AirAsia"], 1);
        assert_eq!(obj["source_Bangalore"], 1);
        assert_eq!(obj["destination_Delhi"], 1);
        assert_eq!(obj["departure_Morning"], 1);
        assert_eq!(obj["arrival_Evening"], 1);
        assert_eq!(obj["airline_Air_India"], 0);
        assert_eq!(obj["departure_Early_Morning"], 0);
        assert_eq!(obj["arrival_Late_Night"], 0);
    }

    #[test]
    fn test_indicator_values_are_integers() {
        let vector = encode(&FlightQuery::default());
        let json = serde_json::to_value(&vector).unwrap();
        for (name, value) in json.as_object().unwrap() {
            if name != "duration" {
                assert!(value.is_i64() || value.is_u64(), "{} should be integral", name);
            }
        }
    }
}
