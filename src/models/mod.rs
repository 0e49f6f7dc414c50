// Model exports
pub mod domain;
pub mod features;
pub mod responses;

pub use domain::{Airline, CabinClass, City, Currency, FlightQuery, TimeSlot};
pub use features::{FeatureVector, FIELD_COUNT, ONE_HOT_COUNT};
pub use responses::PredictResponse;
