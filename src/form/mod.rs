// Form exports
pub mod controller;

pub use controller::{apply_field, FieldError, FormController};
