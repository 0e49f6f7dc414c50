// Core encoding exports
pub mod currency;
pub mod encoder;
pub mod validator;

pub use currency::{convert, format_price};
pub use encoder::encode;
pub use validator::{validate, ValidationError};
