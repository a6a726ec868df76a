pub mod error;
pub mod structure;
pub mod validation;

pub use error::IndicatorError;
pub use structure::*;
pub use validation::*;
