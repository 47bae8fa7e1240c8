pub mod error;
pub mod formula;
pub mod types;

pub use error::EstimateError;
pub use formula::{estimate, estimate_men, estimate_women};
pub use types::{Measurements, Sex};
