/// Why a set of measurements cannot be turned into an estimate.
///
/// These are returned as values so an interactive caller can show the
/// message and keep going.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("Waist plus hip measurement must be greater than neck measurement.")]
    WaistPlusHipNotAboveNeck,
    #[error("Waist measurement must be greater than neck measurement.")]
    WaistNotAboveNeck,
    #[error("{field} measurement must be greater than zero.")]
    NonPositive { field: &'static str },
    #[error("{field} measurement must be a finite number.")]
    NotFinite { field: &'static str },
    #[error("Measurements are too large to produce an estimate.")]
    OutOfRange,
}
