//! Error types for the forecast evaluation engine

use thiserror::Error;

/// Failures raised while decoding a forecast or a prescription.
///
/// Gaps in the forecast are not errors: a missing field or a null value
/// resolves to [`crate::models::BurnStatus::InsufficientData`] instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("malformed duration '{0}': no day or hour component")]
    MalformedDuration(String),

    #[error("malformed valid time '{0}'")]
    MalformedValidTime(String),

    #[error("unknown wind direction '{0}'")]
    UnknownOctant(String),

    #[error("invalid {field} range: {min} to {max}")]
    InvalidRange { field: String, min: f64, max: f64 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
