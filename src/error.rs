//! Error handling for Filterlab
//!
//! All engine failures are reported as explicit values; singular frequency
//! samples are not errors and are flagged per-sample instead (see
//! [`crate::response::FrequencySample`]).

use thiserror::Error;

/// Result type alias for Filterlab operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Main error type for Filterlab operations
#[derive(Error, Debug)]
pub enum FilterError {
    /// The filter specification itself is unusable (non-finite gain,
    /// non-finite pole/zero coordinates, empty sweep axis).
    #[error("Invalid specification: {reason}")]
    InvalidSpecification { reason: String },

    /// The specification is well-formed but asks for something the engine
    /// deliberately does not compute (repeated poles, improper analog
    /// transfer functions).
    #[error("Unsupported configuration: {reason}")]
    UnsupportedConfiguration { reason: String },

    /// A single parameter is out of its documented range.
    #[error("Invalid parameter '{param}': got {value}, expected {expected}")]
    InvalidParameter {
        param: String,
        value: String,
        expected: String,
    },

    // I/O Errors (CLI surface)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FilterError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            FilterError::InvalidSpecification { .. } => "INVALID_SPECIFICATION",
            FilterError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            FilterError::InvalidParameter { .. } => "INVALID_PARAMETER",
            FilterError::Io(_) => "IO_ERROR",
            FilterError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Shorthand constructor for [`FilterError::InvalidSpecification`]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        FilterError::InvalidSpecification {
            reason: reason.into(),
        }
    }

    /// Shorthand constructor for [`FilterError::UnsupportedConfiguration`]
    pub fn unsupported(reason: impl Into<String>) -> Self {
        FilterError::UnsupportedConfiguration {
            reason: reason.into(),
        }
    }
}
