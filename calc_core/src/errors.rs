//! # Error Types
//!
//! Structured error types for calc_core. Every variant carries enough context
//! to explain which input or calculation went wrong, and serializes to JSON so
//! front ends can hand the error on unchanged.
//!
//! Note that a material lookup miss is *not* an error: lookups return
//! `Option<f64>` (see [`crate::materials`]). `MaterialNotFound` is only raised
//! by the orchestration layer when a calculation item cannot proceed without
//! the stress value.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius_mm: f64) -> CalcResult<()> {
//!     if radius_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "radius_mm".to_string(),
//!             value: radius_mm.to_string(),
//!             reason: "Radius must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, unknown name, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A formula denominator is zero or negative, so the result would be
    /// negative or infinite
    #[error("Non-physical input for {calculation_type}: {expression} = {denominator} (must be > 0)")]
    NonPhysicalInput {
        calculation_type: String,
        expression: String,
        denominator: f64,
    },

    /// No allowable stress for the material at the requested temperature
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonPhysicalInput error for a non-positive denominator
    pub fn non_physical(calculation_type: impl Into<String>, expression: impl Into<String>, denominator: f64) -> Self {
        CalcError::NonPhysicalInput {
            calculation_type: calculation_type.into(),
            expression: expression.into(),
            denominator,
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the combination of input values rather than
    /// by the environment (files, serialization).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::NonPhysicalInput { .. }
                | CalcError::MaterialNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NonPhysicalInput { .. } => "NON_PHYSICAL_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::non_physical("UG-27 shell", "S*E - 0.6*P", -6.5);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("NonPhysicalInput"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::material_not_found("SA-516-70").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::non_physical("x", "y", 0.0).error_code(), "NON_PHYSICAL_INPUT");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::non_physical("UG-32 head", "2KSE - 0.2P", -1.0).is_input_error());
        assert!(!CalcError::file_error("open", "a.pvc", "missing").is_input_error());
    }

    #[test]
    fn test_display_mentions_denominator() {
        let error = CalcError::non_physical("UG-27 shell", "S*E - 0.6*P", -6.5);
        assert!(error.to_string().contains("-6.5"));
    }
}
