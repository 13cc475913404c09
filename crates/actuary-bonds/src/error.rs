//! Error types for bond operations.

use actuary_core::ActuaryError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Invalid input or undefined arithmetic.
    #[error("Core error: {0}")]
    CoreError(#[from] ActuaryError),
}

impl BondError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Returns true if the bond was rejected for an out-of-domain input.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::CoreError(e) if e.is_invalid_parameter())
    }

    /// Returns true if pricing hit an undefined formula.
    #[must_use]
    pub fn is_arithmetic_undefined(&self) -> bool {
        matches!(self, Self::CoreError(e) if e.is_arithmetic_undefined())
    }
}
