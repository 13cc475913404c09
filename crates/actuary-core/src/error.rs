//! Error types for the Actuary library.
//!
//! Two failure classes exist. [`ActuaryError::InvalidParameter`] is raised when
//! a value is rejected at construction or at a setter, and
//! [`ActuaryError::ArithmeticUndefined`] is raised when a formula cannot be
//! evaluated for otherwise acceptable inputs (a zero rate in a denominator, a
//! non-finite result).
//!
//! A value that simply does not exist, such as the future value of a
//! perpetuity, is not an error: it is reported as `None`.

use thiserror::Error;

/// A specialized Result type for Actuary operations.
pub type ActuaryResult<T> = Result<T, ActuaryError>;

/// The main error type for Actuary operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActuaryError {
    /// A parameter was outside its valid domain.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// A formula is undefined for the current state.
    #[error("Arithmetic undefined in {operation}: {reason}")]
    ArithmeticUndefined {
        /// The operation being evaluated.
        operation: &'static str,
        /// Description of the failure.
        reason: String,
    },
}

impl ActuaryError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Creates an arithmetic undefined error.
    #[must_use]
    pub fn arithmetic_undefined(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::ArithmeticUndefined {
            operation,
            reason: reason.into(),
        }
    }

    /// Returns true for [`ActuaryError::InvalidParameter`].
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns true for [`ActuaryError::ArithmeticUndefined`].
    #[must_use]
    pub fn is_arithmetic_undefined(&self) -> bool {
        matches!(self, Self::ArithmeticUndefined { .. })
    }
}

/// Rejects a non-finite formula result.
///
/// Infinities and `NaN` become [`ActuaryError::ArithmeticUndefined`] tagged
/// with `operation`.
pub fn ensure_finite(operation: &'static str, value: f64) -> ActuaryResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ActuaryError::arithmetic_undefined(
            operation,
            format!("result is not finite ({value})"),
        ))
    }
}

/// Rejects a zero interest rate used as a divisor.
pub(crate) fn ensure_nonzero_rate(operation: &'static str, interest: f64) -> ActuaryResult<()> {
    if interest == 0.0 {
        return Err(ActuaryError::arithmetic_undefined(
            operation,
            "division by a zero interest rate",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ActuaryError::invalid_parameter("interest", -1.5, "must be greater than -1");
        assert!(err.to_string().contains("interest"));
        assert!(err.to_string().contains("-1.5"));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_arithmetic_error() {
        let err = ActuaryError::arithmetic_undefined("present value", "division by zero");
        assert!(err.to_string().contains("present value"));
        assert!(err.is_arithmetic_undefined());
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("op", 1.5), Ok(1.5));
        assert!(ensure_finite("op", f64::INFINITY)
            .unwrap_err()
            .is_arithmetic_undefined());
        assert!(ensure_finite("op", f64::NAN)
            .unwrap_err()
            .is_arithmetic_undefined());
    }

    #[test]
    fn test_ensure_nonzero_rate() {
        assert!(ensure_nonzero_rate("op", 0.05).is_ok());
        assert!(ensure_nonzero_rate("op", -0.0)
            .unwrap_err()
            .is_arithmetic_undefined());
    }
}
