//! Configuration error types.

use actuary_bonds::BondError;
use actuary_core::ActuaryError;
use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", format_errors(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Instrument construction rejected the configuration.
    #[error("Core error: {0}")]
    Core(#[from] ActuaryError),

    /// Bond construction rejected the configuration.
    #[error("Bond error: {0}")]
    Bond(#[from] BondError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a validation error from a rejected instrument parameter.
    pub fn from_rejection(field: impl Into<String>, err: &ActuaryError) -> Self {
        let message = match err {
            ActuaryError::InvalidParameter { reason, .. }
            | ActuaryError::ArithmeticUndefined { reason, .. } => reason.clone(),
        };
        Self::new(field, message)
    }

    /// Prefixes the field path, e.g. `interest` becomes `instruments[2].interest`.
    #[must_use]
    pub fn nested(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}.{}", self.field),
            message: self.message,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ConfigError::Deserialization(err.to_string())
        } else {
            ConfigError::Serialization(err.to_string())
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<ValidationError>);

    impl Validate for Fixed {
        fn validate(&self) -> Vec<ValidationError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_validate_or_error_single() {
        let cfg = Fixed(vec![ValidationError::new("interest", "must be finite")]);
        let err = cfg.validate_or_error().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: interest: must be finite");
    }

    #[test]
    fn test_validate_or_error_multiple() {
        let cfg = Fixed(vec![
            ValidationError::new("interest", "must be finite"),
            ValidationError::new("periods", "must be non-negative"),
        ]);
        assert!(!cfg.is_valid());
        let err = cfg.validate_or_error().unwrap_err();
        assert!(matches!(err, ConfigError::MultipleValidationErrors(ref v) if v.len() == 2));
        assert!(err.to_string().contains("periods: must be non-negative"));
    }

    #[test]
    fn test_from_rejection_keeps_reason() {
        let err = ActuaryError::invalid_parameter("interest", -2.0, "must be greater than -1");
        let validation = ValidationError::from_rejection("interest", &err);
        assert_eq!(validation.to_string(), "interest: must be greater than -1");
    }

    #[test]
    fn test_nested_field() {
        let err = ValidationError::new("interest", "bad").nested("instruments[1]");
        assert_eq!(err.field, "instruments[1].interest");
    }

    #[test]
    fn test_json_error_is_deserialization() {
        let err: ConfigError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }
}
