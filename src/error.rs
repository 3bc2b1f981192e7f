//! Error types for the delivery fee calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every way a fee calculation or rule-set load can be rejected.

use thiserror::Error;

/// The main error type for the delivery fee calculator.
///
/// Calculation errors are deterministic rejections of a single order; they are
/// never retried or corrected. Configuration errors only occur while loading a
/// rule file at startup.
///
/// # Example
///
/// ```
/// use delivery_fee_calculator::error::FeeError;
///
/// let error = FeeError::InvalidArgument {
///     field: "cart_value".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid cart_value: must be greater than zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// A numeric order input was not strictly positive.
    #[error("Invalid {field}: {message}")]
    InvalidArgument {
        /// The name of the offending input.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The order time did not match the required timestamp pattern.
    #[error("Invalid time format '{value}'. Expected format: {expected}")]
    InvalidFormat {
        /// The rejected time string.
        value: String,
        /// The pattern the time string must follow.
        expected: String,
    },

    /// Rule file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The rule set parsed but is not internally consistent.
    #[error("Invalid fee rules: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },
}

impl FeeError {
    /// Shorthand for a non-positive numeric input.
    pub(crate) fn not_positive(field: &str) -> Self {
        FeeError::InvalidArgument {
            field: field.to_string(),
            message: "must be greater than zero".to_string(),
        }
    }
}

/// A type alias for Results that return FeeError.
pub type FeeResult<T> = Result<T, FeeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_field_and_message() {
        let error = FeeError::not_positive("delivery_distance");
        assert_eq!(
            error.to_string(),
            "Invalid delivery_distance: must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_format_displays_value_and_pattern() {
        let error = FeeError::InvalidFormat {
            value: "2024-01-15T15:00:00".to_string(),
            expected: "YYYY-MM-DDTHH:MM:SSZ".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time format '2024-01-15T15:00:00'. Expected format: YYYY-MM-DDTHH:MM:SSZ"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = FeeError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = FeeError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = FeeError::InvalidConfig {
            message: "distance_step must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid fee rules: distance_step must be greater than zero"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<FeeError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_argument() -> FeeResult<()> {
            Err(FeeError::not_positive("number_of_items"))
        }

        fn propagates_error() -> FeeResult<()> {
            returns_invalid_argument()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
