//! Error types for the employee payroll crate.
//!
//! The registry and salary rules are total functions and never fail. Errors
//! only arise at the edges: parsing operator input, loading configuration,
//! and reading or writing the console streams.

use thiserror::Error;

/// The main error type for the employee payroll crate.
///
/// # Example
///
/// ```
/// use employee_payroll::error::PayrollError;
///
/// let error = PayrollError::InvalidVariantKind {
///     value: "3".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid employee type: 3");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The requested employee type is neither an office employee nor a worker.
    #[error("Invalid employee type: {value}")]
    InvalidVariantKind {
        /// The raw value that was entered.
        value: String,
    },

    /// A field expected to hold a whole number could not be parsed.
    #[error("Malformed number for '{field}': {value:?}")]
    MalformedNumericInput {
        /// The field being entered.
        field: String,
        /// The raw value that was entered.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_variant_kind_displays_value() {
        let error = PayrollError::InvalidVariantKind {
            value: "manager".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid employee type: manager");
    }

    #[test]
    fn test_malformed_numeric_input_displays_field_and_value() {
        let error = PayrollError::MalformedNumericInput {
            field: "working days".to_string(),
            value: "twenty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed number for 'working days': \"twenty\""
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> PayrollResult<()> {
            let write: std::io::Result<()> =
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
            write?;
            Ok(())
        }

        match fails() {
            Err(PayrollError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }
}
