//! Error types for the PesaFlow tracker
//!
//! This module defines all error types that can surface from the library.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: A message that is blank after trimming
//! - **File I/O Errors**: Message file not found, permission denied, etc.
//! - **Output Errors**: Failure to write CSV or the summary report
//!
//! Partial extraction problems (missing currency marker, unparsable number,
//! malformed time) are never errors: the parser degrades each field to its
//! sentinel instead.

use thiserror::Error;

/// Main error type for the tracker
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PesaError {
    /// The message text was empty or whitespace-only
    ///
    /// This is the only failure the parser reports. No record is produced.
    #[error("Message is empty")]
    EmptyInput,

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading messages
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Writing the report or CSV export failed
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the write failure
        message: String,
    },
}

// Conversion from io::Error to PesaError
impl From<std::io::Error> for PesaError {
    fn from(error: std::io::Error) -> Self {
        PesaError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to PesaError
impl From<csv::Error> for PesaError {
    fn from(error: csv::Error) -> Self {
        PesaError::OutputError {
            message: error.to_string(),
        }
    }
}

impl PesaError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        PesaError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an OutputError error
    pub fn output(message: &str) -> Self {
        PesaError::OutputError {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_input(PesaError::EmptyInput, "Message is empty")]
    #[case::file_not_found(
        PesaError::FileNotFound { path: "inbox.txt".to_string() },
        "File not found: inbox.txt"
    )]
    #[case::io_error(
        PesaError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::output_error(
        PesaError::OutputError { message: "broken pipe".to_string() },
        "Output error: broken pipe"
    )]
    fn test_error_display(#[case] error: PesaError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::file_not_found(
        PesaError::file_not_found("inbox.txt"),
        PesaError::FileNotFound { path: "inbox.txt".to_string() }
    )]
    #[case::output(
        PesaError::output("disk full"),
        PesaError::OutputError { message: "disk full".to_string() }
    )]
    fn test_helper_functions(#[case] result: PesaError, #[case] expected: PesaError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: PesaError = io_error.into();
        assert!(matches!(error, PesaError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
