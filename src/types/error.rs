//! Error types for the interest calculator
//!
//! Interest calculation itself cannot fail: every category resolves to a
//! rule and every rule is total. Errors only arise while reading account
//! files and writing results.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed rows, missing columns, etc.
//! - **Balance Errors**: Balances that are not finite numbers

use crate::types::AccountId;
use thiserror::Error;

/// Main error type for the interest calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterestError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// This is typically a fatal error (file permissions, broken pipe, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed row is skipped
    /// and processing continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Balance is missing, not a number, or not finite
    ///
    /// This is a recoverable error - the row is skipped.
    #[error("Invalid balance '{balance}' for account {account}")]
    InvalidBalance {
        /// The balance text as it appeared in the input
        balance: String,
        /// Account ID
        account: AccountId,
    },
}

impl From<std::io::Error> for InterestError {
    fn from(error: std::io::Error) -> Self {
        InterestError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for InterestError {
    fn from(error: csv::Error) -> Self {
        // An I/O failure underneath the writer is not a parse problem
        if error.is_io_error() {
            return InterestError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        InterestError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for InterestError {
    fn from(error: csv_async::Error) -> Self {
        if error.is_io_error() {
            return InterestError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        InterestError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl InterestError {
    /// Create an error for a file that could not be opened
    ///
    /// A missing file maps to `FileNotFound`; everything else is an `IoError`
    /// naming the path.
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            InterestError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            InterestError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create a ParseError with an optional line number
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        InterestError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidBalance error
    pub fn invalid_balance(balance: &str, account: AccountId) -> Self {
        InterestError::InvalidBalance {
            balance: balance.to_string(),
            account,
        }
    }

    /// Whether processing should stop on this error
    ///
    /// Row-level problems are skipped; anything touching the files themselves
    /// ends the run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            InterestError::FileNotFound { .. } | InterestError::IoError { .. }
        )
    }
}
