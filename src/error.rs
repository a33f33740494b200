//! Error types for the payroll desk.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the application can hit.

use thiserror::Error;

/// The main error type for the payroll desk.
///
/// Only fatal or locally-recovered failures become errors; user mistakes
/// (a bad menu choice, a search miss) are reported as messages by the shell
/// and never leave it.
///
/// # Example
///
/// ```
/// use payroll_desk::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/settings.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Settings file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The credential check at startup did not match.
    #[error("Invalid credentials")]
    AuthenticationFailed,

    /// The report file could not be written.
    #[error("Error writing report '{path}': {message}")]
    ReportExport {
        /// The destination path of the report.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// The interactive terminal could not be read or written.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
