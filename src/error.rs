//! Error types for the payroll model.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few conditions the model refuses to normalize away.

use thiserror::Error;

/// The main error type for the payroll model.
///
/// Most invalid input is silently normalized (blank text becomes absent,
/// negative money becomes `0.00`). The variants below cover the inputs that
/// are rejected instead.
///
/// # Example
///
/// ```
/// use payroll_model::error::PayrollError;
///
/// let error = PayrollError::MissingValue {
///     field: "annual_salary".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required value: annual_salary");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// An argument was present but not acceptable (e.g. a blank deduction name).
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was rejected.
        field: String,
        /// A description of why it was rejected.
        message: String,
    },

    /// A value that must be present was absent.
    #[error("Missing required value: {field}")]
    MissingValue {
        /// The field or argument that was absent.
        field: String,
    },

    /// A monetary calculation left the range of representable amounts.
    #[error("Arithmetic overflow during {operation}")]
    ArithmeticOverflow {
        /// The calculation that overflowed.
        operation: String,
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
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
