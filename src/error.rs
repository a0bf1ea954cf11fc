//! Error types for the employee pair engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can stop a run: unreadable input, malformed
//! records and broken configuration. Finding no overlapping pair is not an
//! error and is reported by the selector instead.

use thiserror::Error;

/// The main error type for the employee pair engine.
///
/// Loading and configuration return this error type. Aggregation and
/// selection never fail once records have been loaded.
///
/// # Example
///
/// ```
/// use employee_pairs::error::PairError;
///
/// let error = PairError::MalformedRecord {
///     line: 3,
///     message: "expected 4 fields, found 2".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed record on line 3: expected 4 fields, found 2");
/// ```
#[derive(Debug, Error)]
pub enum PairError {
    /// The record source could not be opened or read.
    #[error("Input unavailable '{path}': {message}")]
    InputUnavailable {
        /// The path (or source name) that could not be read.
        path: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// A line did not split into exactly four fields.
    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord {
        /// The 1-based line number of the record.
        line: usize,
        /// A description of what was wrong with the line.
        message: String,
    },

    /// A date field could not be parsed.
    #[error("Invalid {field} on line {line}: '{value}'")]
    InvalidDate {
        /// The 1-based line number of the record.
        line: usize,
        /// Which field failed ("start date" or "end date").
        field: String,
        /// The raw text that failed to parse.
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
}

/// A type alias for Results that return PairError.
pub type PairResult<T> = Result<T, PairError>;
