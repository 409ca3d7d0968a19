//! Error types for shift-engine operations.

use thiserror::Error;

/// Raised when a required field cannot be turned into a valid clock time
/// or calendar date.
///
/// Ratio and count fields of a pomodoro plan never produce this error;
/// they fall back to defaults instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    DateRange(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
