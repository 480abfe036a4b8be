//! Error types for geo-center

use thiserror::Error;

/// Main error type for geo-center operations
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("No coordinates provided")]
    EmptyInput,

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// A malformed line in coordinate input
///
/// `line` holds the trimmed text as the user typed it, so callers can point
/// at the exact line that needs fixing.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid coordinate format on line {line_number}: '{line}' ({reason})")]
pub struct FormatError {
    /// 1-based line number in the raw input (blank lines included)
    pub line_number: usize,
    /// The offending line, trimmed
    pub line: String,
    /// What was wrong with it
    pub reason: String,
}

/// Result type alias for geo-center operations
pub type Result<T> = std::result::Result<T, Error>;
