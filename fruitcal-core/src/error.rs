//! Error types for fruitcal.

use thiserror::Error;

/// Errors that can occur in fruitcal operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for fruitcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
