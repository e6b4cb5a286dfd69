//! Error types for the daygrid ecosystem.

use thiserror::Error;

/// Errors that can occur in daygrid operations.
///
/// The layout engine itself never returns these — malformed display data
/// degrades to zero-valued geometry instead of failing. Errors exist for
/// the store and configuration boundary.
#[derive(Error, Debug)]
pub enum DayGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event parse error: {0}")]
    EventParse(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for daygrid operations.
pub type DayGridResult<T> = Result<T, DayGridError>;
