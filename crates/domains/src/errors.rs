//! # DomainError
//!
//! Centralized error handling for the gamification core.
//! "No data" is never an error: empty lists, zero reputation and an empty
//! badge set are all valid outputs.

use thiserror::Error;

/// The primary error type for all domain and service operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unrecognized leaderboard category key. Always a caller bug.
    #[error("invalid leaderboard category: {0}")]
    InvalidCategory(String),

    /// Unrecognized badge identifier.
    #[error("unknown badge id: {0}")]
    UnknownBadge(String),

    /// Persistence failure in a badge store adapter
    #[error("badge store error: {0}")]
    Storage(String),

    /// Failure in an upstream record source (score or content records)
    #[error("record source error: {0}")]
    Source(String),

    /// (De)serialization failure at an adapter boundary
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

/// A specialized Result type for gamification logic.
pub type Result<T> = std::result::Result<T, DomainError>;
