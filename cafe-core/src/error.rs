//! Error types for Cafe Core

use thiserror::Error;

/// Result type alias using CafeError
pub type Result<T> = std::result::Result<T, CafeError>;

/// Top-level error type for all cafe operations
#[derive(Debug, Error)]
pub enum CafeError {
    #[error("A cafe named '{0}' already exists")]
    Duplicate(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CafeError {
    /// Shorthand for a validation failure
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
