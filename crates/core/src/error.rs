//! Error types for the discgap library.

use thiserror::Error;

/// Primary error type for bag analysis operations.
#[derive(Error, Debug)]
pub enum BagError {
    #[error("gap threshold must be at least 1, got {0}")]
    InvalidThreshold(i32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed disc data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for BagError.
pub type Result<T> = std::result::Result<T, BagError>;
