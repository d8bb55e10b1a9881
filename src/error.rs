//! Error handling module for tintbook
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Business rules never surface here: gates disable navigation and pricing
//! misses resolve to zero. These variants cover boundary failures only
//! (file IO, slot fetch, submission).

use thiserror::Error;

/// Main error type for tintbook
#[derive(Error, Debug)]
pub enum TintBookError {
    /// IO errors (reading/writing booking files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Booking document errors (loading, missing fields)
    #[error("Booking document error: {0}")]
    Document(String),

    /// Slot availability fetch failures (network stub, timeout budget spent)
    #[error("Slot availability error: {0}")]
    Slots(String),

    /// Submission failures from the terminal confirm stub
    #[error("Submission error: {0}")]
    Submission(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for tintbook operations
pub type Result<T> = std::result::Result<T, TintBookError>;

// Convenient error constructors
impl TintBookError {
    /// Create a booking document error
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Create a slot availability error
    pub fn slots(msg: impl Into<String>) -> Self {
        Self::Slots(msg.into())
    }

    /// Create a submission error
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
