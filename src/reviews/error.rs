//! Error types surfaced by review operations.

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Reasons a submitted review is refused before it reaches the store.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The menu name was empty once trimmed.
    #[error("menu name must not be empty")]
    EmptyMenu,

    /// The review body was empty once trimmed.
    #[error("review text must not be empty")]
    EmptyText,

    /// The rating fell outside 1 to 5.
    #[error("rating must be between 1 and 5, got {rating}")]
    RatingOutOfRange {
        /// The rejected rating.
        rating: i64,
    },
}

/// Errors returned by the review desk and the CLI built on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The submitted review failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The supplied admin secret did not match.
    #[error("admin password is incorrect")]
    Unauthorized,

    /// The underlying store failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Configuration was missing, blank, or contradictory.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the writer.
        message: String,
    },
}
