//! Review collection: validated submissions, the admin gate, and the desk
//! service applying both over a [`ReviewRepository`].
//!
//! The desk exposes four operations. `create` validates and stores a review,
//! `list` returns every review newest first, and `delete` and `set_comment`
//! require the shared admin secret. Mutations only report success or
//! failure; callers re-read the list when they want a fresh view.

mod admin;
mod desk;
mod error;
mod model;

use chrono::{DateTime, Utc};

use crate::persistence::PersistenceError;

pub use admin::{AdminSecret, DEFAULT_ADMIN_SECRET};
pub use desk::ReviewDesk;
pub use error::{ReviewError, ValidationError};
pub use model::{NewReview, Rating, Review, ReviewId};

/// Storage seam used by [`ReviewDesk`].
pub trait ReviewRepository {
    /// Stores a validated review and returns its new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the write fails.
    fn insert(
        &self,
        review: &NewReview,
        created_at: DateTime<Utc>,
    ) -> Result<ReviewId, PersistenceError>;

    /// Returns every stored review ordered by identifier, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the query fails.
    fn list_newest_first(&self) -> Result<Vec<Review>, PersistenceError>;

    /// Removes a review, returning whether a row existed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the write fails.
    fn delete(&self, id: ReviewId) -> Result<bool, PersistenceError>;

    /// Overwrites a review's admin comment, returning whether a row existed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the write fails.
    fn set_admin_comment(&self, id: ReviewId, comment: &str) -> Result<bool, PersistenceError>;
}
