//! Review desk: validation and the admin gate in front of a repository.

use chrono::Utc;

use crate::telemetry::{TelemetryEvent, TelemetrySink};

use super::{AdminSecret, NewReview, Review, ReviewError, ReviewId, ReviewRepository};

/// Applies the review operations to a borrowed repository.
///
/// # Example
///
/// ```no_run
/// use reviewdesk::persistence::SqliteReviewStore;
/// use reviewdesk::reviews::{AdminSecret, ReviewDesk};
/// use reviewdesk::telemetry::NoopTelemetrySink;
///
/// let telemetry = NoopTelemetrySink;
/// let store = SqliteReviewStore::open("reviews.db", &telemetry).expect("store should open");
/// let desk = ReviewDesk::new(&store, AdminSecret::default(), &telemetry);
/// let id = desk.create("bibimbap", "Crispy rice at the bottom.", 5).expect("valid review");
/// assert_eq!(desk.list().expect("list").first().map(|review| review.id), Some(id));
/// ```
pub struct ReviewDesk<'a, R: ReviewRepository> {
    repository: &'a R,
    secret: AdminSecret,
    telemetry: &'a dyn TelemetrySink,
}

impl<'a, R: ReviewRepository> ReviewDesk<'a, R> {
    /// Creates a desk over `repository` gated by `secret`.
    #[must_use]
    pub const fn new(repository: &'a R, secret: AdminSecret, telemetry: &'a dyn TelemetrySink) -> Self {
        Self {
            repository,
            secret,
            telemetry,
        }
    }

    /// Validates and stores a review, returning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Validation`] when the menu or text is blank or
    /// the rating is out of range, and [`ReviewError::Persistence`] when the
    /// insert fails. Nothing is stored on error.
    pub fn create(&self, menu: &str, text: &str, rating: i64) -> Result<ReviewId, ReviewError> {
        let review = NewReview::try_from_parts(menu, text, rating)?;
        let id = self.repository.insert(&review, Utc::now())?;

        tracing::info!(review_id = id.get(), rating = review.rating().get(), "review created");
        self.telemetry.record(TelemetryEvent::ReviewCreated {
            review_id: id.get(),
            rating: review.rating().get(),
        });
        Ok(id)
    }

    /// Returns every review, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Persistence`] when the store cannot be read.
    pub fn list(&self) -> Result<Vec<Review>, ReviewError> {
        Ok(self.repository.list_newest_first()?)
    }

    /// Deletes a review when `supplied_secret` matches.
    ///
    /// Deleting an identifier that does not exist succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Unauthorized`] when the secret does not match,
    /// and [`ReviewError::Persistence`] when the delete fails.
    pub fn delete(&self, id: ReviewId, supplied_secret: &str) -> Result<(), ReviewError> {
        self.authorise("delete", id, supplied_secret)?;
        let removed = self.repository.delete(id)?;

        tracing::info!(review_id = id.get(), removed, "review delete applied");
        self.telemetry.record(TelemetryEvent::ReviewDeleted {
            review_id: id.get(),
            removed,
        });
        Ok(())
    }

    /// Overwrites the admin comment on a review when `supplied_secret`
    /// matches. The comment is stored verbatim; an empty comment clears it.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Unauthorized`] when the secret does not match,
    /// and [`ReviewError::Persistence`] when the update fails.
    pub fn set_comment(
        &self,
        id: ReviewId,
        comment: &str,
        supplied_secret: &str,
    ) -> Result<(), ReviewError> {
        self.authorise("comment", id, supplied_secret)?;
        let updated = self.repository.set_admin_comment(id, comment)?;

        tracing::info!(review_id = id.get(), updated, "admin comment applied");
        self.telemetry.record(TelemetryEvent::AdminCommentSet {
            review_id: id.get(),
            updated,
        });
        Ok(())
    }

    fn authorise(
        &self,
        action: &str,
        id: ReviewId,
        supplied_secret: &str,
    ) -> Result<(), ReviewError> {
        if self.secret.verify(supplied_secret) {
            return Ok(());
        }

        tracing::warn!(action, review_id = id.get(), "admin secret rejected");
        self.telemetry.record(TelemetryEvent::AdminActionRejected {
            action: action.to_owned(),
            review_id: id.get(),
        });
        Err(ReviewError::Unauthorized)
    }
}
