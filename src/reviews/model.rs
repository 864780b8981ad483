//! Review records and the validated inputs used to create them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::ValidationError;

/// Surrogate key assigned by the store when a review is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReviewId(i64);

impl ReviewId {
    /// Wraps a raw row identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating between [`Rating::MIN`] and [`Rating::MAX`] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;
    /// Rating used when a submission does not choose one.
    pub const DEFAULT: Self = Self(3);

    /// Validates a raw rating.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatingOutOfRange`] when `value` is not in
    /// 1 to 5.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (Self::MIN..=Self::MAX).contains(rating))
            .map(Self)
            .ok_or(ValidationError::RatingOutOfRange { rating: value })
    }

    /// Returns the rating as a number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Renders the rating as filled and empty stars, e.g. `★★★☆☆`.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX - self.0);
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A review that passed validation and may be inserted.
///
/// ## Invariants
/// - `menu` and `text` are non-empty once trimmed; the stored values keep
///   the caller's original whitespace.
/// - `rating` is within 1 to 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    menu: String,
    text: String,
    rating: Rating,
}

impl NewReview {
    /// Validates raw submission values.
    ///
    /// Fields are checked in form order: menu, then text, then rating.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn try_from_parts(menu: &str, text: &str, rating: i64) -> Result<Self, ValidationError> {
        if menu.trim().is_empty() {
            return Err(ValidationError::EmptyMenu);
        }
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let validated_rating = Rating::new(rating)?;

        Ok(Self {
            menu: menu.to_owned(),
            text: text.to_owned(),
            rating: validated_rating,
        })
    }

    /// Name of the reviewed menu item.
    #[must_use]
    pub fn menu(&self) -> &str {
        &self.menu
    }

    /// Review body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Star rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Store-assigned identifier.
    pub id: ReviewId,
    /// Name of the reviewed menu item.
    pub menu: String,
    /// Review body.
    pub text: String,
    /// Star rating.
    pub rating: Rating,
    /// Moderator note; empty until an admin sets one.
    pub admin_comment: String,
    /// Creation time, never changed afterwards.
    pub created_at: DateTime<Utc>,
}
