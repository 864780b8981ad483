//! Reviewdesk library crate: a small review collection backed by `SQLite`.
//!
//! Customers submit a review naming a menu item with a 1 to 5 rating; the
//! list shows every review newest first. Deleting a review or attaching an
//! admin comment requires a shared admin secret. The [`reviews::ReviewDesk`]
//! applies validation and the secret gate over a
//! [`persistence::SqliteReviewStore`], which owns the database connection
//! and its embedded migrations.

pub mod config;
pub mod export;
pub mod persistence;
pub mod reviews;
pub mod telemetry;

pub use config::{OperationMode, OutputFormat, ReviewDeskConfig};
pub use persistence::{PersistenceError, SqliteReviewStore};
pub use reviews::{
    AdminSecret, NewReview, Rating, Review, ReviewDesk, ReviewError, ReviewId, ReviewRepository,
    ValidationError,
};
