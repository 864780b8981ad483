//! Local persistence and database migrations.
//!
//! Reviews live in a local `SQLite` database. The schema is managed with
//! embedded Diesel migrations so a fresh file and one written by an older
//! build both end up on the current schema when the store opens.

mod error;
mod migrator;
mod review_store;

pub use error::PersistenceError;
pub use migrator::{
    CURRENT_SCHEMA_VERSION, INITIAL_SCHEMA_VERSION, SchemaVersion, migrate_database,
    run_migrations,
};
pub use review_store::SqliteReviewStore;
