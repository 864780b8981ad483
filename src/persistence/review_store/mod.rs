//! Review table backed by `SQLite`.
//!
//! The store owns a single connection for its whole lifetime. Opening it
//! applies the embedded migrations, so every later operation can assume the
//! current schema. The connection sits behind a mutex so the store can be
//! shared by reference.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use diesel::OptionalExtension;
use diesel::QueryableByName;
use diesel::RunQueryDsl;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel::sqlite::SqliteConnection;

use crate::reviews::{NewReview, Rating, Review, ReviewId, ReviewRepository};
use crate::telemetry::TelemetrySink;

use super::PersistenceError;
use super::migrator::{SchemaVersion, establish_connection, run_migrations};

const REVIEWS_TABLE: &str = "reviews";

#[derive(Debug, QueryableByName)]
struct ReviewRow {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Text)]
    menu: String,
    #[diesel(sql_type = Text)]
    text: String,
    #[diesel(sql_type = Integer)]
    rating: i32,
    #[diesel(sql_type = Text)]
    admin_comment: String,
    #[diesel(sql_type = Text)]
    created_at: String,
}

impl TryFrom<ReviewRow> for Review {
    type Error = PersistenceError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let rating = Rating::new(i64::from(row.rating)).map_err(|error| {
            PersistenceError::QueryFailed {
                message: format!("review {} has an invalid rating: {error}", row.id),
            }
        })?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|error| PersistenceError::QueryFailed {
                message: format!(
                    "review {} has an invalid created_at {:?}: {error}",
                    row.id, row.created_at
                ),
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: ReviewId::new(row.id),
            menu: row.menu,
            text: row.text,
            rating,
            admin_comment: row.admin_comment,
            created_at,
        })
    }
}

/// SQLite-backed review store.
pub struct SqliteReviewStore {
    connection: Mutex<SqliteConnection>,
    schema_version: SchemaVersion,
}

impl SqliteReviewStore {
    /// Opens the database at `database_url` and applies pending migrations.
    ///
    /// `:memory:` opens a private in-memory database that lives as long as
    /// the store.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::BlankDatabaseUrl`] when the URL is blank,
    /// or a connection or migration error when the database cannot be
    /// prepared.
    pub fn open(
        database_url: &str,
        telemetry: &dyn TelemetrySink,
    ) -> Result<Self, PersistenceError> {
        let mut connection = establish_connection(database_url)?;
        let schema_version = run_migrations(&mut connection, telemetry)?;
        tracing::debug!(
            database_url = database_url.trim(),
            schema_version = schema_version.as_str(),
            "review store opened"
        );

        Ok(Self {
            connection: Mutex::new(connection),
            schema_version,
        })
    }

    /// Schema version applied when the store was opened.
    #[must_use]
    pub const fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }

    fn lock(&self) -> Result<MutexGuard<'_, SqliteConnection>, PersistenceError> {
        self.connection
            .lock()
            .map_err(|error| PersistenceError::ConnectionUnavailable {
                message: error.to_string(),
            })
    }

    fn last_insert_id(connection: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
        #[derive(Debug, QueryableByName)]
        struct Row {
            #[diesel(sql_type = BigInt)]
            id: i64,
        }

        sql_query("SELECT last_insert_rowid() AS id;")
            .get_result::<Row>(connection)
            .map(|row| row.id)
    }

    fn reviews_table_exists(
        connection: &mut SqliteConnection,
    ) -> Result<bool, diesel::result::Error> {
        #[derive(Debug, QueryableByName)]
        struct Row {
            #[diesel(sql_type = BigInt)]
            one: i64,
        }

        let exists: Option<Row> = sql_query(
            "SELECT 1 AS one FROM sqlite_master WHERE type = 'table' AND name = ? LIMIT 1;",
        )
        .bind::<Text, _>(REVIEWS_TABLE)
        .get_result(connection)
        .optional()?;

        Ok(exists.is_some_and(|row| row.one == 1))
    }

    fn map_error_with_schema_check<F>(
        connection: &mut SqliteConnection,
        error: &diesel::result::Error,
        create_error: F,
    ) -> PersistenceError
    where
        F: Fn(String) -> PersistenceError,
    {
        match Self::reviews_table_exists(connection) {
            Ok(false) => PersistenceError::SchemaNotInitialised,
            Ok(true) => create_error(error.to_string()),
            Err(check_error) => create_error(format!(
                "schema presence check failed: {check_error}; original error: {error}"
            )),
        }
    }

    fn map_query_error(
        connection: &mut SqliteConnection,
        error: &diesel::result::Error,
    ) -> PersistenceError {
        Self::map_error_with_schema_check(connection, error, |message| {
            PersistenceError::QueryFailed { message }
        })
    }

    fn map_write_error(
        connection: &mut SqliteConnection,
        error: &diesel::result::Error,
    ) -> PersistenceError {
        Self::map_error_with_schema_check(connection, error, |message| {
            PersistenceError::WriteFailed { message }
        })
    }

    #[cfg(test)]
    fn execute_raw(&self, statement: &str) -> Result<usize, diesel::result::Error> {
        let mut connection = self
            .connection
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        sql_query(statement).execute(&mut *connection)
    }
}

impl ReviewRepository for SqliteReviewStore {
    fn insert(
        &self,
        review: &NewReview,
        created_at: DateTime<Utc>,
    ) -> Result<ReviewId, PersistenceError> {
        let mut connection = self.lock()?;
        let created_at_text = created_at.to_rfc3339_opts(SecondsFormat::Micros, true);

        sql_query(
            "INSERT INTO reviews (menu, text, rating, admin_comment, created_at) \
             VALUES (?, ?, ?, '', ?);",
        )
        .bind::<Text, _>(review.menu())
        .bind::<Text, _>(review.text())
        .bind::<Integer, _>(i32::from(review.rating().get()))
        .bind::<Text, _>(created_at_text.as_str())
        .execute(&mut *connection)
        .map_err(|error| Self::map_write_error(&mut connection, &error))?;

        let id = Self::last_insert_id(&mut connection).map_err(|error| {
            PersistenceError::QueryFailed {
                message: error.to_string(),
            }
        })?;
        tracing::debug!(review_id = id, "review row inserted");
        Ok(ReviewId::new(id))
    }

    fn list_newest_first(&self) -> Result<Vec<Review>, PersistenceError> {
        let mut connection = self.lock()?;

        let rows: Vec<ReviewRow> = sql_query(
            "SELECT id, menu, text, rating, admin_comment, created_at \
             FROM reviews ORDER BY id DESC;",
        )
        .load(&mut *connection)
        .map_err(|error| Self::map_query_error(&mut connection, &error))?;

        tracing::debug!(count = rows.len(), "review rows loaded");
        rows.into_iter().map(Review::try_from).collect()
    }

    fn delete(&self, id: ReviewId) -> Result<bool, PersistenceError> {
        let mut connection = self.lock()?;

        let affected = sql_query("DELETE FROM reviews WHERE id = ?;")
            .bind::<BigInt, _>(id.get())
            .execute(&mut *connection)
            .map_err(|error| Self::map_write_error(&mut connection, &error))?;

        tracing::debug!(review_id = id.get(), affected, "review row delete executed");
        Ok(affected > 0)
    }

    fn set_admin_comment(&self, id: ReviewId, comment: &str) -> Result<bool, PersistenceError> {
        let mut connection = self.lock()?;

        let affected = sql_query("UPDATE reviews SET admin_comment = ? WHERE id = ?;")
            .bind::<Text, _>(comment)
            .bind::<BigInt, _>(id.get())
            .execute(&mut *connection)
            .map_err(|error| Self::map_write_error(&mut connection, &error))?;

        tracing::debug!(review_id = id.get(), affected, "admin comment update executed");
        Ok(affected > 0)
    }
}

impl fmt::Debug for SqliteReviewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteReviewStore")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}
