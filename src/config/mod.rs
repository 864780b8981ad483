//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewdesk.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWDESK_DATABASE_URL`,
//!    `REVIEWDESK_ADMIN_SECRET`, and so on
//! 4. **Command-line arguments** – `--database-url`, `--menu`, `--delete`, ...
//!
//! # Configuration File
//!
//! ```toml
//! database_url = "/var/lib/reviewdesk/reviews.db"
//! admin_secret = "change-me"
//! format = "text"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::reviews::{AdminSecret, Rating, ReviewError, ReviewId};

/// File name used for the database when none is configured.
pub const DEFAULT_DATABASE_FILE: &str = "reviews.db";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Apply migrations and exit.
    Migrate,
    /// Submit a new review.
    Submit,
    /// Delete a review (admin).
    Delete,
    /// Set the admin comment on a review (admin).
    Comment,
    /// Print every review, newest first.
    List,
}

/// Output format for the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable blocks separated by `---`.
    #[default]
    Text,
    /// One JSON object per line.
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "jsonl" | "json-lines" | "jsonlines" => Ok(Self::Jsonl),
            _ => Err(ReviewError::Configuration {
                message: format!(
                    "unsupported output format '{s}': valid options are 'text' or 'jsonl'"
                ),
            }),
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewdesk::ReviewDeskConfig;
///
/// let config = ReviewDeskConfig::load().expect("failed to load configuration");
/// let database_url = config.resolve_database_url();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWDESK",
    discovery(
        dotfile_name = ".reviewdesk.toml",
        config_file_name = "reviewdesk.toml",
        app_name = "reviewdesk"
    )
)]
pub struct ReviewDeskConfig {
    /// Local `SQLite` database path.
    ///
    /// Defaults to `reviews.db` in the system temporary directory.
    ///
    /// Can be provided via:
    /// - CLI: `--database-url <PATH>` or `-u <PATH>`
    /// - Environment: `REVIEWDESK_DATABASE_URL`
    /// - Config file: `database_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub database_url: Option<String>,

    /// Runs database migrations and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--migrate-db` or `-M`
    /// - Config file: `migrate_db = true`
    #[ortho_config(cli_short = 'M')]
    pub migrate_db: bool,

    /// Shared secret required to delete reviews or set admin comments.
    ///
    /// Falls back to [`crate::reviews::DEFAULT_ADMIN_SECRET`] when unset.
    ///
    /// Can be provided via:
    /// - CLI: `--admin-secret <SECRET>` or `-a <SECRET>`
    /// - Environment: `REVIEWDESK_ADMIN_SECRET`
    /// - Config file: `admin_secret = "..."`
    #[ortho_config(cli_short = 'a')]
    pub admin_secret: Option<String>,

    /// Menu item being reviewed.
    #[ortho_config(cli_short = 'm')]
    pub menu: Option<String>,

    /// Review body.
    #[ortho_config(cli_short = 't')]
    pub text: Option<String>,

    /// Star rating from 1 to 5; defaults to 3 when submitting.
    #[ortho_config(cli_short = 'r')]
    pub rating: Option<i64>,

    /// Identifier of a review to delete.
    #[ortho_config(cli_short = 'd')]
    pub delete: Option<i64>,

    /// Identifier of a review to set the admin comment on.
    #[ortho_config(cli_short = 'c')]
    pub comment_on: Option<i64>,

    /// Admin comment text, stored verbatim.
    #[ortho_config(cli_short = 'C')]
    pub comment: Option<String>,

    /// Admin password supplied for delete or comment.
    #[ortho_config(cli_short = 'p')]
    pub password: Option<String>,

    /// List output format: `text` (default) or `jsonl`.
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Emits telemetry events to stderr as JSON lines.
    #[ortho_config(cli_short = 'T')]
    pub telemetry: bool,
}

impl ReviewDeskConfig {
    /// Returns the configured database path or the default under the system
    /// temporary directory.
    #[must_use]
    pub fn resolve_database_url(&self) -> String {
        self.database_url.clone().unwrap_or_else(|| {
            env::temp_dir()
                .join(DEFAULT_DATABASE_FILE)
                .to_string_lossy()
                .into_owned()
        })
    }

    /// Builds the admin secret, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when a blank secret is
    /// configured.
    pub fn resolve_admin_secret(&self) -> Result<AdminSecret, ReviewError> {
        self.admin_secret
            .as_deref()
            .map_or_else(|| Ok(AdminSecret::default()), AdminSecret::new)
    }

    /// Returns the rating to submit, defaulting to 3.
    #[must_use]
    pub fn submitted_rating(&self) -> i64 {
        self.rating
            .unwrap_or_else(|| i64::from(Rating::DEFAULT.get()))
    }

    /// Returns the supplied admin password.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when no password was supplied.
    pub fn require_password(&self) -> Result<&str, ReviewError> {
        self.password
            .as_deref()
            .ok_or_else(|| ReviewError::Configuration {
                message: "admin password is required (use --password or -p)".to_owned(),
            })
    }

    /// Returns the review targeted by `--delete`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when no identifier was given.
    pub fn require_delete_target(&self) -> Result<ReviewId, ReviewError> {
        self.delete
            .map(ReviewId::new)
            .ok_or_else(|| ReviewError::Configuration {
                message: "review id is required (use --delete or -d)".to_owned(),
            })
    }

    /// Returns the review and comment for `--comment-on`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when either value is missing.
    pub fn require_comment(&self) -> Result<(ReviewId, &str), ReviewError> {
        match (self.comment_on, self.comment.as_deref()) {
            (Some(id), Some(comment)) => Ok((ReviewId::new(id), comment)),
            (None, _) => Err(ReviewError::Configuration {
                message: "review id is required (use --comment-on or -c)".to_owned(),
            }),
            (_, None) => Err(ReviewError::Configuration {
                message: "comment text is required (use --comment)".to_owned(),
            }),
        }
    }

    /// Parses the list output format.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] for unknown formats.
    pub fn output_format(&self) -> Result<OutputFormat, ReviewError> {
        self.format
            .as_deref()
            .map_or(Ok(OutputFormat::default()), str::parse)
    }

    const fn is_submission(&self) -> bool {
        self.menu.is_some() || self.text.is_some() || self.rating.is_some()
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// The first requested of migrate, submit, delete, and comment is
    /// chosen, falling back to listing. Call [`Self::validate`] first to
    /// reject combinations.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.migrate_db {
            OperationMode::Migrate
        } else if self.is_submission() {
            OperationMode::Submit
        } else if self.delete.is_some() {
            OperationMode::Delete
        } else if self.comment_on.is_some() || self.comment.is_some() {
            OperationMode::Comment
        } else {
            OperationMode::List
        }
    }

    /// Rejects configurations that request more than one action.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] describing the conflict.
    pub fn validate(&self) -> Result<(), ReviewError> {
        let requested: Vec<&str> = [
            (self.migrate_db, "--migrate-db"),
            (self.is_submission(), "--menu/--text/--rating"),
            (self.delete.is_some(), "--delete"),
            (
                self.comment_on.is_some() || self.comment.is_some(),
                "--comment-on/--comment",
            ),
        ]
        .into_iter()
        .filter_map(|(present, flag)| present.then_some(flag))
        .collect();

        if requested.len() > 1 {
            return Err(ReviewError::Configuration {
                message: format!("choose one action, got {}", requested.join(" and ")),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
