//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`migrations`]: Database schema migrations
//! - [`submit`]: Store a new review
//! - [`moderation`]: Admin delete and comment actions
//! - [`listing`]: Print the stored reviews
//!
//! Output formatting utilities are in [`output`].

use reviewdesk::persistence::PersistenceError;
use reviewdesk::reviews::{AdminSecret, ReviewDesk, ReviewError};
use reviewdesk::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use reviewdesk::{OperationMode, ReviewDeskConfig, SqliteReviewStore};

pub mod listing;
pub mod migrations;
pub mod moderation;
pub mod output;
pub mod submit;

/// Returns the telemetry sink selected by `--telemetry`.
pub fn telemetry_sink(config: &ReviewDeskConfig) -> Box<dyn TelemetrySink> {
    if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    }
}

/// Opens the store, builds a desk over it for `mode`, and runs `action`.
///
/// # Errors
///
/// Returns configuration errors for a blank database URL or, in the admin
/// modes, a blank admin secret; persistence errors when the store cannot be
/// opened; and whatever `action` returns.
pub fn with_desk<F>(
    config: &ReviewDeskConfig,
    mode: OperationMode,
    telemetry: &dyn TelemetrySink,
    action: F,
) -> Result<(), ReviewError>
where
    F: FnOnce(&ReviewDesk<'_, SqliteReviewStore>) -> Result<(), ReviewError>,
{
    let secret = desk_secret(config, mode)?;
    let database_url = config.resolve_database_url();
    let store = SqliteReviewStore::open(&database_url, telemetry)
        .map_err(|error| map_persistence_error(&error))?;
    let desk = ReviewDesk::new(&store, secret, telemetry);
    action(&desk)
}

/// Resolves the admin secret for the modes that check it.
///
/// Submitting and listing never consult the secret, so its configuration
/// cannot make them fail.
fn desk_secret(config: &ReviewDeskConfig, mode: OperationMode) -> Result<AdminSecret, ReviewError> {
    match mode {
        OperationMode::Delete | OperationMode::Comment => config.resolve_admin_secret(),
        OperationMode::Migrate | OperationMode::Submit | OperationMode::List => {
            Ok(AdminSecret::default())
        }
    }
}

/// Maps a persistence error to a review error.
///
/// Configuration-related errors (blank URL) become
/// [`ReviewError::Configuration`]; everything else stays a persistence error.
pub fn map_persistence_error(error: &PersistenceError) -> ReviewError {
    if is_configuration_error(error) {
        ReviewError::Configuration {
            message: error.to_string(),
        }
    } else {
        ReviewError::Persistence(error.clone())
    }
}

/// Returns true if the persistence error is a configuration problem.
const fn is_configuration_error(error: &PersistenceError) -> bool {
    matches!(error, PersistenceError::BlankDatabaseUrl)
}

#[cfg(test)]
mod tests {
    use reviewdesk::persistence::PersistenceError;
    use reviewdesk::reviews::ReviewError;
    use reviewdesk::telemetry::NoopTelemetrySink;
    use reviewdesk::{OperationMode, ReviewDeskConfig};
    use rstest::rstest;

    use super::{map_persistence_error, with_desk};

    #[rstest]
    #[case::blank(PersistenceError::BlankDatabaseUrl, true)]
    #[case::connection(PersistenceError::ConnectionFailed { message: "denied".to_owned() }, false)]
    #[case::query(PersistenceError::QueryFailed { message: "boom".to_owned() }, false)]
    fn persistence_errors_are_classified(#[case] error: PersistenceError, #[case] is_config: bool) {
        let mapped = map_persistence_error(&error);

        assert_eq!(
            matches!(mapped, ReviewError::Configuration { .. }),
            is_config,
            "unexpected mapping {mapped:?}"
        );
    }

    #[test]
    fn with_desk_rejects_blank_database_url() {
        let config = ReviewDeskConfig {
            database_url: Some("   ".to_owned()),
            ..Default::default()
        };

        let result = with_desk(&config, OperationMode::List, &NoopTelemetrySink, |_desk| Ok(()));

        assert!(
            matches!(result, Err(ReviewError::Configuration { .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn with_desk_runs_action_against_fresh_store() {
        let config = ReviewDeskConfig {
            database_url: Some(":memory:".to_owned()),
            ..Default::default()
        };

        let result = with_desk(&config, OperationMode::Submit, &NoopTelemetrySink, |desk| {
            let id = desk.create("hotteok", "Sweet syrup.", 5)?;
            let reviews = desk.list()?;
            assert_eq!(reviews.first().map(|review| review.id), Some(id));
            Ok(())
        });

        assert_eq!(result, Ok(()));
    }

    fn blank_secret_config() -> ReviewDeskConfig {
        ReviewDeskConfig {
            database_url: Some(":memory:".to_owned()),
            admin_secret: Some("   ".to_owned()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case::list(OperationMode::List)]
    #[case::submit(OperationMode::Submit)]
    fn blank_admin_secret_does_not_block_public_modes(#[case] mode: OperationMode) {
        let config = blank_secret_config();

        let result = with_desk(&config, mode, &NoopTelemetrySink, |desk| {
            desk.create("kimbap", "Neat rolls.", 4)?;
            Ok(())
        });

        assert_eq!(result, Ok(()));
    }

    #[rstest]
    #[case::delete(OperationMode::Delete)]
    #[case::comment(OperationMode::Comment)]
    fn blank_admin_secret_blocks_admin_modes(#[case] mode: OperationMode) {
        let config = blank_secret_config();

        let result = with_desk(&config, mode, &NoopTelemetrySink, |_desk| Ok(()));

        assert!(
            matches!(result, Err(ReviewError::Configuration { ref message }) if message.contains("admin secret")),
            "got {result:?}"
        );
    }
}
