//! Database migration operations.

use reviewdesk::ReviewDeskConfig;
use reviewdesk::persistence::migrate_database;
use reviewdesk::reviews::ReviewError;
use reviewdesk::telemetry::{StderrJsonlTelemetrySink, TelemetrySink};

use super::map_persistence_error;
use super::output::write_line;

/// Runs database migrations, recording the schema version to stderr as
/// JSONL telemetry.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] if the database URL is blank, and
/// [`ReviewError::Persistence`] for connection or migration failures.
pub fn run(config: &ReviewDeskConfig) -> Result<(), ReviewError> {
    run_with_telemetry(config, &StderrJsonlTelemetrySink)
}

fn run_with_telemetry(
    config: &ReviewDeskConfig,
    telemetry: &dyn TelemetrySink,
) -> Result<(), ReviewError> {
    let database_url = config.resolve_database_url();

    let version = migrate_database(&database_url, telemetry)
        .map_err(|error| map_persistence_error(&error))?;

    write_line(&format!(
        "Database {} is at schema version {}",
        database_url.trim(),
        version.as_str()
    ))
}
