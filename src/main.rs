//! Reviewdesk CLI entrypoint: submit, list, and moderate reviews.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewdesk::{OperationMode, ReviewDeskConfig, ReviewError};
use tracing_subscriber::{EnvFilter, fmt};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(error = %error, "command failed");
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ignored = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), ReviewError> {
    let config = load_config()?;
    config.validate()?;

    let telemetry = cli::telemetry_sink(&config);
    let mode = config.operation_mode();
    tracing::debug!(?mode, "operation mode selected");

    match mode {
        OperationMode::Migrate => cli::migrations::run(&config),
        OperationMode::Submit => cli::with_desk(&config, mode, telemetry.as_ref(), |desk| {
            cli::submit::run(&config, desk)
        }),
        OperationMode::Delete => {
            cli::moderation::warn_if_default_secret(&config);
            cli::with_desk(&config, mode, telemetry.as_ref(), |desk| {
                cli::moderation::run_delete(&config, desk)
            })
        }
        OperationMode::Comment => {
            cli::moderation::warn_if_default_secret(&config);
            cli::with_desk(&config, mode, telemetry.as_ref(), |desk| {
                cli::moderation::run_comment(&config, desk)
            })
        }
        OperationMode::List => cli::with_desk(&config, mode, telemetry.as_ref(), |desk| {
            cli::listing::run(&config, desk)
        }),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewDeskConfig, ReviewError> {
    ReviewDeskConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}
