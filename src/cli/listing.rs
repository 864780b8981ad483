//! Review listing.

use reviewdesk::reviews::{ReviewDesk, ReviewError, ReviewRepository};
use reviewdesk::{OutputFormat, ReviewDeskConfig};

use super::output::write_reviews;

/// Reads every review and prints it in the configured format.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] for an unknown format, and
/// persistence or I/O errors from reading and writing.
pub fn run<R: ReviewRepository>(
    config: &ReviewDeskConfig,
    desk: &ReviewDesk<'_, R>,
) -> Result<(), ReviewError> {
    run_with_format(config.output_format()?, desk)
}

/// Re-reads the list and prints it; used after every mutation.
pub fn run_with_format<R: ReviewRepository>(
    format: OutputFormat,
    desk: &ReviewDesk<'_, R>,
) -> Result<(), ReviewError> {
    let reviews = desk.list()?;
    write_reviews(format, &reviews)
}
