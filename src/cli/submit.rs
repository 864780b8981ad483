//! Review submission.

use reviewdesk::ReviewDeskConfig;
use reviewdesk::reviews::{ReviewDesk, ReviewError, ReviewRepository};

use super::listing;
use super::output::write_confirmation;

/// Submits the review described by `--menu`, `--text`, and `--rating`,
/// then prints the refreshed list.
///
/// Missing menu or text are treated as empty and rejected by validation.
///
/// # Errors
///
/// Returns [`ReviewError::Validation`] for empty fields or an out-of-range
/// rating, and persistence or I/O errors otherwise.
pub fn run<R: ReviewRepository>(
    config: &ReviewDeskConfig,
    desk: &ReviewDesk<'_, R>,
) -> Result<(), ReviewError> {
    let format = config.output_format()?;
    let menu = config.menu.as_deref().unwrap_or_default();
    let text = config.text.as_deref().unwrap_or_default();

    let id = desk.create(menu, text, config.submitted_rating())?;

    write_confirmation(format, &format!("Review #{id} submitted."))?;
    listing::run_with_format(format, desk)
}
