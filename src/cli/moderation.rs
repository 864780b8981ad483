//! Admin actions: deleting reviews and setting admin comments.

use reviewdesk::ReviewDeskConfig;
use reviewdesk::reviews::{ReviewDesk, ReviewError, ReviewRepository};

use super::listing;
use super::output::write_confirmation;

/// Deletes the review named by `--delete`, then prints the refreshed list.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when the id or password is
/// missing, [`ReviewError::Unauthorized`] when the password is wrong, and
/// persistence or I/O errors otherwise.
pub fn run_delete<R: ReviewRepository>(
    config: &ReviewDeskConfig,
    desk: &ReviewDesk<'_, R>,
) -> Result<(), ReviewError> {
    let format = config.output_format()?;
    let id = config.require_delete_target()?;
    let password = config.require_password()?;

    desk.delete(id, password)?;

    write_confirmation(format, &format!("Review #{id} deleted."))?;
    listing::run_with_format(format, desk)
}

/// Sets the admin comment named by `--comment-on` and `--comment`, then
/// prints the refreshed list.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when the id, comment, or password
/// is missing, [`ReviewError::Unauthorized`] when the password is wrong,
/// and persistence or I/O errors otherwise.
pub fn run_comment<R: ReviewRepository>(
    config: &ReviewDeskConfig,
    desk: &ReviewDesk<'_, R>,
) -> Result<(), ReviewError> {
    let format = config.output_format()?;
    let (id, comment) = config.require_comment()?;
    let password = config.require_password()?;

    desk.set_comment(id, comment, password)?;

    write_confirmation(format, &format!("Admin comment saved on review #{id}."))?;
    listing::run_with_format(format, desk)
}

/// Logs a warning when admin actions are gated by the built-in secret.
pub fn warn_if_default_secret(config: &ReviewDeskConfig) {
    if config.admin_secret.is_none() {
        tracing::warn!(
            "no admin secret configured; using the built-in default (set REVIEWDESK_ADMIN_SECRET)"
        );
    }
}
