//! Plain text formatter for reviews.

use std::io::Write;

use crate::reviews::{Rating, Review, ReviewError};

use super::io_error;

/// Line written when there is nothing to list.
pub const EMPTY_LIST_MESSAGE: &str = "No reviews have been submitted yet.";

/// Writes reviews as readable blocks separated by `---`.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] if writing to the output fails.
pub fn write_text<W: Write>(writer: &mut W, reviews: &[Review]) -> Result<(), ReviewError> {
    writeln!(writer, "Customer reviews").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if reviews.is_empty() {
        writeln!(writer, "{EMPTY_LIST_MESSAGE}").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for review in reviews {
        write_review(writer, review)?;
    }
    Ok(())
}

fn write_review<W: Write>(writer: &mut W, review: &Review) -> Result<(), ReviewError> {
    writeln!(writer, "#{} {}", review.id, review.menu).map_err(|e| io_error(&e))?;
    writeln!(writer, "Review: {}", review.text).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Rating: {} ({}/{})",
        review.rating.stars(),
        review.rating,
        Rating::MAX
    )
    .map_err(|e| io_error(&e))?;
    if !review.admin_comment.is_empty() {
        writeln!(writer, "Admin comment: {}", review.admin_comment).map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "Submitted: {}",
        review.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "---").map_err(|e| io_error(&e))?;
    Ok(())
}
