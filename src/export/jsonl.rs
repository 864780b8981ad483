//! JSONL (JSON Lines) formatter for reviews.

use std::io::Write;

use crate::reviews::{Review, ReviewError};

use super::io_error;

/// Writes reviews in JSONL format to the given writer.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] if writing to the output or JSON
/// serialization fails.
pub fn write_jsonl<W: Write>(writer: &mut W, reviews: &[Review]) -> Result<(), ReviewError> {
    for review in reviews {
        serde_json::to_writer(&mut *writer, review).map_err(|e| ReviewError::Io {
            message: format!("JSON serialization failed: {e}"),
        })?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}
