//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use reviewdesk::OutputFormat;
use reviewdesk::export::{write_jsonl, write_text};
use reviewdesk::reviews::{Review, ReviewError};

/// Writes a single line to stdout.
pub fn write_line(message: &str) -> Result<(), ReviewError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|error| io_error(&error))
}

/// Writes a confirmation line for text output; JSONL output stays
/// machine-readable and skips it.
pub fn write_confirmation(format: OutputFormat, message: &str) -> Result<(), ReviewError> {
    match format {
        OutputFormat::Text => write_line(message),
        OutputFormat::Jsonl => Ok(()),
    }
}

/// Writes reviews to stdout in the requested format.
pub fn write_reviews(format: OutputFormat, reviews: &[Review]) -> Result<(), ReviewError> {
    let mut stdout = io::stdout().lock();
    write_reviews_to(&mut stdout, format, reviews)
}

/// Writes reviews to the given writer in the requested format.
pub fn write_reviews_to<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    reviews: &[Review],
) -> Result<(), ReviewError> {
    match format {
        OutputFormat::Text => write_text(writer, reviews),
        OutputFormat::Jsonl => write_jsonl(writer, reviews),
    }
}

/// Converts an I/O error to a [`ReviewError::Io`].
fn io_error(error: &io::Error) -> ReviewError {
    ReviewError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use reviewdesk::OutputFormat;
    use reviewdesk::export::EMPTY_LIST_MESSAGE;

    use super::write_reviews_to;

    #[test]
    fn text_format_prints_placeholder_for_empty_list() {
        let mut buffer = Vec::new();
        write_reviews_to(&mut buffer, OutputFormat::Text, &[]).expect("should write");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(output.contains(EMPTY_LIST_MESSAGE), "got {output}");
    }

    #[test]
    fn jsonl_format_prints_nothing_for_empty_list() {
        let mut buffer = Vec::new();
        write_reviews_to(&mut buffer, OutputFormat::Jsonl, &[]).expect("should write");

        assert!(buffer.is_empty());
    }
}
