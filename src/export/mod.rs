//! Review list output.
//!
//! - **Text**: human-readable blocks separated by `---`
//! - **JSONL**: machine-readable JSON Lines (one review per line)
//!
//! Both writers emit reviews in the order given, which is newest first when
//! the list comes straight from the desk.

mod jsonl;
mod text;

pub use jsonl::write_jsonl;
pub use text::{EMPTY_LIST_MESSAGE, write_text};

use crate::reviews::ReviewError;

/// Converts an I/O error to a [`ReviewError::Io`].
fn io_error(error: &std::io::Error) -> ReviewError {
    ReviewError::Io {
        message: error.to_string(),
    }
}
