//! # Ingestion Detector
//!
//! Turns the raw bytes of an uploaded EddyHL CSV export into a two-column
//! numeric table. The export format declares neither its text encoding nor
//! the size of its descriptive header region, and both vary across producer
//! versions, so the ingestion pass detects both:
//!
//! 1. Decode the bytes by trying a fixed priority list of encodings.
//! 2. Scan a bounded prefix of the lines for the first row whose fields are
//!    all bare real numbers; that row starts the data region.
//! 3. Parse every remaining line strictly. Any bad cell or empty line fails
//!    the whole pass; nothing is skipped or coerced.

mod detect;
mod encoding;
mod table;

pub use detect::HEAD_SCAN_LINES;
pub use table::{SampleTable, VALUE_X, VALUE_Y};

use thiserror::Error;

/// Errors raised by one ingestion pass.
///
/// `Encoding` means no attempted text encoding produced a strict decode;
/// every other variant is a format problem in the decoded text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("no supported text encoding could decode the file")]
    Encoding,

    #[error("no all-numeric data row in the first {0} lines")]
    DataStartNotFound(usize),

    #[error("malformed cell '{value}' at line {line}")]
    MalformedCell { line: usize, value: String },

    #[error("empty line {0} inside the data region")]
    EmptyLine(usize),

    #[error("line {line} has {found} column(s), need at least 2")]
    InsufficientColumns { line: usize, found: usize },
}

/// Decodes, locates and parses the data region of an uploaded file.
///
/// # Arguments
///
/// * `raw_bytes` - The uploaded file's bytes, exactly as read
///
/// # Returns
///
/// * `Result<SampleTable, IngestError>` - The ingested table, holding at
///   least one row, or the error that failed the pass
pub fn detect_and_parse(raw_bytes: &[u8]) -> Result<SampleTable, IngestError> {
    let text = encoding::decode(raw_bytes)?;
    let lines: Vec<&str> = text.lines().collect();
    let start = detect::find_data_start(&lines)?;
    tracing::debug!(start_row = start, "located data region");
    table::parse_rows(&lines[start..], start)
}
