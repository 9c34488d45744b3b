//! Scrobble Log Converter Library
//!
//! Converts a CSV listening history (artist, album, title, play date) into
//! a Rockbox-style `.scrobbler.log` in the AUDIOSCROBBLER/1.1 format, ready
//! to be submitted by a scrobbling client.
//!
//! The conversion is a single pass over an in-memory copy of the input:
//! - Reading the CSV with standard quoting, keeping blank rows for numbering
//! - Validating each row and parsing `DD Mon YYYY HH:MM` in an IANA time zone
//! - Rendering the fixed header plus one tab-separated line per play
//! - Replacing the output file atomically, only after every row validated

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod reader;
pub mod transform;
pub mod writer;

// Re-export commonly used types
pub use config::ConverterConfig;
pub use error::{Result, ScrobbleError};
pub use models::{ConversionSummary, InputRow, Rating, Record};
pub use transform::RecordTransformer;
pub use writer::{ScrobbleLogWriter, render_log};

use std::path::Path;
use tracing::info;

/// Convert the CSV at `input` into a scrobble log at `output`.
///
/// The configuration (including the time zone) is checked before the input
/// is opened, and the output file is only touched once every row has been
/// transformed successfully.
pub fn convert(input: &Path, output: &Path, config: &ConverterConfig) -> Result<ConversionSummary> {
    config.validate()?;
    let transformer = RecordTransformer::new(config)?;

    let rows = reader::read_rows(input)?;
    let transformed = transformer.transform_all(&rows)?;

    let writer = ScrobbleLogWriter::new(output);
    let records_written = writer.write(&transformed.records)?;

    let summary = ConversionSummary {
        rows_read: rows.len(),
        blank_rows: transformed.blank_rows,
        records_written,
        output_path: output.to_path_buf(),
    };

    info!(
        "Converted {} rows from {} into {} scrobbles ({} blank rows skipped)",
        summary.rows_read,
        input.display(),
        summary.records_written,
        summary.blank_rows
    );

    Ok(summary)
}
