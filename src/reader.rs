//! CSV input loading.
//!
//! Reads the whole listening history into memory as [`InputRow`]s. Blank
//! lines are kept as empty rows and still consume a row number. The `csv`
//! reader discards empty lines while looking for the next record, so they
//! are recovered from the bytes consumed between consecutive records.

use crate::error::{Result, ScrobbleError};
use crate::models::InputRow;
use csv::StringRecord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load every row of the CSV file at `path`, in source order
pub fn read_rows(path: &Path) -> Result<Vec<InputRow>> {
    let text = fs::read_to_string(path)
        .map_err(|e| ScrobbleError::io(path, "Failed to read input file", e))?;

    let rows = parse_rows(&text)
        .map_err(|e| ScrobbleError::io(path, "Failed to parse input file", e))?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Tokenize CSV text into rows numbered from 1
pub fn parse_rows(text: &str) -> io::Result<Vec<InputRow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    let mut consumed = 0;

    loop {
        let found = reader.read_record(&mut record)?;
        let end = reader.position().byte() as usize;

        // Everything read since the previous record: skipped blank lines,
        // then the record itself and its terminator.
        let mut span = &text[consumed..end];
        if span.starts_with('\n') && text[..consumed].ends_with('\r') {
            // Second half of the previous record's CRLF
            span = &span[1..];
        }
        let body = span.trim_start_matches(['\r', '\n']);

        for _ in 0..count_line_breaks(&span[..span.len() - body.len()]) {
            rows.push(InputRow::new(rows.len() + 1, "", Vec::new()));
        }

        if !found {
            break;
        }

        let raw = body
            .strip_suffix('\n')
            .or_else(|| body.strip_suffix('\r'))
            .unwrap_or(body);
        let fields = record.iter().map(str::to_string).collect();
        rows.push(InputRow::new(rows.len() + 1, raw, fields));
        consumed = end;
    }

    Ok(rows)
}

/// Number of line terminators in a run of `\r` and `\n` bytes, where
/// `\r\n` counts once
fn count_line_breaks(run: &str) -> usize {
    let mut bytes = run.bytes().peekable();
    let mut count = 0;

    while let Some(byte) = bytes.next() {
        if byte == b'\r' && bytes.peek() == Some(&b'\n') {
            bytes.next();
        }
        count += 1;
    }

    count
}
