//! Row validation and record assembly.
//!
//! Turns raw [`InputRow`]s into [`Record`]s: skips blank rows, checks the
//! column count, parses the play date strictly as `DD Mon YYYY HH:MM` in
//! the configured civil time zone, and stamps the per-run defaults onto
//! each record. The first invalid row aborts the whole conversion.

use crate::config::ConverterConfig;
use crate::constants::{DATE_FORMAT, DATE_PATTERN_DESCRIPTION, DATE_SHAPE_REGEX, EXPECTED_COLUMNS};
use crate::error::{Result, ScrobbleError};
use crate::models::{InputRow, Rating, Record};
use chrono::{LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DATE_SHAPE_REGEX).unwrap_or_else(|e| panic!("invalid date shape regex: {}", e))
});

/// Records produced from an input file, plus how many rows were skipped
#[derive(Debug, Default)]
pub struct TransformOutput {
    pub records: Vec<Record>,
    pub blank_rows: usize,
}

/// Converts input rows under one fixed configuration
#[derive(Debug, Clone)]
pub struct RecordTransformer {
    tz: Tz,
    rating: Rating,
    track_number: String,
    length_seconds: String,
}

impl RecordTransformer {
    /// Build a transformer, resolving the time zone up front
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        Ok(Self {
            tz: config.resolve_time_zone()?,
            rating: config.rating,
            track_number: config.track_number.clone(),
            length_seconds: config.length_seconds.clone(),
        })
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    /// Transform every row, stopping at the first invalid one
    pub fn transform_all(&self, rows: &[InputRow]) -> Result<TransformOutput> {
        let mut output = TransformOutput::default();

        for row in rows {
            match self.transform(row)? {
                Some(record) => output.records.push(record),
                None => {
                    trace!("Skipping blank row {}", row.number);
                    output.blank_rows += 1;
                }
            }
        }

        debug!(
            "Transformed {} rows into {} records ({} blank)",
            rows.len(),
            output.records.len(),
            output.blank_rows
        );
        Ok(output)
    }

    /// Transform one row; blank rows yield `None`
    pub fn transform(&self, row: &InputRow) -> Result<Option<Record>> {
        if row.is_blank() {
            return Ok(None);
        }

        if row.fields.len() < EXPECTED_COLUMNS {
            return Err(ScrobbleError::MalformedRow {
                row: row.number,
                expected: EXPECTED_COLUMNS,
                found: row.fields.len(),
                raw: row.raw.clone(),
            });
        }

        let artist = row.fields[0].trim();
        let album = row.fields[1].trim();
        let title = row.fields[2].trim();
        let played_at = row.fields[3].trim();

        let civil = parse_civil_datetime(played_at).map_err(|reason| {
            ScrobbleError::DateParse {
                row: row.number,
                value: played_at.to_string(),
                expected: DATE_PATTERN_DESCRIPTION,
                reason,
            }
        })?;

        Ok(Some(Record {
            artist: artist.to_string(),
            album: album.to_string(),
            title: title.to_string(),
            track_number: self.track_number.clone(),
            length_seconds: self.length_seconds.clone(),
            rating: self.rating,
            played_at: local_to_epoch(&self.tz, &civil),
            musicbrainz_track_id: String::new(),
        }))
    }
}

/// Parse `DD Mon YYYY HH:MM`, rejecting any deviation from that exact shape
pub fn parse_civil_datetime(value: &str) -> std::result::Result<NaiveDateTime, String> {
    if !DATE_SHAPE.is_match(value) {
        return Err(format!(
            "'{}' does not match format '{}'",
            value, DATE_PATTERN_DESCRIPTION
        ));
    }

    NaiveDateTime::parse_from_str(value, DATE_FORMAT).map_err(|e| e.to_string())
}

/// Seconds since the Unix epoch for a civil time in `tz`.
///
/// Ambiguous times (clocks going back) resolve to the earlier instant.
/// Times skipped by a forward jump use the offset in force before the
/// jump, so `02:30` in a `02:00 -> 03:00` gap lands on `03:30`.
pub fn local_to_epoch(tz: &Tz, civil: &NaiveDateTime) -> i64 {
    match tz.from_local_datetime(civil) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp(),
        LocalResult::None => {
            let before_gap = tz
                .offset_from_utc_datetime(&(*civil - TimeDelta::days(1)))
                .fix();
            let utc = *civil - TimeDelta::seconds(i64::from(before_gap.local_minus_utc()));
            utc.and_utc().timestamp()
        }
    }
}
