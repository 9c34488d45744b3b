//! Core data structures for scrobble log conversion.
//!
//! Defines the raw input row, the validated record that becomes one log
//! line, the rating codes, and the summary returned after a run.

use crate::constants::FIELD_SEPARATOR;
use crate::error::{Result, ScrobbleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One record of the input CSV as it appeared in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based position in the file, blank rows included
    pub number: usize,
    /// Source text of the row, without its line terminator
    pub raw: String,
    pub fields: Vec<String>,
}

impl InputRow {
    pub fn new(number: usize, raw: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            number,
            raw: raw.into(),
            fields,
        }
    }

    /// True for an empty row or one whose fields are all whitespace
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|field| field.trim().is_empty())
    }
}

/// Rating column values understood by the scrobbler client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Rating {
    #[default]
    #[serde(rename = "L")]
    #[value(name = "L")]
    Love,
    #[serde(rename = "S")]
    #[value(name = "S")]
    Skip,
    #[serde(rename = "B")]
    #[value(name = "B")]
    Ban,
}

impl Rating {
    /// Single-letter code written to the log
    pub fn code(&self) -> &'static str {
        match self {
            Rating::Love => "L",
            Rating::Skip => "S",
            Rating::Ban => "B",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rating {
    type Err = ScrobbleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(Rating::Love),
            "S" => Ok(Rating::Skip),
            "B" => Ok(Rating::Ban),
            other => Err(ScrobbleError::configuration(format!(
                "Invalid rating '{}' (expected L, S or B)",
                other
            ))),
        }
    }
}

/// A validated play event, ready to be written as one log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub artist: String,
    pub album: String,
    pub title: String,
    pub track_number: String,
    pub length_seconds: String,
    pub rating: Rating,
    /// Seconds since the Unix epoch
    pub played_at: i64,
    /// Always empty; the column is kept for format compatibility
    pub musicbrainz_track_id: String,
}

impl Record {
    /// Render the record in log column order, without a line terminator
    pub fn to_log_line(&self) -> String {
        let played_at = self.played_at.to_string();
        let columns = [
            self.artist.as_str(),
            self.album.as_str(),
            self.title.as_str(),
            self.track_number.as_str(),
            self.length_seconds.as_str(),
            self.rating.code(),
            played_at.as_str(),
            self.musicbrainz_track_id.as_str(),
        ];
        columns.join(&FIELD_SEPARATOR.to_string())
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_read: usize,
    pub blank_rows: usize,
    pub records_written: usize,
    pub output_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            artist: "Radiohead".to_string(),
            album: "OK Computer".to_string(),
            title: "Paranoid Android".to_string(),
            track_number: "0".to_string(),
            length_seconds: "0".to_string(),
            rating: Rating::Love,
            played_at: 1770141720,
            musicbrainz_track_id: String::new(),
        }
    }

    #[test]
    fn test_log_line_has_trailing_separator_for_empty_mbid() {
        assert_eq!(
            record().to_log_line(),
            "Radiohead\tOK Computer\tParanoid Android\t0\t0\tL\t1770141720\t"
        );
    }

    #[test]
    fn test_rating_codes() {
        assert_eq!("L".parse::<Rating>().unwrap(), Rating::Love);
        assert_eq!("S".parse::<Rating>().unwrap(), Rating::Skip);
        assert_eq!("B".parse::<Rating>().unwrap(), Rating::Ban);
        assert!("l".parse::<Rating>().is_err());
        assert_eq!(Rating::Ban.to_string(), "B");
        assert_eq!(Rating::default(), Rating::Love);
    }

    #[test]
    fn test_blank_row_detection() {
        assert!(InputRow::new(1, "", vec![]).is_blank());
        assert!(InputRow::new(2, " , ,", vec![" ".into(), " ".into(), "".into()]).is_blank());
        assert!(!InputRow::new(3, "a", vec!["a".into()]).is_blank());
    }
}
