//! Error handling for scrobble log conversion.
//!
//! Every variant is fatal: the first failure aborts the run before the
//! output file is put in place.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrobbleError {
    /// Reading the input or writing the output failed
    #[error("I/O error on {}: {message}", .path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {row}: expected {expected} columns (artist, album, title, date), got {found}: {raw}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
        raw: String,
    },

    #[error("Line {row}: could not parse date '{value}'. Expected '{expected}'. Error: {reason}")]
    DateParse {
        row: usize,
        value: String,
        expected: &'static str,
        reason: String,
    },

    #[error("Unknown time zone '{zone}' (expected an IANA identifier such as 'America/Fortaleza')")]
    InvalidTimeZone { zone: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ScrobbleError {
    /// Create an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// 1-based input row the error refers to, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedRow { row, .. } | Self::DateParse { row, .. } => Some(*row),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrobbleError>;
