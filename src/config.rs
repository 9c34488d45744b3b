//! Configuration management and validation.
//!
//! Holds the per-run values applied to every record (rating, track
//! number, length) and the civil time zone the input dates are in.

use crate::constants::{DEFAULT_LENGTH_SECONDS, DEFAULT_TIME_ZONE, DEFAULT_TRACK_NUMBER};
use crate::error::{Result, ScrobbleError};
use crate::models::Rating;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// IANA zone identifier used to interpret input dates
    pub time_zone: String,

    /// Rating written on every line
    pub rating: Rating,

    /// Track number written on every line
    pub track_number: String,

    /// Track length in seconds written on every line
    pub length_seconds: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            rating: Rating::default(),
            track_number: DEFAULT_TRACK_NUMBER.to_string(),
            length_seconds: DEFAULT_LENGTH_SECONDS.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Set the time zone identifier
    pub fn with_time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = zone.into();
        self
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// Set the track number
    pub fn with_track_number(mut self, track_number: impl Into<String>) -> Self {
        self.track_number = track_number.into();
        self
    }

    /// Set the track length
    pub fn with_length_seconds(mut self, length_seconds: impl Into<String>) -> Self {
        self.length_seconds = length_seconds.into();
        self
    }

    /// Look up the configured zone in the tz database
    pub fn resolve_time_zone(&self) -> Result<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| ScrobbleError::InvalidTimeZone {
                zone: self.time_zone.clone(),
            })
    }

    /// Check the configuration before any input is read
    pub fn validate(&self) -> Result<()> {
        check_column_value("track number", &self.track_number)?;
        check_column_value("length", &self.length_seconds)?;
        let tz = self.resolve_time_zone()?;

        debug!(
            "Configuration: tz={}, rating={}, tracknum={:?}, length={:?}",
            tz.name(),
            self.rating,
            self.track_number,
            self.length_seconds
        );
        Ok(())
    }
}

/// Values copied verbatim into a column must not break the line layout
fn check_column_value(name: &str, value: &str) -> Result<()> {
    if value.contains(['\t', '\n', '\r']) {
        return Err(ScrobbleError::configuration(format!(
            "Default {} must not contain tabs or line breaks: {:?}",
            name, value
        )));
    }
    Ok(())
}
