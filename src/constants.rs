//! Application constants for the scrobble log converter
//!
//! Fixed header lines of the AUDIOSCROBBLER/1.1 format, default values
//! for the command line, and the accepted input date pattern.

// =============================================================================
// Output Format
// =============================================================================

/// Header lines written at the top of every `.scrobbler.log`
pub const LOG_HEADER: [&str; 4] = [
    "#AUDIOSCROBBLER/1.1",
    "#TZ/UNKNOWN",
    "#CLIENT/Rockbox ipod6g $Revision$",
    "#ARTIST\t#ALBUM\t#TITLE\t#TRACKNUM\t#LENGTH\t#RATING\t#TIMESTAMP\t#MUSICBRAINZ_TRACKID",
];

/// Column separator within a log line
pub const FIELD_SEPARATOR: char = '\t';

/// Line terminator, independent of the host platform
pub const LINE_TERMINATOR: char = '\n';

// =============================================================================
// Input Format
// =============================================================================

/// Minimum number of columns in a non-blank input row
pub const EXPECTED_COLUMNS: usize = 4;

/// Human-readable form of the accepted date pattern
pub const DATE_PATTERN_DESCRIPTION: &str = "DD Mon YYYY HH:MM";

/// chrono format string equivalent to [`DATE_PATTERN_DESCRIPTION`]
pub const DATE_FORMAT: &str = "%d %b %Y %H:%M";

/// Anchored shape check applied before chrono sees the value
pub const DATE_SHAPE_REGEX: &str =
    r"^[0-9]{2} (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) [0-9]{4} [0-9]{2}:[0-9]{2}$";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_TIME_ZONE: &str = "America/Fortaleza";
pub const DEFAULT_TRACK_NUMBER: &str = "0";
pub const DEFAULT_LENGTH_SECONDS: &str = "0";
