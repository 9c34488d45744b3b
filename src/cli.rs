//! Command-line interface components.

use crate::config::ConverterConfig;
use crate::constants::{DEFAULT_LENGTH_SECONDS, DEFAULT_TIME_ZONE, DEFAULT_TRACK_NUMBER};
use crate::models::{ConversionSummary, Rating};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "scrobblelog")]
#[command(about = "Convert CSV (artist,album,title,DD Mon YYYY HH:MM) to Rockbox .scrobbler.log")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Input CSV file
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output .scrobbler.log file (overwritten if it exists)
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Timezone for parsing dates
    #[arg(long, value_name = "ZONE", default_value = DEFAULT_TIME_ZONE)]
    pub tz: String,

    /// Rating to write
    #[arg(long, value_enum, default_value_t = Rating::Love)]
    pub rating: Rating,

    /// Default track number
    #[arg(long, default_value = DEFAULT_TRACK_NUMBER)]
    pub tracknum: String,

    /// Default track length in seconds
    #[arg(long, default_value = DEFAULT_LENGTH_SECONDS)]
    pub length: String,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Build the converter configuration from the parsed flags
    pub fn to_config(&self) -> ConverterConfig {
        ConverterConfig::default()
            .with_time_zone(self.tz.clone())
            .with_rating(self.rating)
            .with_track_number(self.tracknum.clone())
            .with_length_seconds(self.length.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Set up structured logging on stderr based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scrobblelog={}", log_level)));

    // A subscriber may already be installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run a conversion for the parsed arguments and print the confirmation
pub fn run(args: &Args) -> Result<ConversionSummary> {
    let config = args.to_config();

    let summary = crate::convert(&args.input, &args.output, &config).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    println!(
        "{} wrote {}",
        "OK:".bright_green().bold(),
        summary.output_path.display()
    );

    Ok(summary)
}
