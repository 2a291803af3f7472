//! Command-line argument definitions for the typhoon pipeline
//!
//! Defines the CLI using the clap derive API. Each subcommand drives one
//! view: the observation map, the track map, or the city drill-down.

use crate::app::models::BrushRange;
use crate::app::services::field_parsers::parse_observation_time;
use crate::constants::DEFAULT_LOG_LEVEL;
use chrono::NaiveDateTime;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the typhoon pipeline
///
/// Loads the typhoon datasets, joins them in memory and prints what the
/// maps and charts would show for a given selection.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "typhoon-tracks",
    version,
    about = "Explore typhoon tracks and weather-station observations over Taiwan",
    long_about = "Loads station metadata, rainfall, wind, best-track, city and combined hourly \
                  observation datasets, joins them in memory and reports the data behind the \
                  observation map, the track map and the per-city charts."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Joined rainfall and wind observations for one typhoon at one instant
    Observations(ObservationsArgs),
    /// Typhoon trajectories for the active set and brushed range
    Tracks(TracksArgs),
    /// Hourly weather at one city during the active typhoons
    City(CityArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Directory holding the dataset files
    ///
    /// Overrides the configuration file and the TYPHOON_DATA_DIR variable.
    #[arg(short = 'd', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Path to a JSON configuration file
    ///
    /// Defaults to <config dir>/typhoon-tracks/config.json when that file exists.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

impl CommonArgs {
    /// Log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Spinners are hidden in quiet mode and for machine-readable output
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Arguments for the observations command
#[derive(Debug, Clone, Parser)]
pub struct ObservationsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Typhoon name as listed in the rainfall file, e.g. "紅霞(NOUL)"
    #[arg(short = 't', long = "typhoon", value_name = "NAME")]
    pub typhoon: Option<String>,

    /// Instant to show ("YYYY-MM-DD HH:MM"); snapped to the nearest observation
    #[arg(long = "at", value_name = "TIME", value_parser = parse_instant)]
    pub at: Option<NaiveDateTime>,

    /// Only list the typhoon menu and exit
    #[arg(long = "list")]
    pub list: bool,
}

/// Selection options of the track map
#[derive(Debug, Clone, ClapArgs)]
pub struct TrackSelectionArgs {
    /// Typhoon identifiers to activate (comma-separated)
    #[arg(short = 'a', long = "active", value_name = "IDS", value_delimiter = ',')]
    pub active: Vec<String>,

    /// Activate every typhoon
    #[arg(long = "all", conflicts_with = "active")]
    pub all: bool,

    /// Brushed range in days since each typhoon's first fix ("START:END")
    #[arg(short = 'b', long = "brush-days", value_name = "START:END", value_parser = parse_brush)]
    pub brush: Option<BrushRange>,
}

/// Arguments for the tracks command
#[derive(Debug, Clone, Parser)]
pub struct TracksArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub selection: TrackSelectionArgs,

    /// Include every track point in the output
    #[arg(long = "points")]
    pub points: bool,
}

/// Arguments for the city command
#[derive(Debug, Clone, Parser)]
pub struct CityArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub selection: TrackSelectionArgs,

    /// City name as listed in the city file
    #[arg(value_name = "CITY")]
    pub city: String,
}

/// Parse an instant given on the command line
pub fn parse_instant(value: &str) -> std::result::Result<NaiveDateTime, String> {
    parse_observation_time(value)
        .ok_or_else(|| format!("invalid time '{}', expected YYYY-MM-DD HH:MM", value))
}

/// Parse a "START:END" range of fractional days
pub fn parse_brush(value: &str) -> std::result::Result<BrushRange, String> {
    let (start, end) = value
        .split_once(':')
        .ok_or_else(|| format!("invalid brush '{}', expected START:END", value))?;
    let parse_days = |text: &str| {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|days| days.is_finite() && *days >= 0.0)
            .ok_or_else(|| format!("invalid day offset '{}'", text))
    };
    Ok(BrushRange::from_days(parse_days(start)?, parse_days(end)?))
}
