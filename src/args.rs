//! Command-line argument parsing.
//!
//! Location, date and display options are global so they can be given before
//! or after the subcommand. Running without a subcommand prints today's times.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_CITY_RESULTS;
use crate::solar::Twilight;

#[derive(Debug, Parser)]
#[command(name = "sunriset", version, about)]
pub struct Cli {
    /// Enable detailed debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Read settings from this file instead of the default location
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where, when and how to compute.
#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    /// Latitude in degrees, north positive
    #[arg(long, global = true, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long, global = true, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Look up the location by city name ("Paris" or "Paris, France")
    #[arg(long, global = true, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Calendar date (YYYY-MM-DD); defaults to today in the chosen time zone
    #[arg(long, global = true, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// IANA time zone for the date and printed times
    #[arg(long, global = true, value_name = "ZONE")]
    pub tz: Option<String>,

    /// Horizon to report events for
    #[arg(long, global = true, value_enum)]
    pub twilight: Option<Twilight>,

    /// strftime pattern for printed times
    #[arg(long, global = true, value_name = "FORMAT")]
    pub time_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Sunrise, sunset, solar noon and twilight times (default)
    Times,
    /// Time the Sun spends above each horizon
    DayLength,
    /// Search the city database
    Cities {
        /// Part of a city or country name
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_CITY_RESULTS)]
        limit: usize,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}

impl Cli {
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Times)
    }
}
