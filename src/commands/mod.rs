//! Command-line command handlers for sunriset.
//!
//! Each subcommand lives in its own submodule. This module resolves the shared
//! query (location, zone, date, horizon) from flags and config, and holds the
//! formatting helpers the handlers share.

pub mod cities;
pub mod day_length;
pub mod times;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::args::QueryArgs;
use crate::config::{Config, validate_time_format};
use crate::constants::{MAXIMUM_SUPPORTED_YEAR, MINIMUM_SUPPORTED_YEAR};
use crate::geo::{self, GeoCoordinate};
use crate::logger::Log;
use crate::solar::Twilight;

/// Fully resolved inputs for a computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub coordinate: GeoCoordinate,
    /// City label or formatted coordinates, for headings
    pub location: String,
    pub timezone: Tz,
    pub date: NaiveDate,
    pub twilight: Twilight,
    pub time_format: String,
}

impl Query {
    /// Local noon of the query date, the instant handed to the calendar adapter.
    pub fn instant(&self) -> Result<DateTime<Tz>> {
        let noon = self
            .date
            .and_hms_opt(12, 0, 0)
            .context("Could not build local noon")?;
        self.timezone
            .from_local_datetime(&noon)
            .earliest()
            .with_context(|| format!("{} has no local noon in {}", self.date, self.timezone))
    }
}

/// Combine command-line flags and configuration, flags taking precedence.
pub fn resolve_query(args: &QueryArgs, config: &Config) -> Result<Query> {
    let (coordinate, location) = match (args.lat, args.lon, args.city.as_deref()) {
        (Some(lat), Some(lon), _) => {
            let coord = GeoCoordinate::new(lat, lon)?;
            (coord, coord.display())
        }
        (_, _, Some(city)) => {
            let city = geo::find_city(city)?;
            (city.coordinate(), city.label())
        }
        _ => match (config.coordinate()?, config.city.as_deref()) {
            (Some(coord), Some(city)) => (coord, city.to_string()),
            (Some(coord), None) => (coord, coord.display()),
            (None, _) => anyhow::bail!(
                "No location given. Use --lat/--lon or --city, or set latitude/longitude in {}",
                Config::get_config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".to_string())
            ),
        },
    };

    let timezone = match args.tz.as_deref() {
        Some(name) => geo::timezone::parse_timezone(name)?,
        None => match config.timezone()? {
            Some(tz) => tz,
            None => {
                let tz = geo::determine_timezone_from_coordinates(
                    coordinate.latitude,
                    coordinate.longitude,
                );
                Log::log_debug(&format!("Detected timezone {} from coordinates", tz));
                tz
            }
        },
    };

    let date = args
        .date
        .unwrap_or_else(|| Utc::now().with_timezone(&timezone).date_naive());
    if !(MINIMUM_SUPPORTED_YEAR..=MAXIMUM_SUPPORTED_YEAR).contains(&date.year()) {
        Log::log_warning(&format!(
            "Year {} is outside {}-{}; results will be less accurate",
            date.year(),
            MINIMUM_SUPPORTED_YEAR,
            MAXIMUM_SUPPORTED_YEAR
        ));
    }

    let time_format = match args.time_format.as_deref() {
        Some(format) => {
            validate_time_format(format)?;
            format.to_string()
        }
        None => config.time_format().to_string(),
    };

    Ok(Query {
        coordinate,
        location,
        timezone,
        date,
        twilight: args.twilight.unwrap_or_else(|| config.twilight()),
        time_format,
    })
}

/// Render an event in the query's zone, marking events on a neighbouring day.
pub fn format_event(event: Option<DateTime<Utc>>, query: &Query) -> String {
    let Some(event) = event else {
        return "--".to_string();
    };
    let local = event.with_timezone(&query.timezone);
    let formatted = local.format(&query.time_format).to_string();

    match (local.date_naive() - query.date).num_days() {
        0 => formatted,
        days if days > 0 => format!("{} (+{}d)", formatted, days),
        days => format!("{} ({}d)", formatted, days),
    }
}

/// Render a duration as `14h 46m 59s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!("{}h {:02}m {:02}s", total / 3600, (total % 3600) / 60, total % 60)
}
