//! Configuration loading and validation for sunriset.
//!
//! Settings live in `sunriset.toml` under the user's config directory
//! (`$XDG_CONFIG_HOME/sunriset/sunriset.toml` on Linux). Every key is optional
//! and command-line flags take precedence over the file:
//!
//! ```toml
//! # Observer location: either coordinates...
//! latitude = 37.773972              # degrees, north positive
//! longitude = -122.431297           # degrees, east positive
//! # ...or a city from the built-in database
//! # city = "San Francisco"
//!
//! timezone = "America/Los_Angeles"  # IANA name; detected from coordinates if omitted
//! twilight = "rise-set"             # "rise-set", "civil", "nautical" or "astronomical"
//! time_format = "%H:%M:%S"          # strftime pattern for printed times
//! ```
//!
//! A missing file is not an error; all settings then fall back to defaults.

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::{self, GeoCoordinate};
use crate::logger::Log;
use crate::solar::Twilight;

/// Configuration structure for sunriset settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// City name resolved through the city database, instead of coordinates
    pub city: Option<String>,
    /// IANA timezone for printed times and for deciding what "today" is
    pub timezone: Option<String>,
    pub twilight: Option<Twilight>,
    pub time_format: Option<String>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from the default location.
    ///
    /// Returns the default (empty) configuration when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            Log::log_debug(&format!(
                "No configuration file at {}, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        validate_config(&config)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Observer location from coordinates or city, if either is configured.
    pub fn coordinate(&self) -> Result<Option<GeoCoordinate>> {
        match (self.latitude, self.longitude, self.city.as_deref()) {
            (Some(lat), Some(lon), _) => GeoCoordinate::new(lat, lon).map(Some),
            (None, None, Some(city)) => Ok(Some(geo::find_city(city)?.coordinate())),
            (None, None, None) => Ok(None),
            _ => anyhow::bail!("Both latitude and longitude must be set, or neither"),
        }
    }

    pub fn timezone(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(geo::timezone::parse_timezone)
            .transpose()
    }

    pub fn twilight(&self) -> Twilight {
        self.twilight.unwrap_or(DEFAULT_TWILIGHT)
    }

    pub fn time_format(&self) -> &str {
        self.time_format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }

    /// Print the effective settings (debug mode only).
    pub fn log_config(&self, path: &Path) {
        if !Log::is_debug() {
            return;
        }

        Log::log_block_start(&format!("Configuration from {}", path.display()));
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Log::log_indented(&format!(
                "Location: {}",
                GeoCoordinate::unchecked(lat, lon).display()
            )),
            _ => Log::log_indented(&format!(
                "City: {}",
                self.city.as_deref().unwrap_or("(not set)")
            )),
        }
        Log::log_indented(&format!(
            "Timezone: {}",
            self.timezone.as_deref().unwrap_or("(detect from location)")
        ));
        Log::log_indented(&format!("Twilight: {}", self.twilight().as_str()));
        Log::log_indented(&format!("Time format: {}", self.time_format()));
    }
}

/// Check every configured value without resolving anything over the network
/// or the city database.
pub fn validate_config(config: &Config) -> Result<()> {
    match (config.latitude, config.longitude) {
        (Some(lat), Some(lon)) => {
            GeoCoordinate::new(lat, lon)?;
        }
        (None, None) => {}
        _ => anyhow::bail!("Both latitude and longitude must be set, or neither"),
    }

    if config.latitude.is_some() && config.city.is_some() {
        anyhow::bail!(
            "Configure either latitude/longitude or city, not both (city = \"{}\")",
            config.city.as_deref().unwrap_or_default()
        );
    }

    if let Some(city) = &config.city {
        if city.trim().is_empty() {
            anyhow::bail!("City name must not be empty");
        }
    }

    if let Some(tz) = &config.timezone {
        geo::timezone::parse_timezone(tz)?;
    }

    if let Some(format) = &config.time_format {
        validate_time_format(format)?;
    }

    Ok(())
}

/// Reject strftime patterns chrono cannot render.
pub fn validate_time_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        anyhow::bail!("Time format must not be empty");
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("Invalid time format: \"{}\"", format);
    }
    Ok(())
}
