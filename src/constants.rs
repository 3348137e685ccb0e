//! Application constants and default values for sunriset.
//!
//! This module contains the orbital elements of the solar model, the horizon
//! presets, configuration defaults and validation limits used throughout the
//! application.

use crate::solar::Twilight;

// ═══ Epoch ═══
// Day numbers count from 2000 Jan 0.0 UT (1999-12-31 00:00 UT)

pub const DAYS_EPOCH_OFFSET: i64 = 730530; // Julian-style day count of 2000 Jan 0
pub const NOON_DAY_FRACTION: f64 = 0.5; // Solar quantities are evaluated at local noon
pub const INV_360: f64 = 1.0 / 360.0;

// ═══ Solar Orbital Elements ═══
// Linear fits valid for roughly 1801-2099, `d` in days since epoch

pub const MEAN_ANOMALY_BASE: f64 = 356.0470; // degrees
pub const MEAN_ANOMALY_RATE: f64 = 0.9856002585; // degrees per day
pub const PERIHELION_BASE: f64 = 282.9404; // longitude of perihelion, degrees
pub const PERIHELION_RATE: f64 = 4.70935e-5; // degrees per day
pub const ECCENTRICITY_BASE: f64 = 0.016709;
pub const ECCENTRICITY_RATE: f64 = 1.151e-9; // per day
pub const OBLIQUITY_BASE: f64 = 23.4393; // degrees
pub const OBLIQUITY_RATE: f64 = 3.563e-7; // degrees per day

/// Apparent solar radius in degrees at a distance of 1 AU.
pub const SUN_APPARENT_RADIUS_AU_DEG: f64 = 0.2666;

/// Sidereal degrees per hour of UT.
pub const DEGREES_PER_HOUR: f64 = 15.0;

// ═══ Horizon Altitudes ═══
// Sun-centre altitudes (degrees) defining each event

pub const RISE_SET_ALTITUDE: f64 = -35.0 / 60.0; // 35' of refraction, upper limb on top
pub const CIVIL_TWILIGHT_ALTITUDE: f64 = -6.0;
pub const NAUTICAL_TWILIGHT_ALTITUDE: f64 = -12.0;
pub const ASTRONOMICAL_TWILIGHT_ALTITUDE: f64 = -18.0;

// ═══ Validation Limits ═══

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// Calendar years covered by the orbital element fits
pub const MINIMUM_SUPPORTED_YEAR: i32 = 1801;
pub const MAXIMUM_SUPPORTED_YEAR: i32 = 2099;

// ═══ Configuration Defaults ═══
// Used when options are missing from both the config file and the command line

pub const DEFAULT_TWILIGHT: Twilight = Twilight::RiseSet;
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";
pub const CONFIG_DIR_NAME: &str = "sunriset";
pub const CONFIG_FILE_NAME: &str = "sunriset.toml";

// ═══ City Search ═══

pub const DEFAULT_CITY_RESULTS: usize = 10;

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
