//! # Sunriset
//!
//! Sunrise, sunset and twilight times for any place on Earth, computed with
//! Paul Schlyter's closed-form solar model (valid for years 1801-2099).
//!
//! The crate is split into a pure numeric core and a thin calendar layer, so
//! the solver can be used without pulling time zones into the picture.
//!
//! ## Architecture
//!
//! - **solar**: Angle helpers, epoch arithmetic, solar ephemeris and the crossing solver
//! - **provider**: Pluggable algorithm interface with the built-in Schlyter model
//! - **calendar**: chrono adapter returning absolute instants and durations
//! - **sun_times**: Complete daily summary of every event and day length
//! - **geo**: Coordinates, city database and time zone detection
//! - **config**: Configuration loading and validation
//! - **args** / **commands**: Command-line interface
//! - **constants**: Model constants and application defaults
//! - **logger**: Structured logging with visual formatting
//!
//! ```
//! use chrono::TimeZone;
//! use chrono_tz::Europe::London;
//! use sunriset::{GeoCoordinate, SunTimes};
//!
//! let noon = London.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
//! let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
//! let times = SunTimes::compute(&noon, london, None);
//! assert!(times.sunrise.unwrap() < times.sunset.unwrap());
//! ```

pub mod args;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod constants;
pub mod geo;
pub mod logger;
pub mod provider;
pub mod solar;
pub mod sun_times;

// Re-export important types for easier access
pub use config::Config;
pub use geo::GeoCoordinate;
pub use logger::{Log, LogLevel};
pub use provider::{Schlyter, SunTimesProvider};
pub use solar::{CivilDate, CrossingResult, CrossingStatus, Horizon, Twilight};
pub use sun_times::SunTimes;
