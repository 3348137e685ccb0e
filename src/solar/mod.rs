//! Closed-form sunrise, sunset and twilight computation.
//!
//! This module implements Paul Schlyter's low-precision solar model, valid for
//! calendar years 1801-2099:
//! - Calendar date to days since 2000 Jan 0.0
//! - Ecliptic position and distance of the Sun
//! - Equatorial coordinates and Greenwich sidereal time
//! - Altitude crossing times in UT hours, and day length
//!
//! Everything here is a pure function of its arguments and never touches a
//! calendar or time-zone library; see [`crate::calendar`] for that boundary.

pub mod angles;
pub mod epoch;
pub mod position;
pub mod riseset;

pub use angles::{rev180, revolution};
pub use epoch::{CivilDate, days_since_2000_jan_0};
pub use position::{
    EclipticPosition, EquatorialPosition, SolarEphemeris, gmst0, sun_position, sun_ra_dec,
};
pub use riseset::{
    CrossingResult, CrossingStatus, Horizon, Twilight, astronomical_twilight,
    astronomical_twilight_length, civil_twilight, civil_twilight_length, day_length,
    nautical_twilight, nautical_twilight_length, solve_crossing, solve_day_length, sun_rise_set,
};
