//! Low-precision solar ephemeris.
//!
//! Computes the Sun's ecliptic longitude and distance from a single
//! first-order correction of Kepler's equation, then rotates into equatorial
//! coordinates. Accuracy is about one arcminute, which is plenty for rise/set
//! work but not for orbital mechanics.

use super::angles::{atan2d, cosd, revolution, sind};
use crate::constants::{
    ECCENTRICITY_BASE, ECCENTRICITY_RATE, MEAN_ANOMALY_BASE, MEAN_ANOMALY_RATE, OBLIQUITY_BASE,
    OBLIQUITY_RATE, PERIHELION_BASE, PERIHELION_RATE, SUN_APPARENT_RADIUS_AU_DEG,
};

/// Ecliptic position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// True ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Sun-Earth distance in astronomical units.
    pub distance: f64,
}

/// Equatorial position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, (-180, 180].
    pub right_ascension: f64,
    /// Declination in degrees.
    pub declination: f64,
    /// Sun-Earth distance in astronomical units.
    pub distance: f64,
}

/// Every intermediate solar quantity for one instant.
///
/// Rebuilt on each call; the values drift continuously so nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    pub days_since_epoch: f64,
    pub ecliptic_longitude: f64,
    pub distance: f64,
    pub right_ascension: f64,
    pub declination: f64,
    /// Apparent angular radius of the solar disc in degrees.
    pub apparent_radius: f64,
}

impl SolarEphemeris {
    pub fn at(d: f64) -> Self {
        let ecliptic = sun_position(d);
        let equatorial = ecliptic_to_equatorial(d, ecliptic);
        Self {
            days_since_epoch: d,
            ecliptic_longitude: ecliptic.longitude,
            distance: ecliptic.distance,
            right_ascension: equatorial.right_ascension,
            declination: equatorial.declination,
            apparent_radius: apparent_radius(ecliptic.distance),
        }
    }
}

/// Ecliptic longitude and distance of the Sun at day `d` since 2000 Jan 0.0.
pub fn sun_position(d: f64) -> EclipticPosition {
    let mean_anomaly = revolution(MEAN_ANOMALY_BASE + MEAN_ANOMALY_RATE * d);
    let perihelion = PERIHELION_BASE + PERIHELION_RATE * d;
    let e = ECCENTRICITY_BASE - ECCENTRICITY_RATE * d;

    // One-step eccentric anomaly; good enough for e ~ 0.0167.
    let eccentric_anomaly = mean_anomaly
        + e.to_degrees() * sind(mean_anomaly) * (1.0 + e * cosd(mean_anomaly));

    let x = cosd(eccentric_anomaly) - e;
    let y = (1.0 - e * e).sqrt() * sind(eccentric_anomaly);
    let distance = x.hypot(y);
    let true_anomaly = atan2d(y, x);

    let mut longitude = true_anomaly + perihelion;
    if longitude >= 360.0 {
        longitude -= 360.0;
    }

    EclipticPosition {
        longitude,
        distance,
    }
}

/// Obliquity of the ecliptic in degrees at day `d`.
pub fn obliquity_of_ecliptic(d: f64) -> f64 {
    OBLIQUITY_BASE - OBLIQUITY_RATE * d
}

/// Rotate an ecliptic position into equatorial coordinates.
pub fn ecliptic_to_equatorial(d: f64, ecliptic: EclipticPosition) -> EquatorialPosition {
    let x = ecliptic.distance * cosd(ecliptic.longitude);
    let y = ecliptic.distance * sind(ecliptic.longitude);

    let obliquity = obliquity_of_ecliptic(d);
    let z = y * sind(obliquity);
    let y = y * cosd(obliquity);

    EquatorialPosition {
        right_ascension: atan2d(y, x),
        declination: atan2d(z, x.hypot(y)),
        distance: ecliptic.distance,
    }
}

/// Right ascension, declination and distance of the Sun at day `d`.
pub fn sun_ra_dec(d: f64) -> EquatorialPosition {
    ecliptic_to_equatorial(d, sun_position(d))
}

/// Apparent angular radius of the Sun, in degrees, at `distance` AU.
pub fn apparent_radius(distance: f64) -> f64 {
    SUN_APPARENT_RADIUS_AU_DEG / distance
}

/// Greenwich mean sidereal time at 0h UT, in degrees, for day `d`.
///
/// Written as the Sun's mean longitude plus 180 degrees so that adding the
/// UT hour (times 15) yields the sidereal time at any hour of that day.
pub fn gmst0(d: f64) -> f64 {
    revolution(
        180.0 + MEAN_ANOMALY_BASE + PERIHELION_BASE + (MEAN_ANOMALY_RATE + PERIHELION_RATE) * d,
    )
}
