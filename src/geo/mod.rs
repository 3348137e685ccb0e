//! Geographic locations for sunrise/sunset calculations.
//!
//! This module provides functionality for:
//! - Observer coordinates with optional range validation
//! - Timezone detection from coordinates
//! - City lookup by name or proximity

pub mod cities;
pub mod timezone;

use anyhow::Result;

use crate::constants::{MAXIMUM_LATITUDE, MAXIMUM_LONGITUDE, MINIMUM_LATITUDE, MINIMUM_LONGITUDE};

pub use cities::{CityInfo, find_cities_near_coordinate, find_city, search_cities};
pub use timezone::determine_timezone_from_coordinates;

/// Observer position in degrees, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Build a coordinate from user input, rejecting out-of-range values.
    ///
    /// # Arguments
    /// * `latitude` - Geographic latitude in degrees (-90 to +90)
    /// * `longitude` - Geographic longitude in degrees (-180 to +180)
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
            anyhow::bail!(
                "Invalid latitude: {}. Must be between {} and {} degrees",
                latitude,
                MINIMUM_LATITUDE,
                MAXIMUM_LATITUDE
            );
        }
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude) {
            anyhow::bail!(
                "Invalid longitude: {}. Must be between {} and {} degrees",
                longitude,
                MINIMUM_LONGITUDE,
                MAXIMUM_LONGITUDE
            );
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a coordinate without any range check.
    ///
    /// Out-of-range values give meaningless trigonometric results but never panic.
    pub const fn unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Human-readable form such as `37.7740°N, 122.4313°W`.
    pub fn display(&self) -> String {
        format!(
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            if self.latitude >= 0.0 { "N" } else { "S" },
            self.longitude.abs(),
            if self.longitude >= 0.0 { "E" } else { "W" }
        )
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &GeoCoordinate) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let dphi = phi2 - phi1;
        let dlambda = (other.longitude - self.longitude).to_radians();

        let a = (dphi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }
}
