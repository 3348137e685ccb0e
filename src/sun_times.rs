//! Complete sunrise, sunset and twilight summary for one day and place.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::calendar;
use crate::geo::GeoCoordinate;
use crate::provider::SunTimesProvider;
use crate::solar::{CrossingStatus, Twilight};

/// Every event of a solar day, as absolute instants.
///
/// Events that do not happen (polar day or night for that horizon) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    pub coordinate: GeoCoordinate,
    pub provider: &'static str,

    // Core times
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub solar_noon: Option<DateTime<Utc>>,
    pub status: CrossingStatus,

    // Twilight boundaries
    pub civil_dawn: Option<DateTime<Utc>>,
    pub civil_dusk: Option<DateTime<Utc>>,
    pub nautical_dawn: Option<DateTime<Utc>>,
    pub nautical_dusk: Option<DateTime<Utc>>,
    pub astronomical_dawn: Option<DateTime<Utc>>,
    pub astronomical_dusk: Option<DateTime<Utc>>,

    // Durations above each horizon
    pub day_length: Duration,
    pub civil_day_length: Duration,
    pub nautical_day_length: Duration,
    pub astronomical_day_length: Duration,
}

impl SunTimes {
    /// Compute the full summary for the civil date of `when`.
    pub fn compute<Z: TimeZone>(
        when: &DateTime<Z>,
        coord: GeoCoordinate,
        provider: Option<&dyn SunTimesProvider>,
    ) -> Self {
        let events = |twilight: Twilight| {
            calendar::crossing_instants(when, coord, twilight.horizon(), provider)
                .map_or((None, None), |(rise, set)| (Some(rise), Some(set)))
        };
        let length = |twilight: Twilight| calendar::day_length(when, coord, twilight, provider);

        let (sunrise, sunset) = events(Twilight::RiseSet);
        let (civil_dawn, civil_dusk) = events(Twilight::Civil);
        let (nautical_dawn, nautical_dusk) = events(Twilight::Nautical);
        let (astronomical_dawn, astronomical_dusk) = events(Twilight::Astronomical);

        let rise_set = calendar::crossing(when, coord, Twilight::RiseSet.horizon(), provider);

        SunTimes {
            coordinate: coord,
            provider: crate::provider::resolve(provider).name(),
            sunrise,
            sunset,
            solar_noon: calendar::solar_noon(when, coord, provider),
            status: rise_set.status,
            civil_dawn,
            civil_dusk,
            nautical_dawn,
            nautical_dusk,
            astronomical_dawn,
            astronomical_dusk,
            day_length: length(Twilight::RiseSet),
            civil_day_length: length(Twilight::Civil),
            nautical_day_length: length(Twilight::Nautical),
            astronomical_day_length: length(Twilight::Astronomical),
        }
    }

    /// Morning and evening instants for one horizon.
    pub fn events(&self, twilight: Twilight) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        match twilight {
            Twilight::RiseSet => (self.sunrise, self.sunset),
            Twilight::Civil => (self.civil_dawn, self.civil_dusk),
            Twilight::Nautical => (self.nautical_dawn, self.nautical_dusk),
            Twilight::Astronomical => (self.astronomical_dawn, self.astronomical_dusk),
        }
    }

    /// Time spent above one horizon.
    pub fn length(&self, twilight: Twilight) -> Duration {
        match twilight {
            Twilight::RiseSet => self.day_length,
            Twilight::Civil => self.civil_day_length,
            Twilight::Nautical => self.nautical_day_length,
            Twilight::Astronomical => self.astronomical_day_length,
        }
    }
}
