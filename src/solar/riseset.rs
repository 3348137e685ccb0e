//! Sun altitude crossing solvers.
//!
//! Two parallel computations share the same ephemeris: [`solve_crossing`]
//! finds the UT hours at which the Sun passes a given altitude, and
//! [`solve_day_length`] finds only how long it stays above that altitude.
//! Both report polar day and polar night as a status rather than an error.

use serde::Deserialize;

use super::angles::{acosd, cosd, rev180, revolution, sind};
use super::epoch::CivilDate;
use super::position::{apparent_radius, gmst0, obliquity_of_ecliptic, sun_position, sun_ra_dec};
use crate::constants::{
    ASTRONOMICAL_TWILIGHT_ALTITUDE, CIVIL_TWILIGHT_ALTITUDE, DEGREES_PER_HOUR,
    NAUTICAL_TWILIGHT_ALTITUDE, RISE_SET_ALTITUDE,
};
use crate::geo::GeoCoordinate;

/// Reference altitude the Sun is tested against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    /// Altitude of the Sun's centre in degrees, negative below the horizon.
    pub altitude: f64,
    /// Depress the altitude by the Sun's apparent radius so the event is
    /// timed on the upper limb instead of the centre.
    pub upper_limb: bool,
}

impl Horizon {
    pub const RISE_SET: Horizon = Horizon::new(RISE_SET_ALTITUDE, true);
    pub const CIVIL: Horizon = Horizon::new(CIVIL_TWILIGHT_ALTITUDE, false);
    pub const NAUTICAL: Horizon = Horizon::new(NAUTICAL_TWILIGHT_ALTITUDE, false);
    pub const ASTRONOMICAL: Horizon = Horizon::new(ASTRONOMICAL_TWILIGHT_ALTITUDE, false);

    pub const fn new(altitude: f64, upper_limb: bool) -> Self {
        Self {
            altitude,
            upper_limb,
        }
    }

    fn effective_altitude(&self, sun_radius: f64) -> f64 {
        if self.upper_limb {
            self.altitude - sun_radius
        } else {
            self.altitude
        }
    }
}

/// Named horizon presets, selectable from the config file and command line.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Twilight {
    /// Upper limb touching the horizon, refraction included.
    RiseSet,
    /// Sun centre 6 degrees below the horizon.
    Civil,
    /// Sun centre 12 degrees below the horizon.
    Nautical,
    /// Sun centre 18 degrees below the horizon.
    Astronomical,
}

impl Twilight {
    pub const ALL: [Twilight; 4] = [
        Twilight::RiseSet,
        Twilight::Civil,
        Twilight::Nautical,
        Twilight::Astronomical,
    ];

    pub fn horizon(&self) -> Horizon {
        match self {
            Twilight::RiseSet => Horizon::RISE_SET,
            Twilight::Civil => Horizon::CIVIL,
            Twilight::Nautical => Horizon::NAUTICAL,
            Twilight::Astronomical => Horizon::ASTRONOMICAL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Twilight::RiseSet => "rise-set",
            Twilight::Civil => "civil",
            Twilight::Nautical => "nautical",
            Twilight::Astronomical => "astronomical",
        }
    }

    /// Names of the morning and evening events for this horizon.
    pub fn event_names(&self) -> (&'static str, &'static str) {
        match self {
            Twilight::RiseSet => ("Sunrise", "Sunset"),
            Twilight::Civil => ("Civil dawn", "Civil dusk"),
            Twilight::Nautical => ("Nautical dawn", "Nautical dusk"),
            Twilight::Astronomical => ("Astronomical dawn", "Astronomical dusk"),
        }
    }
}

/// Whether the Sun actually crosses the requested altitude on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossingStatus {
    /// The Sun rises above and sets below the altitude.
    Normal,
    /// The Sun stays above the altitude all day (polar day).
    AlwaysAbove,
    /// The Sun stays below the altitude all day (polar night).
    AlwaysBelow,
}

impl CrossingStatus {
    fn from_arc_cosine(cost: f64) -> Self {
        // The exact +-1 boundary is the degenerate case, not a zero-length event.
        if cost >= 1.0 {
            CrossingStatus::AlwaysBelow
        } else if cost <= -1.0 {
            CrossingStatus::AlwaysAbove
        } else {
            CrossingStatus::Normal
        }
    }
}

/// Result of [`solve_crossing`], all times in hours after 00:00 UT of the date.
///
/// Values may fall outside 0..24 when an event lands on the previous or next
/// UT day. When `status` is not [`CrossingStatus::Normal`], `rise` and `set`
/// hold `transit` -/+ 12 h (always above) or `transit` (always below) and must
/// not be read as events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingResult {
    pub rise: f64,
    pub set: f64,
    /// Time of solar transit (local apparent noon).
    pub transit: f64,
    pub status: CrossingStatus,
}

impl CrossingResult {
    pub fn is_normal(&self) -> bool {
        self.status == CrossingStatus::Normal
    }

    /// `(rise, set)` when both events happen, `None` for polar day or night.
    pub fn events(&self) -> Option<(f64, f64)> {
        self.is_normal().then_some((self.rise, self.set))
    }
}

/// Diurnal-arc cosine for an altitude, observer latitude and solar declination.
fn arc_cosine(altitude: f64, latitude: f64, sin_dec: f64, cos_dec: f64) -> f64 {
    (sind(altitude) - sind(latitude) * sin_dec) / (cosd(latitude) * cos_dec)
}

/// Compute the UT hours at which the Sun crosses `horizon`.
///
/// # Examples
/// ```
/// use sunriset::geo::GeoCoordinate;
/// use sunriset::solar::{CivilDate, CrossingStatus, Horizon, solve_crossing};
///
/// let london = GeoCoordinate::unchecked(51.5074, -0.1278);
/// let result = solve_crossing(CivilDate::new(2024, 3, 20), london, Horizon::RISE_SET);
/// assert_eq!(result.status, CrossingStatus::Normal);
/// assert!(result.rise < result.transit && result.transit < result.set);
/// ```
pub fn solve_crossing(date: CivilDate, coord: GeoCoordinate, horizon: Horizon) -> CrossingResult {
    let d = date.local_noon_day(coord.longitude);

    // Local sidereal time at this moment
    let sidereal_time = revolution(gmst0(d) + 180.0 + coord.longitude);

    let sun = sun_ra_dec(d);
    let transit = 12.0 - rev180(sidereal_time - sun.right_ascension) / DEGREES_PER_HOUR;

    let altitude = horizon.effective_altitude(apparent_radius(sun.distance));
    let cost = arc_cosine(
        altitude,
        coord.latitude,
        sind(sun.declination),
        cosd(sun.declination),
    );

    let status = CrossingStatus::from_arc_cosine(cost);
    let half_arc = match status {
        CrossingStatus::AlwaysBelow => 0.0,
        CrossingStatus::AlwaysAbove => 12.0,
        CrossingStatus::Normal => acosd(cost) / DEGREES_PER_HOUR,
    };

    CrossingResult {
        rise: transit - half_arc,
        set: transit + half_arc,
        transit,
        status,
    }
}

/// Compute how many hours the Sun spends above `horizon`, in 0..=24.
///
/// Independent of clock time, so the sidereal-time step is skipped and the
/// declination comes straight from the ecliptic longitude.
pub fn solve_day_length(date: CivilDate, coord: GeoCoordinate, horizon: Horizon) -> f64 {
    let d = date.local_noon_day(coord.longitude);

    let obliquity = obliquity_of_ecliptic(d);
    let sun = sun_position(d);
    let sin_dec = sind(obliquity) * sind(sun.longitude);
    let cos_dec = (1.0 - sin_dec * sin_dec).sqrt();

    let altitude = horizon.effective_altitude(apparent_radius(sun.distance));
    let cost = arc_cosine(altitude, coord.latitude, sin_dec, cos_dec);

    match CrossingStatus::from_arc_cosine(cost) {
        CrossingStatus::AlwaysBelow => 0.0,
        CrossingStatus::AlwaysAbove => 24.0,
        CrossingStatus::Normal => (2.0 / DEGREES_PER_HOUR) * acosd(cost),
    }
}

/// Sunrise and sunset (upper limb, refraction included).
pub fn sun_rise_set(date: CivilDate, coord: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coord, Horizon::RISE_SET)
}

/// Start and end of civil twilight.
pub fn civil_twilight(date: CivilDate, coord: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coord, Horizon::CIVIL)
}

/// Start and end of nautical twilight.
pub fn nautical_twilight(date: CivilDate, coord: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coord, Horizon::NAUTICAL)
}

/// Start and end of astronomical twilight.
pub fn astronomical_twilight(date: CivilDate, coord: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coord, Horizon::ASTRONOMICAL)
}

/// Hours from sunrise to sunset.
pub fn day_length(date: CivilDate, coord: GeoCoordinate) -> f64 {
    solve_day_length(date, coord, Horizon::RISE_SET)
}

/// Hours from civil dawn to civil dusk.
pub fn civil_twilight_length(date: CivilDate, coord: GeoCoordinate) -> f64 {
    solve_day_length(date, coord, Horizon::CIVIL)
}

/// Hours from nautical dawn to nautical dusk.
pub fn nautical_twilight_length(date: CivilDate, coord: GeoCoordinate) -> f64 {
    solve_day_length(date, coord, Horizon::NAUTICAL)
}

/// Hours from astronomical dawn to astronomical dusk.
pub fn astronomical_twilight_length(date: CivilDate, coord: GeoCoordinate) -> f64 {
    solve_day_length(date, coord, Horizon::ASTRONOMICAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;

    const SECOND: f64 = 1.0 / 3600.0;

    fn san_francisco() -> GeoCoordinate {
        GeoCoordinate::unchecked(TEST_SF_LATITUDE, TEST_SF_LONGITUDE)
    }

    #[test]
    fn test_reference_crossing_in_ut_hours() {
        let result = sun_rise_set(CivilDate::new(2024, 6, 20), san_francisco());

        assert_eq!(result.status, CrossingStatus::Normal);
        // 12:48:01.35 UT and 03:34:59.96 UT the following day
        assert!((result.rise - 12.800_375).abs() < 0.01 * SECOND);
        assert!((result.set - 27.583_322).abs() < 0.01 * SECOND);
        assert!((result.transit - (result.rise + result.set) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_poles_at_june_solstice() {
        let date = CivilDate::new(2024, 6, 20);
        let north = sun_rise_set(date, GeoCoordinate::unchecked(90.0, 0.0));
        let south = sun_rise_set(date, GeoCoordinate::unchecked(-90.0, 0.0));

        assert_eq!(north.status, CrossingStatus::AlwaysAbove);
        assert_eq!(south.status, CrossingStatus::AlwaysBelow);
        assert_eq!(north.events(), None);
        assert_eq!(south.events(), None);
    }

    #[test]
    fn test_north_pole_in_winter() {
        let north_pole = GeoCoordinate::unchecked(90.0, 0.0);
        let result = sun_rise_set(CivilDate::new(2024, 12, 21), north_pole);
        assert_eq!(result.status, CrossingStatus::AlwaysBelow);
    }

    #[test]
    fn test_degenerate_results_carry_transit() {
        let date = CivilDate::new(2024, 6, 20);

        let above = sun_rise_set(date, GeoCoordinate::unchecked(90.0, 0.0));
        assert!((above.rise - (above.transit - 12.0)).abs() < 1e-12);
        assert!((above.set - (above.transit + 12.0)).abs() < 1e-12);

        let below = sun_rise_set(date, GeoCoordinate::unchecked(-90.0, 0.0));
        assert_eq!(below.rise, below.transit);
        assert_eq!(below.set, below.transit);
    }

    #[test]
    fn test_always_above_is_full_day_in_both_solvers() {
        // Half-arc of 12 h around transit in one solver, full 24 h in the other.
        let date = CivilDate::new(2024, 6, 21);
        let tromso = GeoCoordinate::unchecked(69.65, 18.95);

        let crossing = sun_rise_set(date, tromso);
        assert_eq!(crossing.status, CrossingStatus::AlwaysAbove);
        assert!((crossing.set - crossing.rise - 24.0).abs() < 1e-12);
        assert_eq!(day_length(date, tromso), 24.0);
    }

    #[test]
    fn test_always_below_is_zero_in_both_solvers() {
        let date = CivilDate::new(2024, 12, 21);
        let tromso = GeoCoordinate::unchecked(69.65, 18.95);

        let crossing = sun_rise_set(date, tromso);
        assert_eq!(crossing.status, CrossingStatus::AlwaysBelow);
        assert_eq!(crossing.set - crossing.rise, 0.0);
        assert_eq!(day_length(date, tromso), 0.0);
    }

    #[test]
    fn test_day_length_matches_crossing_arc() {
        let date = CivilDate::new(2024, 6, 20);
        let result = sun_rise_set(date, san_francisco());
        let length = day_length(date, san_francisco());

        assert!((length - (result.set - result.rise)).abs() < 1e-9);
        assert!((length - 14.782_947).abs() < 1e-5);
    }

    #[test]
    fn test_twilight_lengths_are_ordered() {
        let date = CivilDate::new(2024, 3, 20);
        let coord = GeoCoordinate::unchecked(40.0, -75.0);

        let astronomical = astronomical_twilight_length(date, coord);
        let nautical = nautical_twilight_length(date, coord);
        let civil = civil_twilight_length(date, coord);
        let daylight = day_length(date, coord);

        assert!(astronomical > nautical);
        assert!(nautical > civil);
        assert!(civil > daylight);
        assert!(daylight > 11.5 && daylight < 12.5);
    }

    #[test]
    fn test_twilight_crossings_nest_around_sunrise() {
        let date = CivilDate::new(2024, 3, 20);
        let coord = GeoCoordinate::unchecked(TEST_LONDON_LATITUDE, TEST_LONDON_LONGITUDE);

        let rise_set = sun_rise_set(date, coord);
        let civil = civil_twilight(date, coord);
        let nautical = nautical_twilight(date, coord);
        let astronomical = astronomical_twilight(date, coord);

        assert!(astronomical.rise < nautical.rise);
        assert!(nautical.rise < civil.rise);
        assert!(civil.rise < rise_set.rise);
        assert!(rise_set.set < civil.set);
        assert!(civil.set < nautical.set);
        assert!(nautical.set < astronomical.set);
    }

    #[test]
    fn test_london_summer_has_no_astronomical_night() {
        let date = CivilDate::new(2024, 6, 20);
        let london = GeoCoordinate::unchecked(TEST_LONDON_LATITUDE, TEST_LONDON_LONGITUDE);

        assert_eq!(astronomical_twilight_length(date, london), 24.0);
        assert_eq!(
            astronomical_twilight(date, london).status,
            CrossingStatus::AlwaysAbove
        );
        assert!(nautical_twilight(date, london).is_normal());
    }

    #[test]
    fn test_upper_limb_lengthens_the_day() {
        let date = CivilDate::new(2024, 9, 1);
        let coord = san_francisco();
        let centre = solve_day_length(date, coord, Horizon::new(RISE_SET_ALTITUDE, false));
        let limb = solve_day_length(date, coord, Horizon::RISE_SET);

        // About two minutes of extra daylight at this latitude.
        assert!(limb > centre);
        assert!(limb - centre < 0.1);
    }

    #[test]
    fn test_twilight_presets() {
        assert_eq!(Twilight::RiseSet.horizon(), Horizon::RISE_SET);
        assert_eq!(Twilight::Astronomical.horizon().altitude, -18.0);
        assert!(!Twilight::Civil.horizon().upper_limb);
        assert!(Horizon::RISE_SET.upper_limb);
        assert_eq!(Twilight::Nautical.as_str(), "nautical");
        assert_eq!(Twilight::RiseSet.event_names(), ("Sunrise", "Sunset"));
    }

    #[test]
    fn test_arc_cosine_boundary_is_degenerate() {
        assert_eq!(CrossingStatus::from_arc_cosine(1.0), CrossingStatus::AlwaysBelow);
        assert_eq!(CrossingStatus::from_arc_cosine(-1.0), CrossingStatus::AlwaysAbove);
        assert_eq!(
            CrossingStatus::from_arc_cosine(1.0 - f64::EPSILON),
            CrossingStatus::Normal
        );
        assert_eq!(
            CrossingStatus::from_arc_cosine(-1.0 + f64::EPSILON),
            CrossingStatus::Normal
        );
        assert_eq!(CrossingStatus::from_arc_cosine(1.5), CrossingStatus::AlwaysBelow);
        assert_eq!(CrossingStatus::from_arc_cosine(-1.5), CrossingStatus::AlwaysAbove);
    }

    #[test]
    fn test_antimeridian_longitudes_agree() {
        let date = CivilDate::new(2024, 3, 20);
        for (a, b) in [(180.0, 540.0), (-180.0, 180.0), (-180.0, -540.0)] {
            let first = GeoCoordinate::unchecked(40.0, a);
            let second = GeoCoordinate::unchecked(40.0, b);

            let x = solve_crossing(date, first, Horizon::RISE_SET);
            let y = solve_crossing(date, second, Horizon::RISE_SET);
            assert_eq!(x.status, y.status);
            assert!((x.rise - y.rise).abs() < 1e-9, "{} vs {}: {:?} {:?}", a, b, x, y);
            assert!((x.set - y.set).abs() < 1e-9, "{} vs {}: {:?} {:?}", a, b, x, y);

            let x_len = solve_day_length(date, first, Horizon::RISE_SET);
            let y_len = solve_day_length(date, second, Horizon::RISE_SET);
            assert_eq!(x_len, y_len);
        }
    }
}
