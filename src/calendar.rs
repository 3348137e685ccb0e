//! Civil-time adapter between chrono instants and the UT-hour solver.
//!
//! The solver reasons in plain calendar fields and hours after 00:00 UT. This
//! module is the only place that touches a calendar library:
//! - the civil date is taken in the caller's own time zone, so "today" means
//!   today where the observer is
//! - solver hours are added to 00:00 UT of that same calendar date
//! - polar day and polar night come back as `None`
//!
//! Every function takes an optional provider and falls back to the built-in
//! [`Schlyter`](crate::provider::Schlyter) model when given `None`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::geo::GeoCoordinate;
use crate::provider::{SunTimesProvider, resolve};
use crate::solar::{CivilDate, CrossingResult, Horizon, Twilight};

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        CivilDate::new(date.year(), date.month(), date.day())
    }
}

/// Calendar fields of `when` as seen in its own time zone.
pub fn civil_date<Z: TimeZone>(when: &DateTime<Z>) -> CivilDate {
    when.date_naive().into()
}

/// Absolute instant `hours` after 00:00 UT on `date`.
///
/// Hours outside 0..24 roll into the neighbouring UT days. Returns `None` for
/// non-finite hours or instants chrono cannot represent.
pub fn instant_from_ut_hours(date: NaiveDate, hours: f64) -> Option<DateTime<Utc>> {
    if !hours.is_finite() {
        return None;
    }
    let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
    let offset = Duration::nanoseconds((hours * NANOS_PER_HOUR).round() as i64);
    midnight.checked_add_signed(offset)
}

/// Convert a length in hours to a chrono duration, to the millisecond.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

/// Raw crossing result for the civil date of `when`.
pub fn crossing<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    horizon: Horizon,
    provider: Option<&dyn SunTimesProvider>,
) -> CrossingResult {
    resolve(provider).crossing(civil_date(when), coord, horizon)
}

/// Both crossing instants, or `None` if the Sun never crosses `horizon` that day.
pub fn crossing_instants<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    horizon: Horizon,
    provider: Option<&dyn SunTimesProvider>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let date = when.date_naive();
    let (rise, set) = crossing(when, coord, horizon, provider).events()?;
    Some((
        instant_from_ut_hours(date, rise)?,
        instant_from_ut_hours(date, set)?,
    ))
}

/// Sunrise on the civil date of `when`.
///
/// # Examples
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::America::Los_Angeles;
/// use sunriset::calendar::sunrise;
/// use sunriset::geo::GeoCoordinate;
///
/// let noon = Los_Angeles.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap();
/// let sf = GeoCoordinate::unchecked(37.773972, -122.431297);
/// let rise = sunrise(&noon, sf, None).unwrap().with_timezone(&Los_Angeles);
/// assert_eq!(rise.format("%H:%M").to_string(), "05:48");
/// ```
pub fn sunrise<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    provider: Option<&dyn SunTimesProvider>,
) -> Option<DateTime<Utc>> {
    dawn(when, coord, Twilight::RiseSet, provider)
}

/// Sunset on the civil date of `when`.
pub fn sunset<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    provider: Option<&dyn SunTimesProvider>,
) -> Option<DateTime<Utc>> {
    dusk(when, coord, Twilight::RiseSet, provider)
}

/// Morning crossing of the `twilight` horizon (sunrise for [`Twilight::RiseSet`]).
pub fn dawn<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    twilight: Twilight,
    provider: Option<&dyn SunTimesProvider>,
) -> Option<DateTime<Utc>> {
    crossing_instants(when, coord, twilight.horizon(), provider).map(|(rise, _)| rise)
}

/// Evening crossing of the `twilight` horizon (sunset for [`Twilight::RiseSet`]).
pub fn dusk<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    twilight: Twilight,
    provider: Option<&dyn SunTimesProvider>,
) -> Option<DateTime<Utc>> {
    crossing_instants(when, coord, twilight.horizon(), provider).map(|(_, set)| set)
}

/// Solar transit (local apparent noon) on the civil date of `when`.
///
/// Defined every day, including polar day and polar night.
pub fn solar_noon<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    provider: Option<&dyn SunTimesProvider>,
) -> Option<DateTime<Utc>> {
    let result = crossing(when, coord, Horizon::RISE_SET, provider);
    instant_from_ut_hours(when.date_naive(), result.transit)
}

/// Time the Sun spends above the `twilight` horizon on the civil date of `when`.
pub fn day_length<Z: TimeZone>(
    when: &DateTime<Z>,
    coord: GeoCoordinate,
    twilight: Twilight,
    provider: Option<&dyn SunTimesProvider>,
) -> Duration {
    let hours = resolve(provider).day_length(civil_date(when), coord, twilight.horizon());
    hours_to_duration(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    #[test]
    fn test_civil_date_uses_callers_zone() {
        // 2024-06-20 23:30 in UTC-7 is already 06-21 in UTC
        let zone = FixedOffset::west_opt(7 * 3600).unwrap();
        let late = zone.with_ymd_and_hms(2024, 6, 20, 23, 30, 0).unwrap();

        assert_eq!(civil_date(&late), CivilDate::new(2024, 6, 20));
        assert_eq!(
            civil_date(&late.with_timezone(&Utc)),
            CivilDate::new(2024, 6, 21)
        );
    }

    #[test]
    fn test_instant_from_ut_hours() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();

        let morning = instant_from_ut_hours(date, 6.5).unwrap();
        assert_eq!(morning, Utc.with_ymd_and_hms(2024, 6, 20, 6, 30, 0).unwrap());

        // Hours past 24 land on the next UT day
        let late = instant_from_ut_hours(date, 27.25).unwrap();
        assert_eq!(late, Utc.with_ymd_and_hms(2024, 6, 21, 3, 15, 0).unwrap());

        // Negative hours land on the previous UT day
        let early = instant_from_ut_hours(date, -1.0).unwrap();
        assert_eq!(early.hour(), 23);
        assert_eq!(early.day(), 19);

        assert!(instant_from_ut_hours(date, f64::NAN).is_none());
        assert!(instant_from_ut_hours(date, f64::INFINITY).is_none());
    }

    #[test]
    fn test_hours_to_duration() {
        assert_eq!(hours_to_duration(0.0), Duration::zero());
        assert_eq!(hours_to_duration(24.0), Duration::hours(24));
        assert_eq!(hours_to_duration(1.5), Duration::minutes(90));
    }

    #[test]
    fn test_polar_events_are_absent() {
        let when = Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap();
        let north_pole = GeoCoordinate::unchecked(90.0, 0.0);

        assert!(sunrise(&when, north_pole, None).is_none());
        assert!(sunset(&when, north_pole, None).is_none());
        assert!(solar_noon(&when, north_pole, None).is_some());
        assert_eq!(
            day_length(&when, north_pole, Twilight::RiseSet, None),
            Duration::hours(24)
        );
    }

    #[test]
    fn test_custom_provider_is_used() {
        struct SixToSix;

        impl SunTimesProvider for SixToSix {
            fn name(&self) -> &'static str {
                "six-to-six"
            }

            fn crossing(&self, _: CivilDate, _: GeoCoordinate, _: Horizon) -> CrossingResult {
                CrossingResult {
                    rise: 6.0,
                    set: 18.0,
                    transit: 12.0,
                    status: crate::solar::CrossingStatus::Normal,
                }
            }

            fn day_length(&self, _: CivilDate, _: GeoCoordinate, _: Horizon) -> f64 {
                12.0
            }
        }

        let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let anywhere = GeoCoordinate::unchecked(0.0, 0.0);
        let provider: &dyn SunTimesProvider = &SixToSix;

        assert_eq!(
            sunrise(&when, anywhere, Some(provider)),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap())
        );
        assert_eq!(
            sunset(&when, anywhere, Some(provider)),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap())
        );
        assert_eq!(
            day_length(&when, anywhere, Twilight::Civil, Some(provider)),
            Duration::hours(12)
        );
    }
}
