//! Calendar date to day-number conversion.

use super::angles::rev180;
use crate::constants::{DAYS_EPOCH_OFFSET, NOON_DAY_FRACTION};

/// A proleptic Gregorian calendar date in plain integer fields.
///
/// The solver never validates these fields; anything the arithmetic tolerates
/// is accepted. Use the calendar adapter to build one from a zoned instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Whole days since 2000 Jan 0.0 (that is, 1999-12-31 00:00 UT).
    pub fn days_since_2000_jan_0(&self) -> i64 {
        days_since_2000_jan_0(self.year, self.month, self.day)
    }

    /// Fractional day count at local noon for an observer at `longitude`.
    ///
    /// This is the instant every solar quantity of the day is evaluated at.
    /// The longitude is first wrapped into [-180, 180), so +180 and -180 name
    /// the same meridian, as do any two longitudes a whole turn apart.
    pub fn local_noon_day(&self, longitude: f64) -> f64 {
        self.days_since_2000_jan_0() as f64 + NOON_DAY_FRACTION - rev180(longitude) / 360.0
    }
}

/// Day number relative to 2000 Jan 0.0 using truncating integer division.
///
/// All divisions are non-negative for years 1801-2099, so truncation and floor
/// agree there.
///
/// # Examples
/// ```
/// use sunriset::solar::days_since_2000_jan_0;
/// assert_eq!(days_since_2000_jan_0(2000, 1, 1), 1);
/// ```
pub fn days_since_2000_jan_0(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);
    367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + d - DAYS_EPOCH_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_reference_days() {
        assert_eq!(days_since_2000_jan_0(1999, 12, 31), 0);
        assert_eq!(days_since_2000_jan_0(2000, 1, 1), 1);
        assert_eq!(days_since_2000_jan_0(2000, 3, 1), 61); // leap year
        assert_eq!(days_since_2000_jan_0(2001, 1, 1), 367);
    }

    #[test]
    fn test_consecutive_days_across_month_boundaries() {
        let cases = [
            ((2024, 1, 31), (2024, 2, 1)),
            ((2024, 2, 29), (2024, 3, 1)),
            ((2023, 2, 28), (2023, 3, 1)),
            ((2024, 12, 31), (2025, 1, 1)),
        ];
        for ((y1, m1, d1), (y2, m2, d2)) in cases {
            assert_eq!(
                days_since_2000_jan_0(y2, m2, d2) - days_since_2000_jan_0(y1, m1, d1),
                1,
                "{}-{}-{} -> {}-{}-{}",
                y1,
                m1,
                d1,
                y2,
                m2,
                d2
            );
        }
    }

    #[test]
    fn test_local_noon_day_shifts_with_longitude() {
        let date = CivilDate::new(2024, 6, 20);
        let base = date.days_since_2000_jan_0() as f64;
        assert!((date.local_noon_day(0.0) - (base + 0.5)).abs() < 1e-12);
        assert!((date.local_noon_day(90.0) - (base + 0.25)).abs() < 1e-12);
        assert!((date.local_noon_day(-180.0) - (base + 1.0)).abs() < 1e-12);
        assert!((date.local_noon_day(450.0) - date.local_noon_day(90.0)).abs() < 1e-12);
    }

    #[test]
    fn test_local_noon_day_antimeridian_is_one_meridian() {
        let date = CivilDate::new(2024, 3, 20);
        let west = date.local_noon_day(-180.0);
        assert_eq!(date.local_noon_day(180.0), west);
        assert_eq!(date.local_noon_day(540.0), west);
        assert_eq!(date.local_noon_day(-540.0), west);
    }
}
