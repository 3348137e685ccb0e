//! Pluggable sunrise/sunset algorithms.
//!
//! The calendar adapter only needs something that turns a civil date, an
//! observer and a horizon into crossing hours and day lengths. Any type
//! implementing [`SunTimesProvider`] can be passed in place of the built-in
//! [`Schlyter`] model.

use crate::geo::GeoCoordinate;
use crate::solar::{self, CivilDate, CrossingResult, Horizon};

/// Capability interface for a sunrise/sunset algorithm.
///
/// Implementations must report hours relative to 00:00 UT of `date` and keep
/// polar day and polar night distinguishable through [`CrossingResult::status`].
pub trait SunTimesProvider: Send + Sync {
    /// Short identifier used in debug output.
    fn name(&self) -> &'static str;

    /// Times at which the Sun crosses `horizon` on `date`.
    fn crossing(&self, date: CivilDate, coord: GeoCoordinate, horizon: Horizon) -> CrossingResult;

    /// Hours the Sun spends above `horizon` on `date`, in 0..=24.
    fn day_length(&self, date: CivilDate, coord: GeoCoordinate, horizon: Horizon) -> f64;
}

/// Paul Schlyter's closed-form model, valid for years 1801-2099.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schlyter;

impl SunTimesProvider for Schlyter {
    fn name(&self) -> &'static str {
        "schlyter"
    }

    fn crossing(&self, date: CivilDate, coord: GeoCoordinate, horizon: Horizon) -> CrossingResult {
        solar::solve_crossing(date, coord, horizon)
    }

    fn day_length(&self, date: CivilDate, coord: GeoCoordinate, horizon: Horizon) -> f64 {
        solar::solve_day_length(date, coord, horizon)
    }
}

/// The provider used when a caller does not choose one.
pub static DEFAULT_PROVIDER: Schlyter = Schlyter;

/// Resolve an optional caller choice to a concrete provider.
pub fn resolve(provider: Option<&dyn SunTimesProvider>) -> &dyn SunTimesProvider {
    provider.unwrap_or(&DEFAULT_PROVIDER)
}
