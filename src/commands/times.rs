//! Implementation of the `times` command, the default when no subcommand is given.
//!
//! Prints the morning and evening events for the selected horizon, followed by
//! the full sequence from astronomical dawn to astronomical dusk.

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::{Query, format_duration, format_event};
use crate::calendar;
use crate::geo;
use crate::logger::Log;
use crate::provider::SunTimesProvider;
use crate::solar::{CrossingStatus, SolarEphemeris, Twilight};
use crate::sun_times::SunTimes;

pub fn handle_times_command(query: &Query, provider: Option<&dyn SunTimesProvider>) -> Result<()> {
    let when = query.instant()?;
    let times = SunTimes::compute(&when, query.coordinate, provider);
    let horizon = query.twilight.horizon();
    let status = calendar::crossing(&when, query.coordinate, horizon, provider).status;

    Log::log_version();
    Log::log_decorated(&format!("Sun times for {}", query.location));
    Log::log_indented(&format!("Date: {} ({})", query.date, query.timezone));
    log_debug_details(query, &times);

    let (morning, evening) = query.twilight.event_names();
    let (dawn, dusk) = times.events(query.twilight);
    Log::log_block_start(&format!("{} / {}", morning, evening));
    match status_note(status, query.twilight) {
        Some(note) => Log::log_indented(&note),
        None => {
            log_row(morning, &format_event(dawn, query));
            log_row(evening, &format_event(dusk, query));
        }
    }
    log_row("Duration", &format_duration(times.length(query.twilight)));

    Log::log_block_start("Full day");
    for (label, event) in sequence(&times) {
        log_row(label, &format_event(event, query));
    }

    Log::log_end();
    Ok(())
}

fn log_row(label: &str, value: &str) {
    Log::log_indented(&format!("{:<18} {}", format!("{}:", label), value));
}

/// Every event of the day in chronological order, with display labels.
pub fn sequence(times: &SunTimes) -> Vec<(&'static str, Option<DateTime<Utc>>)> {
    let mut rows = Vec::with_capacity(9);
    for twilight in Twilight::ALL.iter().rev() {
        rows.push((twilight.event_names().0, times.events(*twilight).0));
    }
    rows.push(("Solar noon", times.solar_noon));
    for twilight in Twilight::ALL {
        rows.push((twilight.event_names().1, times.events(twilight).1));
    }
    rows
}

/// Explanation for days on which the selected horizon is never crossed.
pub fn status_note(status: CrossingStatus, twilight: Twilight) -> Option<String> {
    let horizon = match twilight {
        Twilight::RiseSet => "horizon".to_string(),
        other => format!("{} twilight altitude", other.as_str()),
    };
    match status {
        CrossingStatus::Normal => None,
        CrossingStatus::AlwaysAbove => Some(format!("The Sun stays above the {} all day", horizon)),
        CrossingStatus::AlwaysBelow => Some(format!("The Sun stays below the {} all day", horizon)),
    }
}

fn log_debug_details(query: &Query, times: &SunTimes) {
    if !Log::is_debug() {
        return;
    }

    Log::log_debug_indented(&format!("Provider: {}", times.provider));
    Log::log_debug_indented(&format!("Coordinates: {}", query.coordinate.display()));

    let days = crate::solar::CivilDate::from(query.date).local_noon_day(query.coordinate.longitude);
    let ephemeris = SolarEphemeris::at(days);
    Log::log_debug_indented(&format!(
        "Ephemeris at local noon (d = {:.4}): RA {:.4}°, dec {:.4}°, r {:.6} AU",
        ephemeris.days_since_epoch,
        ephemeris.right_ascension,
        ephemeris.declination,
        ephemeris.distance
    ));

    if let Some(noon) = times.solar_noon {
        Log::log_debug_indented(&format!("Solar noon (UTC): {}", noon.format("%Y-%m-%d %H:%M:%S")));
    }

    if let Some(city) = geo::find_cities_near_coordinate(query.coordinate, 1).first() {
        Log::log_debug_indented(&format!(
            "Nearest city: {} ({:.0} km)",
            city.label(),
            city.coordinate().distance_km(&query.coordinate)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoCoordinate;
    use chrono::TimeZone;
    use chrono_tz::Europe::London;

    #[test]
    fn test_sequence_is_chronological() {
        let when = London.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let times = SunTimes::compute(&when, GeoCoordinate::unchecked(51.5074, -0.1278), None);

        let rows = sequence(&times);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].0, "Astronomical dawn");
        assert_eq!(rows[3].0, "Sunrise");
        assert_eq!(rows[4].0, "Solar noon");
        assert_eq!(rows[5].0, "Sunset");
        assert_eq!(rows[8].0, "Astronomical dusk");

        let instants: Vec<_> = rows.iter().map(|(_, t)| t.unwrap()).collect();
        assert!(instants.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_status_note() {
        assert_eq!(status_note(CrossingStatus::Normal, Twilight::RiseSet), None);
        assert_eq!(
            status_note(CrossingStatus::AlwaysAbove, Twilight::RiseSet).unwrap(),
            "The Sun stays above the horizon all day"
        );
        assert_eq!(
            status_note(CrossingStatus::AlwaysBelow, Twilight::Nautical).unwrap(),
            "The Sun stays below the nautical twilight altitude all day"
        );
    }
}
