//! Implementation of the `day-length` command.

use anyhow::Result;
use chrono::Duration;

use super::{Query, format_duration};
use crate::calendar;
use crate::logger::Log;
use crate::provider::SunTimesProvider;
use crate::solar::Twilight;

pub fn handle_day_length_command(
    query: &Query,
    provider: Option<&dyn SunTimesProvider>,
) -> Result<()> {
    let when = query.instant()?;

    Log::log_version();
    Log::log_decorated(&format!("Day length for {}", query.location));
    Log::log_indented(&format!("Date: {} ({})", query.date, query.timezone));

    Log::log_block_start("Time above each horizon");
    for (twilight, length) in lengths(&when, query, provider) {
        let marker = if twilight == query.twilight { "▸" } else { " " };
        Log::log_indented(&format!(
            "{} {:<14} {}",
            marker,
            format!("{}:", label(twilight)),
            format_duration(length)
        ));
    }

    Log::log_end();
    Ok(())
}

fn lengths<Z: chrono::TimeZone>(
    when: &chrono::DateTime<Z>,
    query: &Query,
    provider: Option<&dyn SunTimesProvider>,
) -> Vec<(Twilight, Duration)> {
    Twilight::ALL
        .iter()
        .map(|&twilight| {
            (
                twilight,
                calendar::day_length(when, query.coordinate, twilight, provider),
            )
        })
        .collect()
}

fn label(twilight: Twilight) -> &'static str {
    match twilight {
        Twilight::RiseSet => "Daylight",
        Twilight::Civil => "Civil",
        Twilight::Nautical => "Nautical",
        Twilight::Astronomical => "Astronomical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoCoordinate;
    use chrono::NaiveDate;
    use chrono_tz::America::New_York;

    #[test]
    fn test_lengths_grow_with_depth() {
        let query = Query {
            coordinate: GeoCoordinate::unchecked(40.0, -75.0),
            location: "test".to_string(),
            timezone: New_York,
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            twilight: Twilight::Civil,
            time_format: "%H:%M".to_string(),
        };
        let when = query.instant().unwrap();

        let lengths = lengths(&when, &query, None);
        assert_eq!(lengths.len(), 4);
        assert!(lengths.windows(2).all(|w| w[0].1 < w[1].1));

        // 12.17 h of daylight at the equinox, per the rise/set horizon
        let daylight = lengths[0].1.num_minutes();
        assert!((daylight - 730).abs() <= 1, "daylight was {} min", daylight);
    }
}
