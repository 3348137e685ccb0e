//! Timezone lookup for observer locations.
//!
//! Sunrise "today" means today where the observer stands, so the calendar
//! adapter needs the civil time zone of the coordinates. When the user does not
//! name one explicitly it is derived from timezone boundary data.

use anyhow::Result;
use chrono_tz::Tz;
use std::sync::OnceLock;
use tzf_rs::DefaultFinder;

/// Determine the timezone for given coordinates using precise timezone boundary data.
///
/// Falls back to the `TZ` environment variable and then UTC when the boundary
/// data yields a name chrono-tz does not know (open ocean, for example).
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    // One finder per process; building it parses the whole boundary set
    static FINDER: OnceLock<DefaultFinder> = OnceLock::new();
    let finder = FINDER.get_or_init(DefaultFinder::new);

    // Note: tzf-rs uses (longitude, latitude) order
    let tz_name = finder.get_tz_name(longitude, latitude);

    match tz_name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => match std::env::var("TZ") {
            Ok(tz_str) => tz_str.parse().unwrap_or(Tz::UTC),
            Err(_) => Tz::UTC,
        },
    }
}

/// Parse an IANA timezone identifier such as `Europe/Paris`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {}", name, e))
}
