//! City lookup for coordinate determination.
//!
//! Uses the `cities` crate, a database of 10,000+ cities worldwide, so users can
//! name a place instead of typing coordinates.

use anyhow::Result;

use super::GeoCoordinate;

/// Represents a city with its geographic information
#[derive(Debug, Clone, PartialEq)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityInfo {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::unchecked(self.latitude, self.longitude)
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Get all cities sorted alphabetically by name, skipping unnamed entries.
pub fn all_cities() -> Vec<CityInfo> {
    let iter = IntoIterator::into_iter(cities::all());
    let mut all: Vec<CityInfo> = iter
        .filter_map(|city| {
            if city.city.trim().is_empty() {
                return None;
            }

            Some(CityInfo {
                name: city.city.to_string(),
                country: city.country.to_string(),
                latitude: city.latitude,
                longitude: city.longitude,
            })
        })
        .collect();

    all.sort_by(|a, b| a.name.cmp(&b.name));
    all
}

/// Case-insensitive search over city and country names.
///
/// Exact city-name matches are listed first, then every other city whose name
/// or country contains `query`.
pub fn search_cities(query: &str, max_results: usize) -> Vec<CityInfo> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let (mut exact, partial): (Vec<CityInfo>, Vec<CityInfo>) = all_cities()
        .into_iter()
        .filter(|city| {
            city.name.to_lowercase().contains(&needle)
                || city.country.to_lowercase().contains(&needle)
        })
        .partition(|city| city.name.to_lowercase() == needle);

    exact.extend(partial);
    exact.truncate(max_results);
    exact
}

/// Resolve a city name, optionally qualified as `"City, Country"`.
///
/// # Returns
/// * `Ok(city)` - First exact match, or the first partial match if none is exact
/// * `Err(_)` - If nothing in the database matches
pub fn find_city(query: &str) -> Result<CityInfo> {
    let (name, country) = match query.split_once(',') {
        Some((name, country)) => (name.trim().to_lowercase(), Some(country.trim().to_lowercase())),
        None => (query.trim().to_lowercase(), None),
    };

    if name.is_empty() {
        anyhow::bail!("City name must not be empty");
    }

    let country_matches = |city: &CityInfo| match &country {
        Some(country) => city.country.to_lowercase().contains(country),
        None => true,
    };

    let candidates: Vec<CityInfo> = all_cities()
        .into_iter()
        .filter(|city| city.name.to_lowercase().contains(&name) && country_matches(city))
        .collect();

    candidates
        .iter()
        .find(|city| city.name.to_lowercase() == name)
        .or_else(|| candidates.first())
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No city matching '{}' found", query.trim()))
}

/// Find cities near a given coordinate, closest first.
///
/// # Arguments
/// * `target` - Coordinate to search around
/// * `max_results` - Maximum number of cities to return
pub fn find_cities_near_coordinate(target: GeoCoordinate, max_results: usize) -> Vec<CityInfo> {
    let mut with_distance: Vec<(CityInfo, f64)> = all_cities()
        .into_iter()
        .map(|city| {
            let distance = target.distance_km(&city.coordinate());
            (city, distance)
        })
        .collect();

    with_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    with_distance
        .into_iter()
        .take(max_results)
        .map(|(city, _)| city)
        .collect()
}
