//! Implementation of the `cities` command: search the built-in city database.

use anyhow::Result;

use crate::geo;
use crate::logger::Log;

pub fn handle_cities_command(query: &str, limit: usize) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("City search query must not be empty");
    }

    let results = geo::search_cities(query, limit);

    Log::log_version();
    if results.is_empty() {
        Log::log_decorated(&format!("No cities match \"{}\"", query));
        Log::log_end();
        return Ok(());
    }

    Log::log_decorated(&format!("Cities matching \"{}\":", query));
    for city in &results {
        Log::log_indented(&format!("{:<40} {}", city.label(), city.coordinate().display()));
    }
    Log::log_pipe();
    Log::log_decorated("Use --city \"<name>\" or copy the coordinates into sunriset.toml");
    Log::log_end();
    Ok(())
}
