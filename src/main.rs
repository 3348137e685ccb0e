use anyhow::Result;
use clap::Parser;

use sunriset::args::{Cli, Command};
use sunriset::commands::{self, cities, day_length, times};
use sunriset::config::Config;
use sunriset::constants::EXIT_FAILURE;
use sunriset::logger::Log;

fn main() {
    let cli = Cli::parse();
    Log::set_debug(cli.debug);

    if let Err(e) = run(cli) {
        Log::log_error(&format!("{:#}", e));
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = match cli.selected_command() {
        Command::Cities { query, limit } => return cities::handle_cities_command(&query, limit),
        other => other,
    };

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            config.log_config(path);
            config
        }
        None => {
            let config = Config::load()?;
            if let Ok(path) = Config::get_config_path() {
                config.log_config(&path);
            }
            config
        }
    };

    let query = commands::resolve_query(&cli.query, &config)?;

    if command == Command::DayLength {
        day_length::handle_day_length_command(&query, None)
    } else {
        times::handle_times_command(&query, None)
    }
}
