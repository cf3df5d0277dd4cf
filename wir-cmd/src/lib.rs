//! Command implementations for the Will It Rain CLI.
//!
//! Provides subcommands for querying the weather summary service and listing
//! the cache-busted chart URLs, plus YAML config discovery.

use clap::Subcommand;
use wir_core::ServiceConfig;

pub mod config;
pub mod graphs;
pub mod search;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch and print the weather summary for a location and date
    Search {
        /// Latitude of the location
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the location
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Event date (YYYY-MM-DD)
        #[arg(long, value_parser = search::parse_date_arg)]
        date: String,
    },

    /// Print the historic measurement chart URLs with a fresh cache-busting token
    Graphs,
}

pub async fn run(command: Command, config: ServiceConfig) -> anyhow::Result<()> {
    match command {
        Command::Search { lat, lon, date } => {
            let output = search::run_search(&config, lat, lon, &date).await?;
            print!("{}", output);
            Ok(())
        }
        Command::Graphs => {
            let output = graphs::run_graphs(&config, chrono::Utc::now().timestamp_millis());
            print!("{}", output);
            Ok(())
        }
    }
}
