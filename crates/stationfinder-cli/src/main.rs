mod catalog;
mod search;

use clap::{CommandFactory, Parser, Subcommand};
use stationfinder_core::{default_stations, load_stations, AppConfig, Station, Tier};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stationfinder")]
#[command(about = "Find venues near Dutch railway stations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search venues near stations
    Search {
        /// Free text matched against venue names
        #[arg(long, default_value = "")]
        query: String,
        /// Maximum distance to the nearest station, in kilometres
        #[arg(long, default_value_t = 2.0)]
        distance: f64,
        /// Category label (see `categories`), or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// Search around a single station code (e.g. ASD)
        #[arg(long)]
        station: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the station table
    Stations {
        /// Only stations of this tier (intercity, regional, local)
        #[arg(long)]
        tier: Option<Tier>,
        /// Print stations as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories and the venue tags they cover
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = stationfinder_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    match cli.command {
        Some(Commands::Search {
            query,
            distance,
            category,
            station,
            json,
        }) => {
            let stations = load_station_table(&config)?;
            search::run_search(
                &config,
                stations,
                search::SearchArgs {
                    query,
                    distance,
                    category,
                    station,
                    json,
                },
            )
            .await?;
        }
        Some(Commands::Stations { tier, json }) => {
            let stations = load_station_table(&config)?;
            catalog::run_stations(&stations, tier, json)?;
        }
        Some(Commands::Categories) => catalog::run_categories(),
        None => Cli::command().print_help()?,
    }

    Ok(())
}

/// Install the `fmt` subscriber on stderr. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_station_table(config: &AppConfig) -> anyhow::Result<Vec<Station>> {
    match config.stations_path.as_deref() {
        Some(path) => {
            let stations = load_stations(path)?;
            tracing::info!(path = %path.display(), count = stations.len(), "loaded station table");
            Ok(stations)
        }
        None => Ok(default_stations()),
    }
}

#[cfg(test)]
mod tests;
