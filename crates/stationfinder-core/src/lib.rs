//! Shared domain types for the station finder workspace.
//!
//! Holds the station table, search filters and results, the great-circle
//! distance helpers, the category mapper, and environment-driven
//! configuration. Nothing in this crate performs I/O except the YAML station
//! loader and the config loader.

pub mod app_config;
pub mod category;
pub mod config;
pub mod geo;
pub mod stations;
pub mod types;

use thiserror::Error;

pub use app_config::AppConfig;
pub use category::{CategoryMap, CategorySelection, ALL_CATEGORIES, OTHER_CATEGORY};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{haversine_km, nearest_station, EARTH_RADIUS_KM};
pub use stations::{default_stations, load_stations, Station, Tier};
pub use types::{coordinate_key, SearchFilters, SearchResult};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read stations file {path}: {source}")]
    StationsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stations file: {0}")]
    StationsFileParse(#[from] serde_yaml::Error),

    #[error("stations validation failed: {0}")]
    Validation(String),
}
