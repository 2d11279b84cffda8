use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_OVERPASS_ENDPOINTS: &str = "https://overpass-api.de/api/interpreter,\
https://overpass.kumi.systems/api/interpreter,\
https://maps.mail.ru/osm/tools/overpass/api/interpreter";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a working
/// configuration pointed at the public Overpass mirrors.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let overpass_endpoints = parse_endpoints(&or_default(
        "STATIONFINDER_OVERPASS_ENDPOINTS",
        DEFAULT_OVERPASS_ENDPOINTS,
    ))?;

    let request_timeout_secs = parse_u64("STATIONFINDER_REQUEST_TIMEOUT_SECS", "25")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STATIONFINDER_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let user_agent = or_default("STATIONFINDER_USER_AGENT", "stationfinder/0.1 (venue-search)");
    let batch_size = parse_positive_usize("STATIONFINDER_BATCH_SIZE", "8")?;
    let inter_batch_delay_ms = parse_u64("STATIONFINDER_INTER_BATCH_DELAY_MS", "500")?;
    let max_results = parse_positive_usize("STATIONFINDER_MAX_RESULTS", "50")?;
    let text_station_limit = parse_positive_usize("STATIONFINDER_TEXT_STATION_LIMIT", "8")?;
    let category_station_limit =
        parse_positive_usize("STATIONFINDER_CATEGORY_STATION_LIMIT", "24")?;
    let stations_path = lookup("STATIONFINDER_STATIONS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let log_level = or_default("STATIONFINDER_LOG_LEVEL", "info");

    Ok(AppConfig {
        overpass_endpoints,
        request_timeout_secs,
        user_agent,
        batch_size,
        inter_batch_delay_ms,
        max_results,
        text_station_limit,
        category_station_limit,
        stations_path,
        log_level,
    })
}

/// Split a comma-separated endpoint list, dropping blanks.
fn parse_endpoints(raw: &str) -> Result<Vec<String>, ConfigError> {
    let endpoints: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if endpoints.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "STATIONFINDER_OVERPASS_ENDPOINTS".to_string(),
            reason: "at least one endpoint URL is required".to_string(),
        });
    }
    if let Some(bad) = endpoints
        .iter()
        .find(|e| !(e.starts_with("http://") || e.starts_with("https://")))
    {
        return Err(ConfigError::InvalidEnvVar {
            var: "STATIONFINDER_OVERPASS_ENDPOINTS".to_string(),
            reason: format!("'{bad}' is not an http(s) URL"),
        });
    }

    Ok(endpoints)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
