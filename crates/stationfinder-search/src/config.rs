use std::time::Duration;

use stationfinder_core::AppConfig;

use crate::demo::{default_demo_venues, DemoVenue};

/// Tuning for one [`StationFinder`](crate::StationFinder).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Stations per Overpass query.
    pub batch_size: usize,
    /// Pause between successive batch dispatches.
    pub inter_batch_delay: Duration,
    pub max_results: usize,
    /// Stations searched for a free-text query.
    pub text_station_limit: usize,
    /// Stations searched for a category-only query.
    pub category_station_limit: usize,
    /// Offline venues served when live search yields nothing.
    pub demo_venues: Vec<DemoVenue>,
}

impl SearchConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            inter_batch_delay: Duration::from_millis(config.inter_batch_delay_ms),
            max_results: config.max_results,
            text_station_limit: config.text_station_limit,
            category_station_limit: config.category_station_limit,
            demo_venues: default_demo_venues(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: 8,
            inter_batch_delay: Duration::from_millis(500),
            max_results: 50,
            text_station_limit: 8,
            category_station_limit: 24,
            demo_venues: default_demo_venues(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_app_config_copies_limits() {
        let app = AppConfig {
            overpass_endpoints: vec!["https://overpass.test/api/interpreter".to_string()],
            request_timeout_secs: 10,
            user_agent: "test".to_string(),
            batch_size: 3,
            inter_batch_delay_ms: 0,
            max_results: 20,
            text_station_limit: 4,
            category_station_limit: 12,
            stations_path: None,
            log_level: "info".to_string(),
        };
        let config = SearchConfig::from_app_config(&app);
        assert_eq!(config.batch_size, 3);
        assert!(config.inter_batch_delay.is_zero());
        assert_eq!(config.max_results, 20);
        assert_eq!(config.text_station_limit, 4);
        assert_eq!(config.category_station_limit, 12);
        assert!(!config.demo_venues.is_empty());
    }
}
