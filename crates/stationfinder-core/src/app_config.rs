use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Overpass interpreter URLs in failover priority order.
    pub overpass_endpoints: Vec<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub batch_size: usize,
    pub inter_batch_delay_ms: u64,
    pub max_results: usize,
    pub text_station_limit: usize,
    pub category_station_limit: usize,
    /// YAML station table; `None` uses the embedded table.
    pub stations_path: Option<PathBuf>,
    pub log_level: String,
}
