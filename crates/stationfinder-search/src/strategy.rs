//! Search strategies and pipeline phases.

use std::fmt;

use stationfinder_core::{SearchFilters, Station};

use crate::config::SearchConfig;

/// Which stations a search queries, decided once from the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Only the named station.
    Station { code: String },
    /// Free-text query over the highest-tier stations.
    Text { limit: usize },
    /// Category-only query over a wider set of stations.
    Category { limit: usize },
    /// Nothing to search for; serve demo data without remote calls.
    Fallback,
}

impl SearchStrategy {
    /// Picks the strategy for `filters`.
    ///
    /// A station code that is not in `stations` is logged and ignored.
    #[must_use]
    pub fn select(filters: &SearchFilters, stations: &[Station], config: &SearchConfig) -> Self {
        if let Some(code) = filters.station_code() {
            match stations
                .iter()
                .find(|s| s.code.eq_ignore_ascii_case(code))
            {
                Some(station) => {
                    return Self::Station {
                        code: station.code.clone(),
                    }
                }
                None => tracing::warn!(code, "unknown station code; ignoring station filter"),
            }
        }

        if filters.text().is_some() {
            Self::Text {
                limit: config.text_station_limit,
            }
        } else if !filters.is_all_categories() {
            Self::Category {
                limit: config.category_station_limit,
            }
        } else {
            Self::Fallback
        }
    }

    /// The stations to query, highest tier first, table order within a tier.
    #[must_use]
    pub fn pick_stations(&self, stations: &[Station]) -> Vec<Station> {
        match self {
            Self::Station { code } => stations
                .iter()
                .filter(|s| s.code == *code)
                .take(1)
                .cloned()
                .collect(),
            Self::Text { limit } | Self::Category { limit } => {
                let mut ranked: Vec<&Station> = stations.iter().collect();
                ranked.sort_by_key(|s| s.tier);
                ranked.into_iter().take(*limit).cloned().collect()
            }
            Self::Fallback => Vec::new(),
        }
    }

    /// `true` when the search skips the remote pipeline entirely.
    #[must_use]
    pub fn short_circuits(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Pipeline states, logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    StrategySelected,
    Batching,
    Merging,
    Done,
    FailedFallback,
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchPhase::Idle => "idle",
            SearchPhase::StrategySelected => "strategy_selected",
            SearchPhase::Batching => "batching",
            SearchPhase::Merging => "merging",
            SearchPhase::Done => "done",
            SearchPhase::FailedFallback => "failed_fallback",
        };
        f.write_str(label)
    }
}
