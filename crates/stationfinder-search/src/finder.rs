use std::sync::atomic::{AtomicU64, Ordering};

use stationfinder_core::{CategoryMap, CategorySelection, SearchFilters, SearchResult, Station};
use stationfinder_overpass::{build_query, normalize_elements, OverpassClient};

use crate::config::SearchConfig;
use crate::demo::demo_results;
use crate::error::SearchError;
use crate::merge::merge_results;
use crate::strategy::{SearchPhase, SearchStrategy};

/// What the live pipeline produced for one request.
enum Outcome {
    /// The maximum distance is not a positive finite number; the answer is an
    /// empty list.
    InvalidDistance,
    /// The category has no tag mapping; the answer is an empty list.
    NoMapping,
    /// The strategy skips remote calls.
    ShortCircuit,
    Live(Vec<SearchResult>),
}

/// Venue search around stations, backed by Overpass with a demo fallback.
pub struct StationFinder {
    client: OverpassClient,
    stations: Vec<Station>,
    categories: CategoryMap,
    config: SearchConfig,
    latest_ticket: AtomicU64,
}

impl StationFinder {
    #[must_use]
    pub fn new(
        client: OverpassClient,
        stations: Vec<Station>,
        categories: CategoryMap,
        config: SearchConfig,
    ) -> Self {
        Self {
            client,
            stations,
            categories,
            config,
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// The station table, e.g. for map centering.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the live pipeline.
    ///
    /// A distance that is not a positive finite number, or an unmapped
    /// category, yields an empty list without remote calls. Empty
    /// filters short-circuit to demo data. Batches that fail are skipped; the
    /// merged remainder is returned even when it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AllBatchesFailed`] when every batch failed.
    pub async fn search(&self, filters: &SearchFilters) -> Result<Vec<SearchResult>, SearchError> {
        match self.run(filters).await? {
            Outcome::InvalidDistance | Outcome::NoMapping => Ok(Vec::new()),
            Outcome::ShortCircuit => Ok(self.demo(filters)),
            Outcome::Live(results) => Ok(results),
        }
    }

    /// Like [`search`](Self::search), but never fails: failures and empty live
    /// results fall back to demo data.
    pub async fn search_with_fallback(&self, filters: &SearchFilters) -> Vec<SearchResult> {
        match self.run(filters).await {
            Ok(Outcome::InvalidDistance | Outcome::NoMapping) => Vec::new(),
            Ok(Outcome::ShortCircuit) => self.demo(filters),
            Ok(Outcome::Live(results)) if !results.is_empty() => {
                tracing::debug!(phase = %SearchPhase::Done, results = results.len(), "search complete");
                results
            }
            Ok(Outcome::Live(_)) => {
                tracing::info!(
                    phase = %SearchPhase::FailedFallback,
                    "no live results; serving demo data"
                );
                self.demo(filters)
            }
            Err(err) => {
                tracing::warn!(
                    phase = %SearchPhase::FailedFallback,
                    error = %err,
                    "live search failed; serving demo data"
                );
                self.demo(filters)
            }
        }
    }

    /// Runs [`search_with_fallback`](Self::search_with_fallback) and returns
    /// `None` if a newer call started before this one finished.
    pub async fn search_latest(&self, filters: &SearchFilters) -> Option<Vec<SearchResult>> {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let results = self.search_with_fallback(filters).await;
        let newest = self.latest_ticket.load(Ordering::SeqCst);
        if newest == ticket {
            Some(results)
        } else {
            tracing::debug!(ticket, newest, "discarding superseded search results");
            None
        }
    }

    async fn run(&self, filters: &SearchFilters) -> Result<Outcome, SearchError> {
        tracing::debug!(
            phase = %SearchPhase::Idle,
            query = %filters.query,
            category = %filters.category,
            distance_km = filters.distance_km,
            "search requested"
        );

        if !filters.distance_km.is_finite() || filters.distance_km <= 0.0 {
            tracing::warn!(
                distance_km = filters.distance_km,
                "distance must be a positive number of kilometres"
            );
            return Ok(Outcome::InvalidDistance);
        }

        let selection = self.categories.selection(&filters.category);
        if selection == CategorySelection::Unmapped {
            tracing::info!(category = %filters.category, "no tag mapping for category");
            return Ok(Outcome::NoMapping);
        }

        let strategy = SearchStrategy::select(filters, &self.stations, &self.config);
        tracing::debug!(phase = %SearchPhase::StrategySelected, strategy = ?strategy, "strategy selected");
        if strategy.short_circuits() {
            return Ok(Outcome::ShortCircuit);
        }

        let picked = strategy.pick_stations(&self.stations);
        self.run_batches(&picked, filters, selection)
            .await
            .map(Outcome::Live)
    }

    async fn run_batches(
        &self,
        picked: &[Station],
        filters: &SearchFilters,
        selection: CategorySelection<'_>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let batch_size = self.config.batch_size.max(1);
        let batches = picked.len().div_ceil(batch_size);
        tracing::debug!(
            phase = %SearchPhase::Batching,
            stations = picked.len(),
            batches,
            "dispatching batches"
        );

        let mut collected = Vec::new();
        let mut failed = 0_usize;
        let mut last_err = None;

        for (index, batch) in picked.chunks(batch_size).enumerate() {
            if index > 0 && !self.config.inter_batch_delay.is_zero() {
                tokio::time::sleep(self.config.inter_batch_delay).await;
            }

            let Some(query) = build_query(
                batch,
                filters.distance_km,
                filters,
                selection,
                self.client.timeout_secs(),
            ) else {
                continue;
            };

            match self.client.execute(&query).await {
                Ok(response) => {
                    let results = normalize_elements(
                        &response.elements,
                        filters,
                        &self.stations,
                        &self.categories,
                    );
                    tracing::debug!(
                        batch = index + 1,
                        elements = response.elements.len(),
                        results = results.len(),
                        "batch complete"
                    );
                    collected.extend(results);
                }
                Err(err) => {
                    tracing::warn!(
                        batch = index + 1,
                        batches,
                        error = %err,
                        "batch failed; skipping"
                    );
                    failed += 1;
                    last_err = Some(err);
                }
            }
        }

        if let Some(last) = last_err {
            if failed == batches {
                return Err(SearchError::AllBatchesFailed { batches, last });
            }
        }

        tracing::debug!(phase = %SearchPhase::Merging, candidates = collected.len(), "merging batches");
        Ok(merge_results(collected, self.config.max_results))
    }

    fn demo(&self, filters: &SearchFilters) -> Vec<SearchResult> {
        demo_results(
            &self.config.demo_venues,
            &self.stations,
            &self.categories,
            filters,
            self.config.max_results,
        )
    }
}
