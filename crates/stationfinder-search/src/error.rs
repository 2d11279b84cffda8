use stationfinder_overpass::OverpassError;
use thiserror::Error;

/// Errors surfaced by [`StationFinder::search`](crate::StationFinder::search).
#[derive(Debug, Error)]
pub enum SearchError {
    /// Every dispatched batch failed on every endpoint.
    #[error("all {batches} search batch(es) failed; last error: {last}")]
    AllBatchesFailed {
        batches: usize,
        #[source]
        last: OverpassError,
    },
}
