//! Overpass API access for the station finder.
//!
//! Builds Overpass QL queries around station coordinates, delivers them to an
//! ordered list of interpreter endpoints with failover, and normalizes the
//! returned elements into [`SearchResult`](stationfinder_core::SearchResult)s.

pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::{Endpoint, OverpassClient};
pub use error::OverpassError;
pub use normalize::normalize_elements;
pub use query::build_query;
pub use types::{OverpassCenter, OverpassElement, OverpassResponse};
