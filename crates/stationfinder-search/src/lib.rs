//! Venue search around railway stations.
//!
//! [`StationFinder`] picks a [`SearchStrategy`] from the filters, queries
//! Overpass in station batches, merges the batches into one distance-ordered
//! list, and falls back to offline demo venues when the live pipeline yields
//! nothing.

pub mod config;
pub mod demo;
pub mod error;
pub mod finder;
pub mod merge;
pub mod strategy;

pub use config::SearchConfig;
pub use demo::{default_demo_venues, demo_results, DemoVenue};
pub use error::SearchError;
pub use finder::StationFinder;
pub use merge::merge_results;
pub use strategy::{SearchPhase, SearchStrategy};
