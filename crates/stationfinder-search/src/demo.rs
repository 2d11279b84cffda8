//! Offline demo venues.
//!
//! Served when the live pipeline yields nothing, so the presentation layer
//! always has something to show. Each venue is anchored to a station code and
//! placed at a fixed offset from it; results go through the same nearest
//! station, distance, category, and text checks as live data.

use std::collections::BTreeMap;

use stationfinder_core::{nearest_station, CategoryMap, SearchFilters, SearchResult, Station};

use crate::merge::merge_results;

/// A venue placed at a fixed offset from an anchor station.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoVenue {
    pub name: String,
    /// Raw venue-type tag, e.g. `fast_food`.
    pub kind: String,
    pub address: String,
    /// Code of the station the offsets are relative to.
    pub anchor: String,
    pub lat_offset: f64,
    pub lng_offset: f64,
    pub rating: Option<f64>,
    pub opening_hours: Option<String>,
}

impl DemoVenue {
    #[must_use]
    pub fn new(
        name: &str,
        kind: &str,
        address: &str,
        anchor: &str,
        lat_offset: f64,
        lng_offset: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            address: address.to_string(),
            anchor: anchor.to_string(),
            lat_offset,
            lng_offset,
            rating: None,
            opening_hours: None,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_opening_hours(mut self, hours: &str) -> Self {
        self.opening_hours = Some(hours.to_string());
        self
    }

    fn matches_text(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.kind.to_lowercase().contains(&needle)
            || self.kind.replace('_', " ").to_lowercase().contains(&needle)
    }
}

/// Demo venues around Amsterdam, Rotterdam, Utrecht, Den Haag, and Eindhoven
/// Centraal.
#[must_use]
pub fn default_demo_venues() -> Vec<DemoVenue> {
    vec![
        DemoVenue::new("Albert Heijn", "supermarket", "Stationsplein 1", "ASD", 0.0010, 0.0010)
            .with_rating(4.2),
        DemoVenue::new("McDonald's", "fast_food", "Stationsplein 5", "ASD", -0.0006, -0.0008)
            .with_rating(3.8)
            .with_opening_hours("24/7"),
        DemoVenue::new("Fitness First", "fitness_centre", "Damrak 10", "ASD", -0.0030, -0.0053)
            .with_rating(4.5),
        DemoVenue::new(
            "Pathé Cinema",
            "cinema",
            "Nieuwezijds Voorburgwal 120",
            "ASD",
            -0.0071,
            -0.0083,
        )
        .with_rating(4.3),
        DemoVenue::new("Albert Heijn to go", "supermarket", "Stationsplein 2", "RTD", 0.0004, 0.0012)
            .with_rating(4.0),
        DemoVenue::new("Burger King", "fast_food", "Stationshal", "RTD", -0.0005, 0.0007)
            .with_rating(3.6),
        DemoVenue::new("Kruidvat", "chemist", "Hoog Catharijne", "UT", 0.0008, -0.0015)
            .with_rating(3.9),
        DemoVenue::new("Pathé Utrecht", "cinema", "Catharijnesingel 56", "UT", -0.0012, 0.0021)
            .with_rating(4.4),
        DemoVenue::new("Etos", "chemist", "Koningin Julianaplein 10", "GVC", 0.0006, 0.0009)
            .with_rating(4.1),
        DemoVenue::new("Jumbo", "supermarket", "Stationsplein 17", "EHV", 0.0011, -0.0006)
            .with_rating(4.0),
        DemoVenue::new("Basic-Fit", "fitness_centre", "Stationsweg 2", "EHV", -0.0018, 0.0013)
            .with_rating(4.2),
    ]
}

/// Builds results from `venues`, keeping those that pass the same distance,
/// category, and text checks as live data.
///
/// Venues whose anchor station is not in `stations` are skipped. When the
/// filters name a known station, only venues whose nearest station is that
/// station are kept. A NaN or negative `distance_km` keeps nothing.
#[must_use]
pub fn demo_results(
    venues: &[DemoVenue],
    stations: &[Station],
    categories: &CategoryMap,
    filters: &SearchFilters,
    max_results: usize,
) -> Vec<SearchResult> {
    let wanted_category = filters.category.trim().to_lowercase();
    let text = filters.text();
    let scoped_station = filters
        .station_code()
        .and_then(|code| stations.iter().find(|s| s.code.eq_ignore_ascii_case(code)))
        .map(|s| s.code.as_str());

    let results = venues
        .iter()
        .enumerate()
        .filter_map(|(index, venue)| {
            let Some(anchor) = stations
                .iter()
                .find(|s| s.code.eq_ignore_ascii_case(&venue.anchor))
            else {
                tracing::debug!(anchor = %venue.anchor, "demo venue anchor not in station table");
                return None;
            };

            let lat = anchor.lat + venue.lat_offset;
            let lng = anchor.lng + venue.lng_offset;
            let (station, distance_km) = nearest_station(stations, lat, lng)?;
            let within_range = distance_km <= filters.distance_km;
            if !within_range {
                return None;
            }
            if scoped_station.is_some_and(|code| station.code != code) {
                return None;
            }

            let category = categories.category_for_tag(&venue.kind);
            if !filters.is_all_categories() && category != wanted_category {
                return None;
            }
            if text.is_some_and(|t| !venue.matches_text(t)) {
                return None;
            }

            Some(SearchResult {
                id: format!("demo/{index}"),
                name: venue.name.clone(),
                kind: venue.kind.clone(),
                category: category.to_string(),
                address: venue.address.clone(),
                lat,
                lng,
                distance_km,
                station: station.clone(),
                rating: venue.rating,
                opening_hours: venue.opening_hours.clone(),
                phone: None,
                website: None,
                tags: BTreeMap::new(),
            })
        })
        .collect();

    merge_results(results, max_results)
}
