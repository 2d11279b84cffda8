//! Search request and result types shared by the pipeline and its callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::ALL_CATEGORIES;
use crate::stations::Station;

/// Filters for one search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Free text matched against venue names.
    pub query: String,
    /// Maximum distance to the nearest station, in kilometres.
    pub distance_km: f64,
    /// Category label, or `"all"`.
    pub category: String,
    /// Station code to search around instead of a tier-based subset.
    #[serde(default)]
    pub station: Option<String>,
}

impl SearchFilters {
    #[must_use]
    pub fn new(query: impl Into<String>, distance_km: f64, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            distance_km,
            category: category.into(),
            station: None,
        }
    }

    #[must_use]
    pub fn with_station(mut self, code: impl Into<String>) -> Self {
        self.station = Some(code.into());
        self
    }

    /// The trimmed free-text query, or `None` when blank.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    #[must_use]
    pub fn is_all_categories(&self) -> bool {
        let category = self.category.trim();
        category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES)
    }

    /// The requested station code, trimmed, when one was given.
    #[must_use]
    pub fn station_code(&self) -> Option<&str> {
        self.station
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self::new("", 2.0, ALL_CATEGORIES)
    }
}

/// A venue near a station, ready for display.
///
/// `station` is the nearest station to the venue, which is not necessarily
/// the station whose batch returned it. `distance_km` is measured to that
/// station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    /// Raw venue-type tag, e.g. `fast_food`.
    pub kind: String,
    pub category: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub station: Station,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl SearchResult {
    /// Coordinate pair rounded to six decimals, used to collapse duplicates.
    #[must_use]
    pub fn coordinate_key(&self) -> String {
        coordinate_key(self.lat, self.lng)
    }
}

/// Formats a coordinate pair rounded to six decimals.
#[must_use]
pub fn coordinate_key(lat: f64, lng: f64) -> String {
    format!("{lat:.6},{lng:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_has_no_text() {
        assert_eq!(SearchFilters::new("   ", 1.0, "all").text(), None);
        assert_eq!(SearchFilters::new(" ah ", 1.0, "all").text(), Some("ah"));
    }

    #[test]
    fn empty_category_counts_as_all() {
        assert!(SearchFilters::new("", 1.0, "").is_all_categories());
        assert!(SearchFilters::new("", 1.0, "All").is_all_categories());
        assert!(!SearchFilters::new("", 1.0, "gym").is_all_categories());
    }

    #[test]
    fn station_code_ignores_blank_values() {
        let filters = SearchFilters::default().with_station("  ");
        assert_eq!(filters.station_code(), None);
        let filters = SearchFilters::default().with_station(" UT ");
        assert_eq!(filters.station_code(), Some("UT"));
    }

    #[test]
    fn coordinate_key_rounds_to_six_decimals() {
        assert_eq!(coordinate_key(52.379_100_04, 4.900_3), "52.379100,4.900300");
        assert_eq!(
            coordinate_key(52.379_100_04, 4.900_3),
            coordinate_key(52.379_099_996, 4.900_300_001)
        );
    }

    #[test]
    fn filters_deserialize_with_camel_case_keys() {
        let filters: SearchFilters = serde_json::from_value(serde_json::json!({
            "query": "mcdonald",
            "distanceKm": 1.5,
            "category": "restaurant"
        }))
        .unwrap();
        assert_eq!(filters.distance_km, 1.5);
        assert!(filters.station.is_none());
    }
}
