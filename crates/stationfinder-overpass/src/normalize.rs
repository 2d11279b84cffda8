//! Normalization of Overpass elements into [`SearchResult`]s.
//!
//! Every element is re-anchored to its nearest station over the full table,
//! which may differ from the station whose `around` statement matched it.

use std::collections::{BTreeMap, HashSet};

use stationfinder_core::{nearest_station, CategoryMap, SearchFilters, SearchResult, Station};

use crate::query::TYPE_KEYS;
use crate::types::OverpassElement;

/// Address shown when an element carries no usable `addr:*` tags.
pub const ADDRESS_UNAVAILABLE: &str = "Address not available";

/// Raw kind used when an element carries none of the venue-type keys.
pub const UNKNOWN_KIND: &str = "unknown";

const OPENING_HOURS_MAX_CHARS: usize = 100;

/// Converts raw elements into display-ready results.
///
/// Elements without usable coordinates, not within `filters.distance_km`
/// of any station, or (for text queries) without any name are dropped.
/// Duplicate elements within `elements` collapse to the first occurrence.
#[must_use]
pub fn normalize_elements(
    elements: &[OverpassElement],
    filters: &SearchFilters,
    stations: &[Station],
    categories: &CategoryMap,
) -> Vec<SearchResult> {
    let has_text = filters.text().is_some();
    let mut seen = HashSet::new();

    elements
        .iter()
        .filter_map(|element| {
            let Some((lat, lng)) = element.coordinates() else {
                tracing::debug!(
                    element = %element.qualified_id(),
                    "skipping Overpass element without coordinates"
                );
                return None;
            };

            if !seen.insert(fingerprint(element, lat, lng)) {
                return None;
            }

            let kind = raw_kind(&element.tags);
            let name = match display_name(&element.tags) {
                Some(name) => name.to_string(),
                None if has_text => return None,
                None => format!("Unnamed {}", kind.replace('_', " ")),
            };

            let (station, distance_km) = nearest_station(stations, lat, lng)?;
            let within_range = distance_km <= filters.distance_km;
            if !within_range {
                return None;
            }

            Some(SearchResult {
                id: element.qualified_id(),
                name,
                category: categories.category_for_tag(kind).to_string(),
                kind: kind.to_string(),
                address: format_address(&element.tags),
                lat,
                lng,
                distance_km,
                station: station.clone(),
                rating: rating(&element.tags),
                opening_hours: first_tag(&element.tags, &["opening_hours"])
                    .map(truncate_opening_hours),
                phone: first_tag(&element.tags, &["phone", "contact:phone"]).map(str::to_string),
                website: first_tag(&element.tags, &["website", "contact:website", "url"])
                    .map(str::to_string),
                tags: element.tags.clone(),
            })
        })
        .collect()
}

fn fingerprint(element: &OverpassElement, lat: f64, lng: f64) -> String {
    format!("{}@{lat:.6},{lng:.6}", element.qualified_id())
}

/// First non-blank value among `keys`, in key order.
fn first_tag<'a>(tags: &'a BTreeMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| tags.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

fn display_name(tags: &BTreeMap<String, String>) -> Option<&str> {
    first_tag(tags, &["name", "name:nl", "brand", "operator"])
}

fn raw_kind(tags: &BTreeMap<String, String>) -> &str {
    first_tag(tags, TYPE_KEYS).unwrap_or(UNKNOWN_KIND)
}

fn format_address(tags: &BTreeMap<String, String>) -> String {
    let street_line = match (
        first_tag(tags, &["addr:housenumber"]),
        first_tag(tags, &["addr:street"]),
    ) {
        (Some(number), Some(street)) => Some(format!("{number} {street}")),
        (None, Some(street)) => Some(street.to_string()),
        (Some(number), None) => Some(number.to_string()),
        (None, None) => None,
    };

    let parts: Vec<String> = street_line
        .into_iter()
        .chain(first_tag(tags, &["addr:city", "addr:place"]).map(str::to_string))
        .chain(first_tag(tags, &["addr:postcode"]).map(str::to_string))
        .collect();

    if parts.is_empty() {
        ADDRESS_UNAVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}

fn rating(tags: &BTreeMap<String, String>) -> Option<f64> {
    first_tag(tags, &["rating", "stars"])
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn truncate_opening_hours(raw: &str) -> String {
    if raw.chars().count() <= OPENING_HOURS_MAX_CHARS {
        return raw.to_string();
    }
    let mut truncated: String = raw.chars().take(OPENING_HOURS_MAX_CHARS).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
