use std::collections::HashSet;

use stationfinder_core::SearchResult;

/// Collapses results sharing a rounded coordinate pair, sorts ascending by
/// distance, and keeps the closest `max_results`.
///
/// The first occurrence of a coordinate wins. The sort is stable, so equal
/// distances keep batch order.
#[must_use]
pub fn merge_results(results: Vec<SearchResult>, max_results: usize) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    let mut merged: Vec<SearchResult> = results
        .into_iter()
        .filter(|result| seen.insert(result.coordinate_key()))
        .collect();
    merged.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    merged.truncate(max_results);
    merged
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use stationfinder_core::{Station, Tier};

    use super::*;

    fn result(id: &str, lat: f64, lng: f64, distance_km: f64) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            name: id.to_string(),
            kind: "cafe".to_string(),
            category: "restaurant".to_string(),
            address: "Address not available".to_string(),
            lat,
            lng,
            distance_km,
            station: Station {
                id: "asd".to_string(),
                name: "Amsterdam Centraal".to_string(),
                code: "ASD".to_string(),
                lat: 52.3791,
                lng: 4.9003,
                city: "Amsterdam".to_string(),
                tier: Tier::Intercity,
            },
            rating: None,
            opening_hours: None,
            phone: None,
            website: None,
            tags: BTreeMap::new(),
        }
    }

    #[test]
    fn sorts_ascending_by_distance() {
        let merged = merge_results(
            vec![
                result("far", 52.39, 4.90, 1.2),
                result("near", 52.38, 4.90, 0.1),
                result("mid", 52.37, 4.90, 0.9),
            ],
            50,
        );
        let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
    }

    #[test]
    fn duplicate_coordinates_keep_first() {
        let merged = merge_results(
            vec![
                result("first", 52.380_000_01, 4.901, 0.5),
                result("second", 52.38, 4.901, 0.5),
            ],
            50,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "first");
    }

    #[test]
    fn truncates_to_limit() {
        let results = (0..60_i32)
            .map(|i| {
                let offset = f64::from(i) * 0.0001;
                result(&format!("r{i}"), 52.38 + offset, 4.90, 1.0 - offset)
            })
            .collect();
        let merged = merge_results(results, 50);
        assert_eq!(merged.len(), 50);
        assert!(merged
            .windows(2)
            .all(|pair| pair[0].distance_km <= pair[1].distance_km));
        assert_eq!(merged[0].id, "r59");
    }
}
