use std::collections::BTreeMap;

use stationfinder_core::Tier;

use super::*;
use crate::types::OverpassCenter;

fn station(code: &str, lat: f64, lng: f64) -> Station {
    Station {
        id: code.to_lowercase(),
        name: format!("{code} Centraal"),
        code: code.to_string(),
        lat,
        lng,
        city: "Test".to_string(),
        tier: Tier::Intercity,
    }
}

fn stations() -> Vec<Station> {
    vec![
        station("ASD", 52.3791, 4.9003),
        station("UT", 52.0893, 5.1101),
    ]
}

fn node(id: i64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> OverpassElement {
    OverpassElement {
        element_type: "node".to_string(),
        id,
        lat: Some(lat),
        lon: Some(lon),
        center: None,
        tags: tags
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    }
}

fn run(elements: &[OverpassElement], filters: &SearchFilters) -> Vec<SearchResult> {
    normalize_elements(elements, filters, &stations(), &CategoryMap::default())
}

#[test]
fn maps_core_fields() {
    let elements = vec![node(
        42,
        52.3800,
        4.9010,
        &[
            ("name", "Café Centraal"),
            ("amenity", "cafe"),
            ("addr:housenumber", "1"),
            ("addr:street", "Stationsplein"),
            ("addr:city", "Amsterdam"),
            ("addr:postcode", "1012 AB"),
        ],
    )];
    let results = run(&elements, &SearchFilters::default());

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.id, "node/42");
    assert_eq!(result.name, "Café Centraal");
    assert_eq!(result.kind, "cafe");
    assert_eq!(result.category, "restaurant");
    assert_eq!(result.address, "1 Stationsplein, Amsterdam, 1012 AB");
    assert_eq!(result.station.code, "ASD");
    assert!(result.distance_km < 0.2);
    assert!(
        (result.distance_km - result.station.distance_to(result.lat, result.lng)).abs() < 1e-12
    );
    assert_eq!(result.tags.get("amenity").map(String::as_str), Some("cafe"));
}

#[test]
fn element_beyond_max_distance_is_excluded() {
    // ~2.5 km due north of ASD; UT is ~35 km away.
    let elements = vec![node(1, 52.4016, 4.9003, &[("name", "Far"), ("shop", "bakery")])];
    assert!(run(&elements, &SearchFilters::new("", 2.0, "all")).is_empty());
    assert_eq!(run(&elements, &SearchFilters::new("", 3.0, "all")).len(), 1);
}

#[test]
fn nan_or_negative_max_distance_excludes_everything() {
    let elements = vec![node(1, 52.3791, 4.9003, &[("name", "At ASD"), ("shop", "bakery")])];
    assert!(run(&elements, &SearchFilters::new("", f64::NAN, "all")).is_empty());
    assert!(run(&elements, &SearchFilters::new("", -1.0, "all")).is_empty());
}

#[test]
fn nearest_station_is_chosen_from_full_table() {
    let elements = vec![node(1, 52.0900, 5.1110, &[("name", "Near UT"), ("shop", "books")])];
    let results = run(&elements, &SearchFilters::default());
    assert_eq!(results[0].station.code, "UT");
    assert_eq!(results[0].category, "shopping");
}

#[test]
fn elements_without_coordinates_are_skipped() {
    let mut missing = node(1, 0.0, 0.0, &[("name", "Ghost")]);
    missing.lat = None;
    let non_finite = node(2, f64::NAN, 4.9, &[("name", "NaN")]);
    assert!(run(&[missing, non_finite], &SearchFilters::default()).is_empty());
}

#[test]
fn way_uses_center_coordinates() {
    let way = OverpassElement {
        element_type: "way".to_string(),
        id: 7,
        lat: None,
        lon: None,
        center: Some(OverpassCenter {
            lat: 52.3795,
            lon: 4.9000,
        }),
        tags: BTreeMap::from([
            ("name".to_string(), "Station Garage".to_string()),
            ("amenity".to_string(), "fuel".to_string()),
        ]),
    };
    let results = run(&[way], &SearchFilters::default());
    assert_eq!(results[0].id, "way/7");
    assert_eq!(results[0].lat, 52.3795);
    assert_eq!(results[0].category, "fuel");
}

#[test]
fn duplicate_elements_collapse() {
    let element = node(5, 52.3800, 4.9010, &[("name", "Twice"), ("amenity", "bar")]);
    let results = run(&[element.clone(), element], &SearchFilters::default());
    assert_eq!(results.len(), 1);
}

#[test]
fn same_id_at_different_coordinates_is_kept() {
    let a = node(5, 52.3800, 4.9010, &[("name", "A")]);
    let b = node(5, 52.3810, 4.9020, &[("name", "B")]);
    assert_eq!(run(&[a, b], &SearchFilters::default()).len(), 2);
}

#[test]
fn name_priority_falls_back_through_keys() {
    let elements = vec![
        node(1, 52.3800, 4.9010, &[("name:nl", "Dutch"), ("brand", "Brand")]),
        node(2, 52.3801, 4.9011, &[("brand", "Brand"), ("operator", "Op")]),
        node(3, 52.3802, 4.9012, &[("operator", "Op")]),
        node(4, 52.3803, 4.9013, &[("amenity", "fast_food")]),
    ];
    let names: Vec<String> = run(&elements, &SearchFilters::default())
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Dutch", "Brand", "Op", "Unnamed fast food"]);
}

#[test]
fn unnamed_elements_are_dropped_for_text_queries() {
    let elements = vec![
        node(1, 52.3800, 4.9010, &[("amenity", "fast_food")]),
        node(2, 52.3801, 4.9011, &[("name", "McDonald's"), ("amenity", "fast_food")]),
    ];
    let results = run(&elements, &SearchFilters::new("mcdonald", 2.0, "all"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "McDonald's");
}

#[test]
fn missing_kind_is_unknown_and_category_other() {
    let results = run(
        &[node(1, 52.3800, 4.9010, &[("name", "Mystery")])],
        &SearchFilters::default(),
    );
    assert_eq!(results[0].kind, UNKNOWN_KIND);
    assert_eq!(results[0].category, "other");
}

#[test]
fn address_variants() {
    let tags = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    };
    assert_eq!(format_address(&tags(&[])), ADDRESS_UNAVAILABLE);
    assert_eq!(
        format_address(&tags(&[("addr:street", "Damrak"), ("addr:place", "Centrum")])),
        "Damrak, Centrum"
    );
    assert_eq!(
        format_address(&tags(&[("addr:postcode", "3511 CE")])),
        "3511 CE"
    );
}

#[test]
fn contact_variants_and_rating() {
    let elements = vec![node(
        1,
        52.3800,
        4.9010,
        &[
            ("name", "Hotel"),
            ("tourism", "hotel"),
            ("contact:phone", "+31 20 000 0000"),
            ("contact:website", "https://hotel.example"),
            ("stars", "4"),
        ],
    )];
    let result = &run(&elements, &SearchFilters::default())[0];
    assert_eq!(result.phone.as_deref(), Some("+31 20 000 0000"));
    assert_eq!(result.website.as_deref(), Some("https://hotel.example"));
    assert_eq!(result.rating, Some(4.0));
    assert_eq!(result.category, "hotel");
}

#[test]
fn unparsable_rating_is_omitted() {
    let elements = vec![node(1, 52.3800, 4.9010, &[("name", "X"), ("rating", "great")])];
    assert_eq!(run(&elements, &SearchFilters::default())[0].rating, None);
}

#[test]
fn long_opening_hours_are_truncated() {
    let long = "Mo-Fr 08:00-18:00; ".repeat(10);
    let elements = vec![node(1, 52.3800, 4.9010, &[("name", "X"), ("opening_hours", long.as_str())])];
    let hours = run(&elements, &SearchFilters::default())[0]
        .opening_hours
        .clone()
        .unwrap();
    assert_eq!(hours.chars().count(), 103);
    assert!(hours.ends_with("..."));

    assert_eq!(truncate_opening_hours("24/7"), "24/7");
}
