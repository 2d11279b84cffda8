use std::collections::BTreeMap;

use stationfinder_core::{default_stations, SearchResult};

use super::*;

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["stationfinder", "search"]).expect("expected valid cli args");

    match cli.command {
        Some(Commands::Search {
            query,
            distance,
            category,
            station,
            json,
        }) => {
            assert_eq!(query, "");
            assert!((distance - 2.0).abs() < f64::EPSILON);
            assert_eq!(category, "all");
            assert!(station.is_none());
            assert!(!json);
        }
        other => panic!("expected search command, got {other:?}"),
    }
}

#[test]
fn parses_search_with_all_flags() {
    let cli = Cli::try_parse_from([
        "stationfinder",
        "search",
        "--query",
        "albert heijn",
        "--distance",
        "0.5",
        "--category",
        "supermarket",
        "--station",
        "UT",
        "--json",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref query,
            ref category,
            station: Some(ref code),
            json: true,
            ..
        }) if query == "albert heijn" && category == "supermarket" && code == "UT"
    ));
}

#[test]
fn rejects_non_numeric_distance() {
    assert!(Cli::try_parse_from(["stationfinder", "search", "--distance", "far"]).is_err());
}

#[test]
fn parses_stations_tier_filter() {
    let cli = Cli::try_parse_from(["stationfinder", "stations", "--tier", "regional"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Stations {
            tier: Some(Tier::Regional),
            json: false
        })
    ));
}

#[test]
fn rejects_unknown_tier() {
    assert!(Cli::try_parse_from(["stationfinder", "stations", "--tier", "express"]).is_err());
}

#[test]
fn parses_categories_command() {
    let cli =
        Cli::try_parse_from(["stationfinder", "categories"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Categories)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["stationfinder"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn tier_filter_keeps_only_matching_stations() {
    let stations = default_stations();
    let intercity = catalog::filter_by_tier(&stations, Some(Tier::Intercity));
    assert!(!intercity.is_empty());
    assert!(intercity.iter().all(|s| s.tier == Tier::Intercity));
    assert_eq!(catalog::filter_by_tier(&stations, None).len(), stations.len());
}

#[test]
fn result_row_truncates_long_names() {
    let station = default_stations().remove(0);
    let result = SearchResult {
        id: "node/1".to_string(),
        name: "A".repeat(40),
        kind: "cafe".to_string(),
        category: "restaurant".to_string(),
        address: "Address not available".to_string(),
        lat: station.lat,
        lng: station.lng,
        distance_km: 0.123,
        station,
        rating: None,
        opening_hours: None,
        phone: None,
        website: None,
        tags: BTreeMap::new(),
    };

    let row = search::format_row(1, &result);
    assert!(row.contains(&format!("{}\u{2026}", "A".repeat(31))));
    assert!(!row.contains(&"A".repeat(32)));
    assert!(row.contains("0.12"));
    assert!(row.ends_with("Amsterdam Centraal (ASD)"));
    assert!(search::format_header().contains("STATION"));
}
