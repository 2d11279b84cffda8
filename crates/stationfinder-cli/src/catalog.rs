//! Read-only `stations` and `categories` listings.

use stationfinder_core::{CategoryMap, Station, Tier};

/// Print the station table, optionally restricted to one tier.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_stations(stations: &[Station], tier: Option<Tier>, json: bool) -> anyhow::Result<()> {
    let selected = filter_by_tier(stations, tier);

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!(
        "{:<6}  {:<28}  {:<16}  {:<10}  {:>9}  {:>9}",
        "CODE", "NAME", "CITY", "TIER", "LAT", "LNG"
    );
    for station in &selected {
        println!(
            "{:<6}  {:<28}  {:<16}  {:<10}  {:>9.4}  {:>9.4}",
            station.code,
            station.name,
            station.city,
            station.tier.to_string(),
            station.lat,
            station.lng
        );
    }
    println!("{} station(s)", selected.len());
    Ok(())
}

pub(crate) fn run_categories() {
    let map = CategoryMap::default();
    for label in map.labels() {
        let tags = map.tags_for(label).unwrap_or_default().join(", ");
        println!("{label:<14}  {tags}");
    }
}

pub(crate) fn filter_by_tier(stations: &[Station], tier: Option<Tier>) -> Vec<&Station> {
    stations
        .iter()
        .filter(|s| tier.is_none_or(|t| s.tier == t))
        .collect()
}
