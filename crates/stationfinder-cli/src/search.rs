//! `search` command handler.

use stationfinder_core::{AppConfig, CategoryMap, SearchFilters, SearchResult, Station};
use stationfinder_overpass::OverpassClient;
use stationfinder_search::{SearchConfig, StationFinder};

const NAME_WIDTH: usize = 32;

pub(crate) struct SearchArgs {
    pub query: String,
    pub distance: f64,
    pub category: String,
    pub station: Option<String>,
    pub json: bool,
}

/// Run one search and print the results.
///
/// Remote failures never surface here; the finder falls back to demo data.
///
/// # Errors
///
/// Returns an error if `distance` is not a positive number, the Overpass
/// client cannot be built, or JSON serialization fails.
pub(crate) async fn run_search(
    config: &AppConfig,
    stations: Vec<Station>,
    args: SearchArgs,
) -> anyhow::Result<()> {
    if !args.distance.is_finite() || args.distance <= 0.0 {
        anyhow::bail!("--distance must be a positive number of kilometres");
    }

    let client = OverpassClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build Overpass client: {e}"))?;
    let finder = StationFinder::new(
        client,
        stations,
        CategoryMap::default(),
        SearchConfig::from_app_config(config),
    );

    let mut filters = SearchFilters::new(args.query, args.distance, args.category);
    filters.station = args.station;

    let results = finder.search_with_fallback(&filters).await;
    tracing::info!(results = results.len(), "search finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No venues found.");
    } else {
        println!("{}", format_header());
        for (index, result) in results.iter().enumerate() {
            println!("{}", format_row(index + 1, result));
        }
    }

    Ok(())
}

pub(crate) fn format_header() -> String {
    format!(
        "{:>3}  {:<NAME_WIDTH$}  {:<14}  {:>7}  STATION",
        "#", "NAME", "CATEGORY", "KM"
    )
}

pub(crate) fn format_row(position: usize, result: &SearchResult) -> String {
    format!(
        "{position:>3}  {:<NAME_WIDTH$}  {:<14}  {:>7.2}  {} ({})",
        truncate(&result.name, NAME_WIDTH),
        result.category,
        result.distance_km,
        result.station.name,
        result.station.code,
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
