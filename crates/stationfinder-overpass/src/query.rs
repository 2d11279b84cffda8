//! Overpass QL query construction.
//!
//! One query covers a whole batch of stations: every station contributes an
//! `around` statement (one per name key when a text filter is active), and
//! the statements are unioned and emitted with `out center` so ways and
//! relations come back with a single representative coordinate.

use std::fmt::Write as _;

use stationfinder_core::{CategorySelection, SearchFilters, Station};

/// OSM keys whose values classify a venue.
pub const TYPE_KEYS: &[&str] = &["amenity", "shop", "leisure", "tourism", "healthcare"];

/// OSM keys matched by a free-text query.
pub const NAME_KEYS: &[&str] = &["name", "name:nl", "brand"];

/// Build the Overpass QL query for one batch of stations.
///
/// Returns `None` when there is nothing to ask for: an empty batch, or a
/// category with no tag mapping.
#[must_use]
pub fn build_query(
    stations: &[Station],
    radius_km: f64,
    filters: &SearchFilters,
    selection: CategorySelection<'_>,
    timeout_secs: u64,
) -> Option<String> {
    if stations.is_empty() {
        return None;
    }
    let type_filter = type_filter(selection)?;
    let name_filters: Vec<Option<String>> = match filters.text() {
        Some(text) => {
            let pattern = escape_literal(&escape_regex(&sanitize_text(text)));
            NAME_KEYS
                .iter()
                .map(|key| Some(format!("[\"{key}\"~\"{pattern}\",i]")))
                .collect()
        }
        None => vec![None],
    };
    let radius_m = radius_metres(radius_km);

    let mut query = format!("[out:json][timeout:{timeout_secs}];\n(\n");
    for station in stations {
        for name_filter in &name_filters {
            let _ = writeln!(
                query,
                "  nwr{type_filter}{}(around:{radius_m},{:.6},{:.6});",
                name_filter.as_deref().unwrap_or(""),
                station.lat,
                station.lng,
            );
        }
    }
    query.push_str(");\nout center;\n");
    Some(query)
}

/// Key-regex filter restricting elements to venue-type tags.
fn type_filter(selection: CategorySelection<'_>) -> Option<String> {
    let keys = TYPE_KEYS.join("|");
    match selection {
        CategorySelection::All => Some(format!("[~\"^({keys})$\"~\".\"]")),
        CategorySelection::Tags(tags) => {
            let values = tags
                .iter()
                .map(|t| escape_literal(&escape_regex(t)))
                .collect::<Vec<_>>()
                .join("|");
            Some(format!("[~\"^({keys})$\"~\"^({values})$\"]"))
        }
        CategorySelection::Unmapped => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn radius_metres(radius_km: f64) -> u64 {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return 0;
    }
    (radius_km * 1000.0).round() as u64
}

/// Trim and drop control characters, which cannot appear in a QL string.
fn sanitize_text(text: &str) -> String {
    text.trim().chars().filter(|c| !c.is_control()).collect()
}

/// Escape POSIX extended-regex metacharacters so `text` matches literally.
pub(crate) fn escape_regex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '.' | '[' | ']' | '(' | ')' | '{' | '}' | '*' | '+' | '?' | '|' | '^' | '$' | '\\'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a value for a double-quoted Overpass QL string literal.
pub(crate) fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
