//! Overpass JSON response types.
//!
//! The interpreter is treated as untrusted: every field except `id` may be
//! missing, and an element that fails to decode is dropped on its own rather
//! than failing the whole response.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Top-level `[out:json]` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default, deserialize_with = "lenient_elements")]
    pub elements: Vec<OverpassElement>,
    /// Set by the interpreter on runtime errors such as query timeouts.
    #[serde(default)]
    pub remark: Option<String>,
}

/// A node, way, or relation.
///
/// Nodes carry `lat`/`lon`; ways and relations requested with `out center`
/// carry a `center` instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type", default)]
    pub element_type: String,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// Usable `(lat, lon)`: direct point first, then shape center.
    ///
    /// Non-finite values count as missing.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let point = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.map(|c| (c.lat, c.lon)),
        };
        point.filter(|(lat, lon)| lat.is_finite() && lon.is_finite())
    }

    /// Stable identifier, e.g. `node/42`.
    #[must_use]
    pub fn qualified_id(&self) -> String {
        let kind = if self.element_type.is_empty() {
            "element"
        } else {
            self.element_type.as_str()
        };
        format!("{kind}/{}", self.id)
    }
}

fn lenient_elements<'de, D>(deserializer: D) -> Result<Vec<OverpassElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            serde_json::from_value::<OverpassElement>(value)
                .map_err(|e| {
                    tracing::debug!(index, error = %e, "skipping malformed Overpass element");
                })
                .ok()
        })
        .collect())
}
