//! The Dutch station table.
//!
//! The embedded table covers the intercity network plus the larger regional
//! stops. A YAML file with the same shape can replace it at startup via
//! [`load_stations`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Service level of a station. Ordering follows query priority:
/// intercity stations are searched first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Intercity,
    Regional,
    Local,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Intercity => write!(f, "intercity"),
            Tier::Regional => write!(f, "regional"),
            Tier::Local => write!(f, "local"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intercity" => Ok(Tier::Intercity),
            "regional" => Ok(Tier::Regional),
            "local" => Ok(Tier::Local),
            other => Err(format!("unknown station tier '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub code: String,
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    pub tier: Tier,
}

impl Station {
    /// Great-circle distance in kilometres from this station to a point.
    #[must_use]
    pub fn distance_to(&self, lat: f64, lng: f64) -> f64 {
        crate::geo::haversine_km(self.lat, self.lng, lat, lng)
    }
}

#[derive(Debug, Deserialize)]
pub struct StationsFile {
    pub stations: Vec<Station>,
}

struct StationSeed {
    code: &'static str,
    name: &'static str,
    lat: f64,
    lng: f64,
    city: &'static str,
    tier: Tier,
}

const fn seed(
    code: &'static str,
    name: &'static str,
    lat: f64,
    lng: f64,
    city: &'static str,
    tier: Tier,
) -> StationSeed {
    StationSeed {
        code,
        name,
        lat,
        lng,
        city,
        tier,
    }
}

#[rustfmt::skip]
const EMBEDDED_STATIONS: &[StationSeed] = &[
    seed("ASD", "Amsterdam Centraal", 52.3791, 4.9003, "Amsterdam", Tier::Intercity),
    seed("RTD", "Rotterdam Centraal", 51.9249, 4.4690, "Rotterdam", Tier::Intercity),
    seed("GVC", "Den Haag Centraal", 52.0805, 4.3247, "Den Haag", Tier::Intercity),
    seed("UT", "Utrecht Centraal", 52.0893, 5.1101, "Utrecht", Tier::Intercity),
    seed("EHV", "Eindhoven Centraal", 51.4433, 5.4814, "Eindhoven", Tier::Intercity),
    seed("TB", "Tilburg", 51.5656, 5.0830, "Tilburg", Tier::Intercity),
    seed("BD", "Breda", 51.5953, 4.7811, "Breda", Tier::Intercity),
    seed("AH", "Arnhem Centraal", 51.9851, 5.9288, "Arnhem", Tier::Intercity),
    seed("NM", "Nijmegen", 51.8434, 5.8531, "Nijmegen", Tier::Intercity),
    seed("ASZ", "Amsterdam Zuid", 52.3389, 4.8739, "Amsterdam", Tier::Intercity),
    seed("GN", "Groningen", 53.2108, 6.5647, "Groningen", Tier::Intercity),
    seed("LW", "Leeuwarden", 53.1952, 5.7939, "Leeuwarden", Tier::Intercity),
    seed("ZL", "Zwolle", 52.5047, 6.0916, "Zwolle", Tier::Intercity),
    seed("AMF", "Amersfoort Centraal", 52.1537, 5.3759, "Amersfoort", Tier::Intercity),
    seed("MT", "Maastricht", 50.8503, 5.7051, "Maastricht", Tier::Intercity),
    seed("LDN", "Leiden Centraal", 52.1664, 4.4816, "Leiden", Tier::Intercity),
    seed("HLM", "Haarlem", 52.3874, 4.6462, "Haarlem", Tier::Intercity),
    seed("ALM", "Almere Centrum", 52.3749, 5.2178, "Almere", Tier::Intercity),
    seed("LLS", "Lelystad Centrum", 52.5166, 5.4742, "Lelystad", Tier::Intercity),
    seed("HVS", "Hilversum", 52.2259, 5.1817, "Hilversum", Tier::Intercity),
    seed("ASS", "Amsterdam Sloterdijk", 52.3884, 4.8370, "Amsterdam", Tier::Regional),
    seed("ASA", "Amsterdam Amstel", 52.3467, 4.9179, "Amsterdam", Tier::Regional),
    seed("ASB", "Amsterdam Bijlmer ArenA", 52.3119, 4.9473, "Amsterdam", Tier::Regional),
    seed("GV", "Den Haag HS", 52.0703, 4.3234, "Den Haag", Tier::Regional),
    seed("LAA", "Den Haag Laan van NOI", 52.0780, 4.3149, "Den Haag", Tier::Regional),
    seed("DT", "Delft", 52.0064, 4.3563, "Delft", Tier::Regional),
    seed("ES", "Enschede", 52.2244, 6.8902, "Enschede", Tier::Regional),
    seed("DV", "Deventer", 52.2579, 6.1637, "Deventer", Tier::Regional),
    seed("APD", "Apeldoorn", 52.2101, 5.9701, "Apeldoorn", Tier::Regional),
    seed("ZP", "Zutphen", 52.1506, 6.2014, "Zutphen", Tier::Regional),
    seed("VL", "Venlo", 51.3644, 6.1726, "Venlo", Tier::Regional),
    seed("RMD", "Roermond", 51.1946, 5.9872, "Roermond", Tier::Regional),
    seed("HL", "Hengelo", 52.2616, 6.7938, "Hengelo", Tier::Regional),
    seed("AML", "Almelo", 52.3507, 6.6536, "Almelo", Tier::Regional),
    seed("ED", "Ede-Wageningen", 52.0337, 5.6669, "Ede", Tier::Regional),
    seed("BRN", "Baarn", 52.2101, 5.2876, "Baarn", Tier::Regional),
    seed("DB", "Driebergen-Zeist", 52.0511, 5.2784, "Driebergen", Tier::Regional),
    seed("CL", "Culemborg", 51.9564, 5.2284, "Culemborg", Tier::Regional),
    seed("GDM", "Geldermalsen", 51.8805, 5.2902, "Geldermalsen", Tier::Regional),
    seed("BTL", "Boxtel", 51.5910, 5.3263, "Boxtel", Tier::Regional),
    seed("HT", "'s-Hertogenbosch", 51.6905, 5.2939, "'s-Hertogenbosch", Tier::Regional),
    seed("OSS", "Oss", 51.7646, 5.5177, "Oss", Tier::Regional),
    seed("WD", "Woerden", 52.0853, 4.8834, "Woerden", Tier::Regional),
    seed("GD", "Gouda", 52.0175, 4.7047, "Gouda", Tier::Regional),
    seed("APN", "Alphen aan den Rijn", 52.1286, 4.6571, "Alphen aan den Rijn", Tier::Regional),
    seed("RSD", "Roosendaal", 51.5401, 4.4522, "Roosendaal", Tier::Regional),
    seed("RML", "Rosmalen", 51.7133, 5.3617, "Rosmalen", Tier::Regional),
    seed("ASN", "Assen", 52.9917, 6.5653, "Assen", Tier::Regional),
    seed("MP", "Meppel", 52.6947, 6.1944, "Meppel", Tier::Regional),
    seed("HGV", "Hoogeveen", 52.7265, 6.4767, "Hoogeveen", Tier::Regional),
    seed("SWK", "Steenwijk", 52.7854, 6.1191, "Steenwijk", Tier::Regional),
    seed("DRN", "Dronten", 52.5258, 5.7225, "Dronten", Tier::Regional),
    seed("HLMN", "Harlingen", 53.1742, 5.4218, "Harlingen", Tier::Regional),
    seed("FN", "Franeker", 53.1879, 5.5436, "Franeker", Tier::Regional),
    seed("SK", "Sneek", 53.0324, 5.6583, "Sneek", Tier::Regional),
    seed("HR", "Heerenveen", 52.9607, 5.9198, "Heerenveen", Tier::Regional),
    seed("WZ", "Wezep", 52.4576, 6.0078, "Wezep", Tier::Regional),
    seed("KPN", "Kampen Zuid", 52.5396, 5.9114, "Kampen", Tier::Regional),
    seed("ZTM", "Zoetermeer", 52.0575, 4.4910, "Zoetermeer", Tier::Regional),
    seed("GZ", "Gilze-Rijen", 51.5678, 4.9368, "Gilze-Rijen", Tier::Regional),
    seed("AMR", "Alkmaar", 52.6378, 4.7394, "Alkmaar", Tier::Regional),
    seed("HDR", "Den Helder", 52.9543, 4.7613, "Den Helder", Tier::Regional),
    seed("EKZ", "Enkhuizen", 52.7030, 5.2894, "Enkhuizen", Tier::Regional),
    seed("HN", "Hoorn", 52.6406, 5.0594, "Hoorn", Tier::Regional),
    seed("CAS", "Castricum", 52.5458, 4.6581, "Castricum", Tier::Regional),
    seed("BV", "Beverwijk", 52.4797, 4.6563, "Beverwijk", Tier::Regional),
    seed("HK", "Heemskerk", 52.5089, 4.6671, "Heemskerk", Tier::Regional),
    seed("IJM", "IJmuiden", 52.4608, 4.6106, "IJmuiden", Tier::Regional),
    seed("SHL", "Schiphol Airport", 52.3086, 4.7614, "Schiphol", Tier::Regional),
    seed("DDR", "Dordrecht", 51.8132, 4.6678, "Dordrecht", Tier::Regional),
    seed("SDM", "Schiedam Centrum", 51.9204, 4.3887, "Schiedam", Tier::Regional),
    seed("VLS", "Vlissingen", 51.4453, 3.5969, "Vlissingen", Tier::Regional),
    seed("GS", "Goes", 51.5042, 3.8888, "Goes", Tier::Regional),
    seed("MDB", "Middelburg", 51.4988, 3.6106, "Middelburg", Tier::Regional),
    seed("BGN", "Bergen op Zoom", 51.4955, 4.2913, "Bergen op Zoom", Tier::Regional),
    seed("ZBG", "Zevenbergen", 51.6447, 4.6062, "Zevenbergen", Tier::Regional),
    seed("TNZ", "Terneuzen", 51.3344, 3.8396, "Terneuzen", Tier::Regional),
    seed("SL", "Sittard", 50.9978, 5.8703, "Sittard", Tier::Regional),
    seed("HRL", "Heerlen", 50.8893, 5.9819, "Heerlen", Tier::Regional),
    seed("KRD", "Kerkrade Centrum", 50.8660, 6.0631, "Kerkrade", Tier::Regional),
    seed("WT", "Weert", 51.2518, 5.7058, "Weert", Tier::Regional),
    seed("HM", "Helmond", 51.4811, 5.6197, "Helmond", Tier::Regional),
    seed("DN", "Deurne", 51.4610, 5.7981, "Deurne", Tier::Regional),
    seed("HRZ", "Horst-Sevenum", 51.4595, 6.0493, "Horst", Tier::Regional),
    seed("BEST", "Best", 51.5076, 5.3901, "Best", Tier::Regional),
];

/// Returns the embedded station table in its canonical order.
#[must_use]
pub fn default_stations() -> Vec<Station> {
    EMBEDDED_STATIONS
        .iter()
        .map(|s| Station {
            id: s.code.to_string(),
            name: s.name.to_string(),
            code: s.code.to_string(),
            lat: s.lat,
            lng: s.lng,
            city: s.city.to_string(),
            tier: s.tier,
        })
        .collect()
}

/// Load and validate a station table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_stations(path: &Path) -> Result<Vec<Station>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StationsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: StationsFile = serde_yaml::from_str(&content)?;
    validate_stations(&file.stations)?;

    Ok(file.stations)
}

fn validate_stations(stations: &[Station]) -> Result<(), ConfigError> {
    if stations.is_empty() {
        return Err(ConfigError::Validation(
            "station table must contain at least one station".to_string(),
        ));
    }

    let mut seen_codes = HashSet::new();
    for station in stations {
        if station.name.trim().is_empty() || station.code.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "station '{}' must have a non-empty name and code",
                station.id
            )));
        }

        let lat_ok = station.lat.is_finite() && (-90.0..=90.0).contains(&station.lat);
        let lng_ok = station.lng.is_finite() && (-180.0..=180.0).contains(&station.lng);
        if !lat_ok || !lng_ok {
            return Err(ConfigError::Validation(format!(
                "station '{}' has out-of-range coordinates ({}, {})",
                station.code, station.lat, station.lng
            )));
        }

        if !seen_codes.insert(station.code.to_ascii_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate station code: '{}'",
                station.code
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "stations_test.rs"]
mod tests;
