//! Great-circle distance helpers.

use crate::stations::Station;

/// Mean Earth radius used for every distance in the workspace.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two WGS84 points given in degrees.
///
/// Symmetric and zero for identical points. Antipodal and polar inputs are
/// not special-cased.
#[must_use]
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Finds the station closest to `(lat, lng)` by linear scan.
///
/// Ties keep the earlier station in table order. Returns `None` only for an
/// empty table.
#[must_use]
pub fn nearest_station(stations: &[Station], lat: f64, lng: f64) -> Option<(&Station, f64)> {
    let mut best: Option<(&Station, f64)> = None;
    for station in stations {
        let distance = station.distance_to(lat, lng);
        match best {
            Some((_, current)) if current <= distance => {}
            _ => best = Some((station, distance)),
        }
    }
    best
}
