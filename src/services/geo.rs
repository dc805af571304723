// src/services/geo.rs
// DOCUMENTATION: Coordinate math for radius search
// PURPOSE: Bounding-box conversion and great-circle distance helpers

use crate::errors::ArtmapError;

/// Mean Earth radius in meters, matching the constant used in the SQL
/// distance expression
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate meters per degree of latitude
pub const METERS_PER_LAT_DEGREE: f64 = 111_000.0;

/// Latitudes at or beyond this are rejected: cos(lat) approaches zero and
/// the longitude delta diverges
pub const MAX_SEARCH_LATITUDE_DEG: f64 = 89.9;

/// Rectangular latitude/longitude range used as a cheap pre-filter before
/// the exact distance computation
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Compute the bounding box guaranteed to contain every point within
/// `radius_m` of the reference point
/// DOCUMENTATION: 1° latitude ≈ 111 km everywhere; 1° longitude shrinks by
/// cos(latitude), so the box over-covers toward the poles. The exact
/// distance filter downstream is authoritative; this only prunes candidates.
///
/// Degenerate geometry (non-positive radius, near-polar latitude) is a
/// validation error, not a silent Infinity/NaN
pub fn bounding_box(lat: f64, lon: f64, radius_m: f64) -> Result<BoundingBox, ArtmapError> {
    if radius_m <= 0.0 {
        return Err(ArtmapError::ValidationError(
            "range must be a positive number of meters".to_string(),
        ));
    }

    if lat.abs() >= MAX_SEARCH_LATITUDE_DEG {
        return Err(ArtmapError::ValidationError(format!(
            "latitude {} is too close to a pole for radius search",
            lat
        )));
    }

    let lat_delta = radius_m / METERS_PER_LAT_DEGREE;
    let lon_delta = radius_m / (METERS_PER_LAT_DEGREE * lat.to_radians().cos());

    Ok(BoundingBox {
        min_lat: lat - lat_delta,
        max_lat: lat + lat_delta,
        min_lon: lon - lon_delta,
        max_lon: lon + lon_delta,
    })
}

/// Haversine great-circle distance between two coordinates, in meters
/// DOCUMENTATION: Reference implementation of the distance the SQL query
/// computes server-side; used by the service tests to check the filter and
/// ordering invariants
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seoul city hall, the reference point of the map search scenarios
    const SEOUL: (f64, f64) = (37.5665, 126.9780);

    #[test]
    fn test_bounding_box_contains_radius() {
        let radius = 10_000.0;
        let bbox = bounding_box(SEOUL.0, SEOUL.1, radius).unwrap();

        // Walk the circle edge; every point must fall inside the box
        for deg in 0..360 {
            let bearing = (deg as f64).to_radians();
            let lat = SEOUL.0 + (radius / METERS_PER_LAT_DEGREE) * bearing.cos();
            let lon = SEOUL.1
                + (radius / (METERS_PER_LAT_DEGREE * SEOUL.0.to_radians().cos())) * bearing.sin();

            assert!(lat >= bbox.min_lat && lat <= bbox.max_lat);
            assert!(lon >= bbox.min_lon && lon <= bbox.max_lon);
        }
    }

    #[test]
    fn test_bounding_box_widens_toward_poles() {
        let equator = bounding_box(0.0, 0.0, 10_000.0).unwrap();
        let north = bounding_box(60.0, 0.0, 10_000.0).unwrap();

        let equator_lon_span = equator.max_lon - equator.min_lon;
        let north_lon_span = north.max_lon - north.min_lon;

        // cos(60°) = 0.5, so the longitude span should double
        assert!((north_lon_span / equator_lon_span - 2.0).abs() < 1e-6);

        // Latitude span does not depend on latitude
        assert!((equator.max_lat - equator.min_lat - (north.max_lat - north.min_lat)).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box_rejects_non_positive_radius() {
        assert!(bounding_box(SEOUL.0, SEOUL.1, 0.0).is_err());
        assert!(bounding_box(SEOUL.0, SEOUL.1, -100.0).is_err());
    }

    #[test]
    fn test_bounding_box_rejects_polar_latitude() {
        assert!(bounding_box(90.0, 0.0, 1000.0).is_err());
        assert!(bounding_box(-90.0, 0.0, 1000.0).is_err());
        assert!(bounding_box(89.95, 0.0, 1000.0).is_err());
        // Just below the cutoff is fine
        assert!(bounding_box(89.8, 0.0, 1000.0).is_ok());
    }

    #[test]
    fn test_haversine_known_distance() {
        // Seoul city hall to Incheon city hall, roughly 27 km
        let d = haversine_distance_m(SEOUL.0, SEOUL.1, 37.4563, 126.7052);
        assert!(d > 25_000.0 && d < 30_000.0, "got {}", d);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let d = haversine_distance_m(SEOUL.0, SEOUL.1, SEOUL.0, SEOUL.1);
        assert!(d.abs() < 1e-6);
    }

    #[test]
    fn test_haversine_idempotent() {
        let a = haversine_distance_m(SEOUL.0, SEOUL.1, 36.0, 128.0);
        let b = haversine_distance_m(SEOUL.0, SEOUL.1, 36.0, 128.0);
        assert!((a - b).abs() < 1e-6);
    }
}
