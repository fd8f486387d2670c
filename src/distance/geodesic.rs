//! Great-circle distance scaled by a road circuity factor.

use crate::models::Coordinate;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance between two coordinates, in kilometres.
///
/// # Examples
///
/// ```
/// use u_clustering::models::Coordinate;
/// use u_clustering::distance::great_circle_km;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((great_circle_km(a, b) - 111.195).abs() < 1e-3);
/// ```
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Estimated road distance: great-circle distance times `circuity_factor`.
pub fn scaled_distance_km(a: Coordinate, b: Coordinate, circuity_factor: f64) -> f64 {
    great_circle_km(a, b) * circuity_factor
}

/// Rounds a distance (or any reported figure) to two decimals.
pub fn round_km(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
