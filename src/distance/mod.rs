//! Distance model.
//!
//! Haversine great-circle distance on a spherical Earth, scaled by a
//! circuity factor to estimate road distance.

mod geodesic;

pub use geodesic::{great_circle_km, round_km, scaled_distance_km, EARTH_RADIUS_KM};
