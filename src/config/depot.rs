//! Named depot locations.

use crate::models::Coordinate;

/// Depots operated today, by name.
pub const DEPOT_PRESETS: [(&str, Coordinate); 10] = [
    ("Ahmedabad", Coordinate { lat: 22.911, lon: 72.425 }),
    ("Bangalore Nelamanagala", Coordinate { lat: 13.06821829, lon: 77.44607278 }),
    ("Banagalore Soukya", Coordinate { lat: 12.98946539, lon: 77.78629337 }),
    ("Chennai", Coordinate { lat: 13.045, lon: 80.024 }),
    ("Gurgaon Udyog Vihar", Coordinate { lat: 28.4813978, lon: 77.0522889 }),
    ("Hyderabad Balanagar", Coordinate { lat: 17.48467009, lon: 78.44890182 }),
    ("Kolkata", Coordinate { lat: 22.494, lon: 88.594 }),
    ("Mumbai", Coordinate { lat: 19.276, lon: 73.092 }),
    ("Noida", Coordinate { lat: 28.53, lon: 77.412 }),
    ("Pune Hinjewadi", Coordinate { lat: 18.528, lon: 73.863 }),
];

/// Looks up a depot preset by exact name.
///
/// # Examples
///
/// ```
/// use u_clustering::config::depot_preset;
///
/// let chennai = depot_preset("Chennai").unwrap();
/// assert_eq!(chennai.lat, 13.045);
/// assert!(depot_preset("Atlantis").is_none());
/// ```
pub fn depot_preset(name: &str) -> Option<Coordinate> {
    DEPOT_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, coord)| *coord)
}
