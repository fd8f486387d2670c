//! Coordinate and society (delivery point) types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_clustering::models::Coordinate;
///
/// let c = Coordinate::new(13.045, 80.024);
/// assert!(c.is_valid());
/// assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
/// assert!(!Coordinate::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns `true` if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A delivery point (an apartment society) already assigned to a hub.
///
/// Societies are immutable once loaded; the clustering engine only ever
/// reads them.
///
/// # Examples
///
/// ```
/// use u_clustering::models::Society;
///
/// let s = Society::new(7, "Brigade Gateway", 13.01, 77.55, 42)
///     .with_hub(3, "Malleshwaram");
/// assert_eq!(s.id(), 7);
/// assert_eq!(s.orders(), 42);
/// assert_eq!(s.hub_name(), "Malleshwaram");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Society {
    id: u64,
    name: String,
    location: Coordinate,
    orders: u32,
    hub_id: u64,
    hub_name: String,
}

impl Society {
    /// Creates a society with no hub (hub id 0, empty hub name).
    pub fn new(id: u64, name: impl Into<String>, lat: f64, lon: f64, orders: u32) -> Self {
        Self {
            id,
            name: name.into(),
            location: Coordinate::new(lat, lon),
            orders,
            hub_id: 0,
            hub_name: String::new(),
        }
    }

    /// Sets the owning hub.
    pub fn with_hub(mut self, hub_id: u64, hub_name: impl Into<String>) -> Self {
        self.hub_id = hub_id;
        self.hub_name = hub_name.into();
        self
    }

    /// Society identifier, unique within one run's input.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the society.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Order volume to deliver.
    pub fn orders(&self) -> u32 {
        self.orders
    }

    /// Hub identifier.
    pub fn hub_id(&self) -> u64 {
        self.hub_id
    }

    /// Hub name; clusters never span two hub names.
    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }
}
