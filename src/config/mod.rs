//! Run configuration: depot, circuity factor and cluster costs.
//!
//! Configuration is shared read-only by every computation of a run and may
//! be reused across runs.

mod costs;
mod depot;

pub use costs::{CostComponents, CostTable};
pub use depot::{depot_preset, DEPOT_PRESETS};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{ClusterKind, Coordinate};

/// Circuity factor used when none is given: roads run 40% longer than the
/// straight line.
pub const DEFAULT_CIRCUITY_FACTOR: f64 = 1.4;

/// Everything a clustering run needs besides the societies themselves.
///
/// # Examples
///
/// ```
/// use u_clustering::config::ClusteringConfig;
///
/// let config = ClusteringConfig::from_json(
///     r#"{ "depot": { "lat": 13.045, "lon": 80.024 },
///          "circuity_factor": 1.3,
///          "costs": { "main": 1166.0, "mini": 1200.0, "micro": 700.0 } }"#,
/// ).unwrap();
/// assert_eq!(config.circuity_factor, 1.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Depot every route starts and ends at.
    pub depot: Coordinate,
    /// Multiplier turning great-circle distance into road distance.
    #[serde(default = "default_circuity_factor")]
    pub circuity_factor: f64,
    /// Fixed cost per cluster kind.
    #[serde(default)]
    pub costs: CostTable,
}

fn default_circuity_factor() -> f64 {
    DEFAULT_CIRCUITY_FACTOR
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            depot: DEPOT_PRESETS[0].1,
            circuity_factor: DEFAULT_CIRCUITY_FACTOR,
            costs: CostTable::default(),
        }
    }
}

impl ClusteringConfig {
    /// Creates a configuration.
    pub fn new(depot: Coordinate, circuity_factor: f64, costs: CostTable) -> Self {
        Self {
            depot,
            circuity_factor,
            costs,
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the depot, circuity factor and costs.
    ///
    /// Circuity factors outside `[1.0, 2.0]` are accepted with a warning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.depot.is_valid() {
            return Err(ConfigError::InvalidDepot {
                lat: self.depot.lat,
                lon: self.depot.lon,
            });
        }
        if !self.circuity_factor.is_finite() || self.circuity_factor <= 0.0 {
            return Err(ConfigError::InvalidCircuityFactor(self.circuity_factor));
        }
        if !(1.0..=2.0).contains(&self.circuity_factor) {
            log::warn!(
                "circuity factor {} is outside the usual range [1.0, 2.0]",
                self.circuity_factor
            );
        }
        for kind in ClusterKind::PRIORITY {
            let value = self.costs.cost_for(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCost { kind, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let c = ClusteringConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.depot, Coordinate::new(22.911, 72.425));
        assert_eq!(c.circuity_factor, 1.4);
    }

    #[test]
    fn test_json_defaults() {
        let c = ClusteringConfig::from_json(r#"{ "depot": { "lat": 19.276, "lon": 73.092 } }"#)
            .expect("valid");
        assert_eq!(c.circuity_factor, DEFAULT_CIRCUITY_FACTOR);
        assert_eq!(c.costs, CostTable::default());
    }

    #[test]
    fn test_json_malformed() {
        let err = ClusteringConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_invalid_depot() {
        let c = ClusteringConfig::new(Coordinate::new(f64::NAN, 0.0), 1.4, CostTable::default());
        assert!(matches!(c.validate(), Err(ConfigError::InvalidDepot { .. })));
    }

    #[test]
    fn test_invalid_circuity() {
        let mut c = ClusteringConfig::default();
        c.circuity_factor = 0.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidCircuityFactor(_))
        ));
        c.circuity_factor = 2.5;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_negative_cost() {
        let mut c = ClusteringConfig::default();
        c.costs.micro = -5.0;
        match c.validate() {
            Err(ConfigError::InvalidCost { kind, value }) => {
                assert_eq!(kind, ClusterKind::Micro);
                assert_eq!(value, -5.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
