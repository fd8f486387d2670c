//! Per-kind fixed cluster costs.

use serde::{Deserialize, Serialize};

use crate::models::ClusterKind;

/// Fixed monetary cost of running one cluster of each kind.
///
/// # Examples
///
/// ```
/// use u_clustering::config::CostTable;
/// use u_clustering::models::ClusterKind;
///
/// let costs = CostTable::default();
/// assert_eq!(costs.cost_for(ClusterKind::Main), 1166.0);
/// assert_eq!(costs.cost_for(ClusterKind::Unclustered), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostTable {
    /// Cost of a Main cluster.
    pub main: f64,
    /// Cost of a Mini cluster.
    pub mini: f64,
    /// Cost of a Micro cluster.
    pub micro: f64,
}

/// Van and crew (CEE) cost making up one cluster's cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostComponents {
    /// Vehicle cost.
    pub van: f64,
    /// Delivery associate cost.
    pub cee: f64,
}

impl CostComponents {
    /// Van plus crew cost.
    pub fn total(&self) -> f64 {
        self.van + self.cee
    }
}

impl CostTable {
    /// Creates a cost table.
    pub fn new(main: f64, mini: f64, micro: f64) -> Self {
        Self { main, mini, micro }
    }

    /// Builds the table by summing van and crew cost per kind.
    pub fn from_components(main: CostComponents, mini: CostComponents, micro: CostComponents) -> Self {
        Self::new(main.total(), mini.total(), micro.total())
    }

    /// Cost attached to a cluster of `kind`; always zero for `Unclustered`.
    pub fn cost_for(&self, kind: ClusterKind) -> f64 {
        match kind {
            ClusterKind::Main => self.main,
            ClusterKind::Mini => self.mini,
            ClusterKind::Micro => self.micro,
            ClusterKind::Unclustered => 0.0,
        }
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::from_components(
            CostComponents { van: 833.0, cee: 333.0 },
            CostComponents { van: 1000.0, cee: 200.0 },
            CostComponents { van: 500.0, cee: 200.0 },
        )
    }
}
