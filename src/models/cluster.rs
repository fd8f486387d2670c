//! Cluster kinds, order bands and the cluster record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinate, Society};
use crate::distance::round_km;

/// An inclusive range of total order volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBand {
    /// Smallest accepted total.
    pub min: u32,
    /// Largest accepted total.
    pub max: u32,
}

impl OrderBand {
    /// Returns `true` if `orders` lies within the band.
    pub fn contains(&self, orders: u32) -> bool {
        orders >= self.min && orders <= self.max
    }
}

impl fmt::Display for OrderBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The kind of a cluster.
///
/// `Main`, `Mini` and `Micro` are capacity-banded groupings claimed in that
/// priority order; `Unclustered` is the singleton fallback.
///
/// # Examples
///
/// ```
/// use u_clustering::models::ClusterKind;
///
/// assert_eq!(ClusterKind::Main.ceiling(), Some(220));
/// assert!(ClusterKind::Mini.band().unwrap().contains(121));
/// assert_eq!(ClusterKind::Micro.neighbor_radius_km(), None);
/// assert_eq!(ClusterKind::Unclustered.to_string(), "Unclustered");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClusterKind {
    /// Large cluster, 180–220 orders.
    Main,
    /// Medium cluster, 121–179 orders.
    Mini,
    /// Small cluster, 1–120 orders, last stop close to the depot.
    Micro,
    /// A single society no banded cluster could take.
    Unclustered,
}

impl ClusterKind {
    /// Kinds attempted by the engine, highest priority first.
    pub const PRIORITY: [ClusterKind; 3] = [ClusterKind::Main, ClusterKind::Mini, ClusterKind::Micro];

    /// Name used as the cluster id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterKind::Main => "Main",
            ClusterKind::Mini => "Mini",
            ClusterKind::Micro => "Micro",
            ClusterKind::Unclustered => "Unclustered",
        }
    }

    /// Accepted order band, or `None` for `Unclustered`.
    pub fn band(&self) -> Option<OrderBand> {
        match self {
            ClusterKind::Main => Some(OrderBand { min: 180, max: 220 }),
            ClusterKind::Mini => Some(OrderBand { min: 121, max: 179 }),
            ClusterKind::Micro => Some(OrderBand { min: 1, max: 120 }),
            ClusterKind::Unclustered => None,
        }
    }

    /// Upper bound used while growing a candidate.
    pub fn ceiling(&self) -> Option<u32> {
        self.band().map(|b| b.max)
    }

    /// Great-circle radius around the seed that neighbors must fall within.
    ///
    /// `None` means every unassigned society in the hub is a neighbor.
    pub fn neighbor_radius_km(&self) -> Option<f64> {
        match self {
            ClusterKind::Main | ClusterKind::Mini => Some(2.0),
            ClusterKind::Micro | ClusterKind::Unclustered => None,
        }
    }
}

impl fmt::Display for ClusterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accepted grouping of societies with its delivery sequence.
///
/// Created once by the clustering engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    id: String,
    kind: ClusterKind,
    hub_name: String,
    members: Vec<Society>,
    total_orders: u32,
    distance_km: f64,
    sequence: Vec<u64>,
    cost: f64,
}

impl Cluster {
    pub(crate) fn new(
        id: String,
        kind: ClusterKind,
        hub_name: String,
        members: Vec<Society>,
        distance_km: f64,
        sequence: Vec<u64>,
        cost: f64,
    ) -> Self {
        let total_orders = members
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.orders()));
        Self {
            id,
            kind,
            hub_name,
            members,
            total_orders,
            distance_km,
            sequence,
            cost,
        }
    }

    /// Cluster identifier, e.g. `Main-1` or `Unclustered-42`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cluster kind.
    pub fn kind(&self) -> ClusterKind {
        self.kind
    }

    /// Hub every member belongs to.
    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }

    /// Members in admission order (seed first).
    pub fn members(&self) -> &[Society] {
        &self.members
    }

    /// Number of member societies.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of the members' orders.
    pub fn total_orders(&self) -> u32 {
        self.total_orders
    }

    /// Round-trip distance depot → stops → depot at full precision.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Round-trip distance rounded to two decimals.
    pub fn rounded_distance_km(&self) -> f64 {
        round_km(self.distance_km)
    }

    /// Society ids in visiting order, depot excluded.
    pub fn sequence(&self) -> &[u64] {
        &self.sequence
    }

    /// Fixed cost of running this cluster.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Cost per order, zero when the cluster carries no orders.
    pub fn cost_per_order(&self) -> f64 {
        if self.total_orders > 0 {
            self.cost / f64::from(self.total_orders)
        } else {
            0.0
        }
    }

    /// Members reordered to follow the visiting sequence.
    pub fn ordered_members(&self) -> Vec<&Society> {
        self.sequence
            .iter()
            .filter_map(|id| self.members.iter().find(|s| s.id() == *id))
            .collect()
    }

    /// Coordinates of the full route: depot, each stop, depot.
    pub fn path(&self, depot: Coordinate) -> Vec<Coordinate> {
        let mut path = Vec::with_capacity(self.sequence.len() + 2);
        path.push(depot);
        path.extend(self.ordered_members().iter().map(|s| s.location()));
        path.push(depot);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cluster(cost: f64, orders: &[u32]) -> Cluster {
        let members: Vec<Society> = orders
            .iter()
            .enumerate()
            .map(|(i, &o)| Society::new(i as u64 + 1, format!("S{}", i + 1), 0.0, 0.01 * i as f64, o))
            .collect();
        let sequence = members.iter().rev().map(|s| s.id()).collect();
        Cluster::new("Main-1".into(), ClusterKind::Main, "Hub".into(), members, 3.14159, sequence, cost)
    }

    #[test]
    fn test_bands() {
        let main = ClusterKind::Main.band().expect("banded");
        assert!(main.contains(180) && main.contains(220));
        assert!(!main.contains(179) && !main.contains(221));
        let mini = ClusterKind::Mini.band().expect("banded");
        assert!(mini.contains(121) && mini.contains(179));
        assert!(!mini.contains(120) && !mini.contains(180));
        let micro = ClusterKind::Micro.band().expect("banded");
        assert!(micro.contains(1) && micro.contains(120));
        assert!(!micro.contains(0) && !micro.contains(121));
        assert!(ClusterKind::Unclustered.band().is_none());
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            ClusterKind::PRIORITY,
            [ClusterKind::Main, ClusterKind::Mini, ClusterKind::Micro]
        );
    }

    #[test]
    fn test_band_display() {
        assert_eq!(OrderBand { min: 1, max: 120 }.to_string(), "[1, 120]");
    }

    #[test]
    fn test_cluster_totals() {
        let c = sample_cluster(1166.0, &[100, 80]);
        assert_eq!(c.total_orders(), 180);
        assert_eq!(c.len(), 2);
        assert!((c.cost_per_order() - 1166.0 / 180.0).abs() < 1e-12);
        assert_eq!(c.rounded_distance_km(), 3.14);
    }

    #[test]
    fn test_cost_per_order_zero_orders() {
        let c = sample_cluster(700.0, &[0]);
        assert_eq!(c.total_orders(), 0);
        assert_eq!(c.cost_per_order(), 0.0);
    }

    #[test]
    fn test_ordered_members_and_path() {
        let c = sample_cluster(0.0, &[10, 20, 30]);
        let ids: Vec<u64> = c.ordered_members().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let depot = Coordinate::new(1.0, 1.0);
        let path = c.path(depot);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], depot);
        assert_eq!(path[4], depot);
        assert_eq!(path[1], Coordinate::new(0.0, 0.02));
    }
}
