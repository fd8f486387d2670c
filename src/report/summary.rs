//! Per-cluster and per-kind summaries of a run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::distance::round_km;
use crate::models::{Cluster, ClusterKind, Coordinate, RunResult};
use crate::sequencing::Sequencer;

/// One row of the cluster summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    /// Cluster identifier.
    pub cluster_id: String,
    /// Cluster kind.
    pub kind: ClusterKind,
    /// Number of member societies.
    pub num_societies: usize,
    /// Sum of the members' orders.
    pub total_orders: u32,
    /// Depot → stops → depot, rounded.
    pub total_distance_km: f64,
    /// Distance between the first and last stop along the route, rounded.
    pub between_societies_km: f64,
    /// Rounded cost per order.
    pub cost_per_order: f64,
    /// Human-readable route, e.g. `A -> B (0.52 km) -> C (1.10 km)`.
    pub delivery_sequence: String,
}

impl ClusterSummary {
    /// Summarises one cluster. Leg distances come from `sequencer`.
    pub fn from_cluster(cluster: &Cluster, sequencer: &Sequencer) -> Self {
        let stops = cluster.ordered_members();
        let depot: Coordinate = sequencer.depot();

        let between = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => {
                let outbound = sequencer.leg_km(depot, first.location());
                let inbound = sequencer.leg_km(last.location(), depot);
                (cluster.rounded_distance_km() - outbound - inbound).max(0.0)
            }
            _ => 0.0,
        };

        let mut delivery_sequence = String::new();
        if let Some(first) = stops.first() {
            delivery_sequence.push_str(first.name());
            for pair in stops.windows(2) {
                let leg = sequencer.leg_km(pair[0].location(), pair[1].location());
                delivery_sequence.push_str(&format!(" -> {} ({:.2} km)", pair[1].name(), leg));
            }
        }

        Self {
            cluster_id: cluster.id().to_string(),
            kind: cluster.kind(),
            num_societies: cluster.len(),
            total_orders: cluster.total_orders(),
            total_distance_km: cluster.rounded_distance_km(),
            between_societies_km: round_km(between),
            cost_per_order: round_km(cluster.cost_per_order()),
            delivery_sequence,
        }
    }
}

/// Cumulative figures for all clusters of one kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindSummary {
    pub kind: ClusterKind,
    pub total_routes: usize,
    pub total_societies: usize,
    pub total_orders: u64,
    /// Sum of rounded cost per order times orders, per cluster.
    pub total_cost: f64,
    /// `total_cost / total_orders`, rounded; zero without orders.
    pub overall_cost_per_order: f64,
}

/// Summarises every cluster, sorted by kind name then cluster id.
///
/// # Examples
///
/// ```
/// use u_clustering::clustering::ClusteringEngine;
/// use u_clustering::config::ClusteringConfig;
/// use u_clustering::models::Society;
/// use u_clustering::report::summarize;
///
/// let engine = ClusteringEngine::new(ClusteringConfig::default()).unwrap();
/// let societies = vec![Society::new(1, "Shanti Vihar", 22.92, 72.43, 40).with_hub(1, "West")];
/// let result = engine.run(&societies).unwrap();
///
/// let rows = summarize(&result, engine.sequencer());
/// assert_eq!(rows[0].cluster_id, "Micro-1");
/// assert_eq!(rows[0].delivery_sequence, "Shanti Vihar");
/// assert_eq!(rows[0].cost_per_order, 17.5);
/// ```
pub fn summarize(result: &RunResult, sequencer: &Sequencer) -> Vec<ClusterSummary> {
    let mut rows: Vec<ClusterSummary> = result
        .clusters()
        .iter()
        .map(|c| ClusterSummary::from_cluster(c, sequencer))
        .collect();
    rows.sort_by(|a, b| {
        a.kind
            .as_str()
            .cmp(b.kind.as_str())
            .then_with(|| a.cluster_id.cmp(&b.cluster_id))
    });
    rows
}

/// Aggregates summary rows by kind, sorted by kind name.
pub fn summarize_by_kind(rows: &[ClusterSummary]) -> Vec<KindSummary> {
    let mut groups: BTreeMap<&'static str, KindSummary> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.kind.as_str()).or_insert_with(|| KindSummary {
            kind: row.kind,
            total_routes: 0,
            total_societies: 0,
            total_orders: 0,
            total_cost: 0.0,
            overall_cost_per_order: 0.0,
        });
        entry.total_routes += 1;
        entry.total_societies += row.num_societies;
        entry.total_orders += u64::from(row.total_orders);
        entry.total_cost += row.cost_per_order * f64::from(row.total_orders);
    }

    groups
        .into_values()
        .map(|mut g| {
            if g.total_orders > 0 {
                g.overall_cost_per_order = round_km(g.total_cost / g.total_orders as f64);
            }
            g
        })
        .collect()
}
