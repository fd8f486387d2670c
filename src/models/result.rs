//! Run result type.

use serde::{Deserialize, Serialize};

use super::{Cluster, ClusterKind};

/// All clusters produced by one clustering run, in creation order.
///
/// Every input society appears in exactly one cluster.
///
/// # Examples
///
/// ```
/// use u_clustering::models::RunResult;
///
/// let result = RunResult::default();
/// assert!(result.is_empty());
/// assert_eq!(result.num_societies(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    clusters: Vec<Cluster>,
}

impl RunResult {
    /// Wraps an ordered list of clusters.
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    /// Clusters in creation order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` if no clusters were produced.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total societies covered across all clusters.
    pub fn num_societies(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Looks up a cluster by id.
    pub fn find(&self, id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id() == id)
    }

    /// Clusters owned by the given hub.
    pub fn clusters_for_hub<'a>(&'a self, hub_name: &'a str) -> impl Iterator<Item = &'a Cluster> + 'a {
        self.clusters.iter().filter(move |c| c.hub_name() == hub_name)
    }

    /// Clusters of the given kind.
    pub fn by_kind(&self, kind: ClusterKind) -> impl Iterator<Item = &Cluster> + '_ {
        self.clusters.iter().filter(move |c| c.kind() == kind)
    }

    /// Distinct hub names, sorted.
    pub fn hub_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.clusters.iter().map(Cluster::hub_name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Consumes the result, returning the clusters.
    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Society;

    fn cluster(id: &str, kind: ClusterKind, hub: &str, sid: u64) -> Cluster {
        let s = Society::new(sid, "s", 0.0, 0.0, 10).with_hub(1, hub);
        Cluster::new(id.into(), kind, hub.into(), vec![s], 0.0, vec![sid], 0.0)
    }

    #[test]
    fn test_lookups() {
        let result = RunResult::new(vec![
            cluster("Main-1", ClusterKind::Main, "North", 1),
            cluster("Micro-2", ClusterKind::Micro, "South", 2),
            cluster("Unclustered-3", ClusterKind::Unclustered, "North", 3),
        ]);
        assert_eq!(result.len(), 3);
        assert_eq!(result.num_societies(), 3);
        assert_eq!(result.find("Micro-2").map(|c| c.hub_name()), Some("South"));
        assert!(result.find("Mini-9").is_none());
        assert_eq!(result.clusters_for_hub("North").count(), 2);
        assert_eq!(result.by_kind(ClusterKind::Main).count(), 1);
        assert_eq!(result.hub_names(), vec!["North", "South"]);

        let ids: Vec<String> = result
            .into_clusters()
            .into_iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["Main-1", "Micro-2", "Unclustered-3"]);
    }
}
