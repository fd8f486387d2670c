//! Multi-pass, priority-ordered clustering.
//!
//! # Algorithm
//!
//! Societies are partitioned by hub name; hubs never mix. Within a hub the
//! engine runs one greedy pass per kind, in priority order:
//!
//! ```text
//! Main pass → Mini pass → Micro pass → Unclustered sweep
//! ```
//!
//! A pass walks the hub's unassigned societies by descending order volume.
//! Each one still unassigned becomes a seed: neighbors (within 2 km for
//! Main and Mini, any unassigned society for Micro) are added by descending
//! volume, skipping any that would push the total over the kind's ceiling.
//! The candidate is then validated. Accepted candidates leave the pool;
//! rejected seeds stay for the next kind's pass. Whatever survives all
//! three passes becomes a singleton `Unclustered` cluster.
//!
//! # Determinism
//!
//! Input is canonicalised before the passes: societies are sorted by id and
//! hubs are processed by ascending name. Volume ties break on ascending id,
//! so the same societies in any input order give identical output.
//!
//! # Complexity
//!
//! O(h · n³) worst case per hub of n societies, dominated by sequencing
//! each candidate; hubs hold tens to low hundreds of societies.

use std::collections::BTreeMap;

use crate::config::ClusteringConfig;
use crate::error::{ClusteringError, ConfigError};
use crate::evaluation::ClusterValidator;
use crate::models::{Cluster, ClusterKind, RunResult, Society};
use crate::sequencing::{Sequencer, Tour};

use super::pool::HubPool;

/// Hands out `Kind-n` ids from one counter shared by every kind and hub.
#[derive(Debug, Clone)]
pub(crate) struct ClusterIds {
    next: usize,
}

impl ClusterIds {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn issue(&mut self, kind: ClusterKind) -> String {
        let id = format!("{}-{}", kind, self.next);
        self.next += 1;
        id
    }
}

/// Groups societies into delivery clusters and sequences each one.
///
/// # Examples
///
/// ```
/// use u_clustering::clustering::ClusteringEngine;
/// use u_clustering::config::{ClusteringConfig, CostTable};
/// use u_clustering::models::{ClusterKind, Coordinate, Society};
///
/// let config = ClusteringConfig::new(Coordinate::new(0.0, 0.0), 1.0, CostTable::default());
/// let engine = ClusteringEngine::new(config).unwrap();
///
/// let societies = vec![
///     Society::new(1, "Palm Grove", 0.001, 0.001, 100).with_hub(1, "East"),
///     Society::new(2, "Lake View", 0.002, 0.001, 80).with_hub(1, "East"),
///     Society::new(3, "Hill Crest", 0.001, 0.002, 50).with_hub(1, "East"),
/// ];
/// let result = engine.run(&societies).unwrap();
///
/// let main = result.find("Main-1").unwrap();
/// assert_eq!(main.total_orders(), 180);
/// assert_eq!(result.find("Micro-2").unwrap().kind(), ClusterKind::Micro);
/// assert_eq!(result.num_societies(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ClusteringEngine {
    config: ClusteringConfig,
    validator: ClusterValidator,
}

impl ClusteringEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: ClusteringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sequencer = Sequencer::new(config.depot, config.circuity_factor);
        Ok(Self {
            config,
            validator: ClusterValidator::new(sequencer),
        })
    }

    /// Configuration this engine runs with.
    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Sequencer shared by validation and cluster creation.
    pub fn sequencer(&self) -> &Sequencer {
        self.validator.sequencer()
    }

    /// Clusters every society, returning one cluster list covering each
    /// society exactly once.
    ///
    /// # Errors
    ///
    /// Fails before any clustering if a society has invalid coordinates or
    /// two societies share an id.
    pub fn run(&self, societies: &[Society]) -> Result<RunResult, ClusteringError> {
        let arena = canonical_arena(societies)?;

        let mut hubs: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (idx, society) in arena.iter().enumerate() {
            hubs.entry(society.hub_name()).or_default().push(idx);
        }

        let mut ids = ClusterIds::new();
        let mut clusters = Vec::new();
        for (hub_name, members) in hubs {
            let mut pool = HubPool::new(hub_name, &arena, members);
            let before = clusters.len();
            let hub_size = pool.len();

            for kind in ClusterKind::PRIORITY {
                clusters.extend(self.run_pass(kind, &mut pool, &mut ids));
            }
            let leftovers = self.sweep_unclustered(&mut pool);
            log::debug!(
                "hub {}: {} societies -> {} clusters ({} unclustered)",
                hub_name,
                hub_size,
                clusters.len() - before + leftovers.len(),
                leftovers.len()
            );
            clusters.extend(leftovers);
        }

        Ok(RunResult::new(clusters))
    }

    /// One greedy pass of `kind` over the pool.
    pub(crate) fn run_pass(
        &self,
        kind: ClusterKind,
        pool: &mut HubPool<'_>,
        ids: &mut ClusterIds,
    ) -> Vec<Cluster> {
        let mut accepted = Vec::new();
        let Some(ceiling) = kind.ceiling() else {
            return accepted;
        };
        if pool.is_empty() {
            return accepted;
        }

        for seed in pool.seeds() {
            if !pool.contains(seed) {
                continue;
            }
            let members = grow_candidate(pool, seed, kind, ceiling);
            let candidate = members.iter().map(|&idx| pool.society(idx));

            match self.validator.validate(kind, candidate) {
                Ok(tour) => {
                    let cluster = self.build_cluster(ids.issue(kind), kind, pool, &members, tour);
                    log::debug!(
                        "{} accepted in hub {}: {} societies, {} orders, {:.2} km",
                        cluster.id(),
                        pool.hub_name(),
                        cluster.len(),
                        cluster.total_orders(),
                        cluster.distance_km()
                    );
                    pool.take(&members);
                    accepted.push(cluster);
                }
                Err(rejection) => {
                    log::trace!(
                        "{} seed {} in hub {} rejected: {}",
                        kind,
                        pool.society(seed).id(),
                        pool.hub_name(),
                        rejection
                    );
                }
            }
        }
        accepted
    }

    /// Turns every society left in the pool into its own cluster.
    pub(crate) fn sweep_unclustered(&self, pool: &mut HubPool<'_>) -> Vec<Cluster> {
        let remaining = pool.drain();
        let pool: &HubPool<'_> = pool;
        remaining
            .into_iter()
            .map(|idx| {
                let society = pool.society(idx);
                let tour = self.sequencer().sequence([society]);
                self.build_cluster(
                    format!("{}-{}", ClusterKind::Unclustered, society.id()),
                    ClusterKind::Unclustered,
                    pool,
                    &[idx],
                    tour,
                )
            })
            .collect()
    }

    fn build_cluster(
        &self,
        id: String,
        kind: ClusterKind,
        pool: &HubPool<'_>,
        members: &[usize],
        tour: Tour,
    ) -> Cluster {
        let societies = members.iter().map(|&idx| pool.society(idx).clone()).collect();
        Cluster::new(
            id,
            kind,
            pool.hub_name().to_string(),
            societies,
            tour.distance_km,
            tour.stops,
            self.config.costs.cost_for(kind),
        )
    }
}

/// Clusters `societies` with a one-off engine built from `config`.
pub fn run_clustering(
    societies: &[Society],
    config: &ClusteringConfig,
) -> Result<RunResult, ClusteringError> {
    ClusteringEngine::new(*config)?.run(societies)
}

/// Seed first, then neighbors by descending volume while under `ceiling`.
fn grow_candidate(pool: &HubPool<'_>, seed: usize, kind: ClusterKind, ceiling: u32) -> Vec<usize> {
    let mut members = vec![seed];
    let mut total = pool.society(seed).orders();
    for idx in pool.neighbors(seed, kind.neighbor_radius_km()) {
        let orders = pool.society(idx).orders();
        if let Some(next) = total.checked_add(orders).filter(|&t| t <= ceiling) {
            members.push(idx);
            total = next;
        }
    }
    members
}

/// Validates the input and returns it sorted by id.
pub(crate) fn canonical_arena(societies: &[Society]) -> Result<Vec<Society>, ClusteringError> {
    if let Some(bad) = societies.iter().find(|s| !s.location().is_valid()) {
        return Err(ClusteringError::InvalidCoordinate {
            id: bad.id(),
            lat: bad.location().lat,
            lon: bad.location().lon,
        });
    }
    let mut arena = societies.to_vec();
    arena.sort_by_key(Society::id);
    if let Some(pair) = arena.windows(2).find(|w| w[0].id() == w[1].id()) {
        return Err(ClusteringError::DuplicateSociety(pair[0].id()));
    }
    Ok(arena)
}
