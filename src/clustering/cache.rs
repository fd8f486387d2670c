//! Memoized clustering runs.
//!
//! The engine is fully deterministic, so identical societies and
//! configuration always give the same result. Runs are keyed by an explicit
//! hash of the id-sorted input; a hit is confirmed against the stored input
//! before it is served, so a hash collision costs a recomputation rather
//! than a wrong answer.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHasher};

use super::ClusteringEngine;
use crate::config::ClusteringConfig;
use crate::error::ClusteringError;
use crate::models::{RunResult, Society};

/// Hash of a run's input, independent of the order societies are given in.
///
/// # Examples
///
/// ```
/// use u_clustering::clustering::run_key;
/// use u_clustering::config::ClusteringConfig;
/// use u_clustering::models::Society;
///
/// let a = Society::new(1, "a", 13.0, 77.0, 10);
/// let b = Society::new(2, "b", 13.1, 77.1, 20);
/// let config = ClusteringConfig::default();
/// assert_eq!(
///     run_key(&[a.clone(), b.clone()], &config),
///     run_key(&[b, a], &config),
/// );
/// ```
pub fn run_key(societies: &[Society], config: &ClusteringConfig) -> u64 {
    let mut canonical: Vec<&Society> = societies.iter().collect();
    canonical.sort_by_key(|s| s.id());
    hash_input(canonical, config)
}

fn hash_input<'a, I>(societies: I, config: &ClusteringConfig) -> u64
where
    I: IntoIterator<Item = &'a Society>,
{
    let mut h = FxHasher::default();
    config.depot.lat.to_bits().hash(&mut h);
    config.depot.lon.to_bits().hash(&mut h);
    config.circuity_factor.to_bits().hash(&mut h);
    config.costs.main.to_bits().hash(&mut h);
    config.costs.mini.to_bits().hash(&mut h);
    config.costs.micro.to_bits().hash(&mut h);
    for s in societies {
        s.id().hash(&mut h);
        s.name().hash(&mut h);
        s.location().lat.to_bits().hash(&mut h);
        s.location().lon.to_bits().hash(&mut h);
        s.orders().hash(&mut h);
        s.hub_id().hash(&mut h);
        s.hub_name().hash(&mut h);
    }
    h.finish()
}

#[derive(Debug)]
struct CachedRun {
    societies: Vec<Society>,
    config: ClusteringConfig,
    result: Arc<RunResult>,
}

/// Cache of clustering results keyed by [`run_key`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_clustering::clustering::{ClusteringEngine, RunCache};
/// use u_clustering::config::ClusteringConfig;
/// use u_clustering::models::Society;
///
/// let engine = ClusteringEngine::new(ClusteringConfig::default()).unwrap();
/// let societies = vec![Society::new(1, "a", 22.92, 72.43, 40).with_hub(1, "West")];
///
/// let mut cache = RunCache::new();
/// let first = cache.get_or_run(&engine, &societies).unwrap();
/// let second = cache.get_or_run(&engine, &societies).unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.hits(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RunCache {
    entries: FxHashMap<u64, CachedRun>,
    hits: usize,
    misses: usize,
}

impl RunCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for this input, running `engine` on a miss.
    ///
    /// Failed runs are not cached.
    pub fn get_or_run(
        &mut self,
        engine: &ClusteringEngine,
        societies: &[Society],
    ) -> Result<Arc<RunResult>, ClusteringError> {
        let mut canonical = societies.to_vec();
        canonical.sort_by_key(Society::id);
        let key = hash_input(&canonical, engine.config());

        if let Some(entry) = self.entries.get(&key) {
            if entry.config == *engine.config() && entry.societies == canonical {
                self.hits += 1;
                log::trace!("run cache hit {key:016x}");
                return Ok(Arc::clone(&entry.result));
            }
            log::debug!("run cache key {key:016x} collided, recomputing");
        }

        self.misses += 1;
        let result = Arc::new(engine.run(&canonical)?);
        self.entries.insert(
            key,
            CachedRun {
                societies: canonical,
                config: *engine.config(),
                result: Arc::clone(&result),
            },
        );
        Ok(result)
    }

    /// Number of cached runs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that ran the engine.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drops every cached run.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostTable;
    use crate::models::Coordinate;

    fn societies() -> Vec<Society> {
        vec![
            Society::new(1, "a", 0.001, 0.0, 100).with_hub(1, "H"),
            Society::new(2, "b", 0.002, 0.0, 80).with_hub(1, "H"),
            Society::new(3, "c", 0.003, 0.0, 30).with_hub(1, "H"),
        ]
    }

    fn engine(circuity: f64) -> ClusteringEngine {
        let config = ClusteringConfig::new(Coordinate::new(0.0, 0.0), circuity, CostTable::default());
        ClusteringEngine::new(config).expect("valid")
    }

    #[test]
    fn test_reordered_input_hits() {
        let e = engine(1.4);
        let mut cache = RunCache::new();
        let first = cache.get_or_run(&e, &societies()).expect("ok");
        let reversed: Vec<Society> = societies().into_iter().rev().collect();
        let second = cache.get_or_run(&e, &reversed).expect("ok");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }

    #[test]
    fn test_config_change_misses() {
        let mut cache = RunCache::new();
        cache.get_or_run(&engine(1.4), &societies()).expect("ok");
        cache.get_or_run(&engine(1.5), &societies()).expect("ok");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_cached_equals_fresh() {
        let e = engine(1.2);
        let mut cache = RunCache::new();
        let cached = cache.get_or_run(&e, &societies()).expect("ok");
        assert_eq!(*cached, e.run(&societies()).expect("ok"));
    }

    #[test]
    fn test_errors_not_cached() {
        let e = engine(1.4);
        let mut cache = RunCache::new();
        let bad = vec![Society::new(1, "a", 95.0, 0.0, 10)];
        assert!(cache.get_or_run(&e, &bad).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_key_tracks_content() {
        let config = ClusteringConfig::default();
        let mut changed = societies();
        changed[2] = Society::new(3, "c", 0.003, 0.0, 31).with_hub(1, "H");
        assert_ne!(run_key(&societies(), &config), run_key(&changed, &config));
    }

    #[test]
    fn test_clear() {
        let mut cache = RunCache::new();
        cache.get_or_run(&engine(1.4), &societies()).expect("ok");
        cache.clear();
        assert!(cache.is_empty());
    }
}
