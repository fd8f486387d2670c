//! Hub-scoped, capacity-banded clustering.
//!
//! - [`ClusteringEngine`]: Main → Mini → Micro greedy passes per hub, then
//!   an Unclustered sweep
//! - [`run_clustering`]: one-off run from a configuration
//! - [`RunCache`]: memoized runs keyed by an explicit input hash

mod cache;
mod engine;
mod pool;

pub use cache::{run_key, RunCache};
pub use engine::{run_clustering, ClusteringEngine};
