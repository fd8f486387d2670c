//! Domain model types for hub-scoped delivery clustering.
//!
//! Provides the core abstractions: societies (delivery points) with order
//! volumes and hub membership, cluster kinds with their capacity bands,
//! accepted clusters carrying their delivery sequence, and the run result.

mod cluster;
mod result;
mod society;

pub use cluster::{Cluster, ClusterKind, OrderBand};
pub use result::RunResult;
pub use society::{Coordinate, Society};
