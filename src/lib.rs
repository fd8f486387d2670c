//! # u-clustering
//!
//! Delivery clustering for hub-grouped delivery points: groups societies
//! into capacity-banded clusters (Main, Mini, Micro) and sequences each
//! cluster's route from a depot with a nearest-neighbor heuristic over
//! circuity-scaled great-circle distance.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Society, ClusterKind, Cluster, RunResult)
//! - [`distance`]: Haversine distance scaled by a circuity factor
//! - [`sequencing`]: Nearest-neighbor visiting order and round-trip distance
//! - [`evaluation`]: Cluster acceptance rules per kind
//! - [`clustering`]: Multi-pass clustering engine and run cache
//! - [`config`]: Depot, circuity factor and cost table
//! - [`report`]: Per-cluster and per-kind summaries
//! - [`error`]: Configuration and input errors

pub mod clustering;
pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod report;
pub mod sequencing;
