//! Route sequencing for a single cluster.
//!
//! - [`Sequencer`]: nearest-neighbor visiting order from a fixed depot, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{Sequencer, Tour};
