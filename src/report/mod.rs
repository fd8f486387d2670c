//! Run summaries for tabular reporting.
//!
//! Reads clusters only; nothing here feeds back into clustering.

mod summary;

pub use summary::{summarize, summarize_by_kind, ClusterSummary, KindSummary};
