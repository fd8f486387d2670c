//! Candidate cluster validation.
//!
//! Checks a candidate's order total against its kind's band and, for Micro
//! clusters, how far the route's last stop lies from the depot.

mod validator;

pub use validator::{ClusterValidator, Rejection, MICRO_MAX_LAST_STOP_KM};
