//! Cluster acceptance rules.

use std::fmt;

use crate::distance::round_km;
use crate::models::{ClusterKind, OrderBand, Society};
use crate::sequencing::{Sequencer, Tour};

/// A Micro cluster's last stop must lie closer than this to the depot
/// (scaled kilometres, compared after rounding to two decimals).
pub const MICRO_MAX_LAST_STOP_KM: f64 = 15.0;

/// Why a candidate cluster was turned down.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Total orders fall outside the kind's band.
    OrdersOutOfBand {
        /// Kind the candidate was built for.
        kind: ClusterKind,
        /// Candidate total.
        orders: u32,
        /// Accepted band.
        band: OrderBand,
    },
    /// The final stop of a Micro route is too far from the depot.
    LastStopTooFar {
        /// Rounded depot-to-last-stop distance.
        distance_km: f64,
        /// Exclusive limit.
        limit_km: f64,
    },
    /// `Unclustered` is a fallback, never a candidate kind.
    NotClusterable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OrdersOutOfBand { kind, orders, band } => {
                write!(f, "{orders} orders outside {kind} band {band}")
            }
            Rejection::LastStopTooFar {
                distance_km,
                limit_km,
            } => write!(f, "last stop {distance_km:.2} km from depot (limit {limit_km} km)"),
            Rejection::NotClusterable => f.write_str("kind is not clusterable"),
        }
    }
}

/// Decides whether a candidate grouping becomes a cluster.
///
/// | Kind  | Orders    | Extra condition                     |
/// |-------|-----------|-------------------------------------|
/// | Main  | 180–220   | none                                |
/// | Mini  | 121–179   | none                                |
/// | Micro | 1–120     | depot → last stop < 15.0 km (scaled) |
///
/// Accepted candidates come back with their [`Tour`], so the caller never
/// sequences the same members twice.
///
/// # Examples
///
/// ```
/// use u_clustering::models::{ClusterKind, Coordinate, Society};
/// use u_clustering::sequencing::Sequencer;
/// use u_clustering::evaluation::ClusterValidator;
///
/// let members = vec![
///     Society::new(1, "a", 0.0, 0.001, 100),
///     Society::new(2, "b", 0.0, 0.002, 80),
/// ];
/// let validator = ClusterValidator::new(Sequencer::new(Coordinate::new(0.0, 0.0), 1.0));
/// let tour = validator.validate(ClusterKind::Main, &members).unwrap();
/// assert_eq!(tour.stops, vec![1, 2]);
/// assert!(validator.validate(ClusterKind::Mini, &members).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClusterValidator {
    sequencer: Sequencer,
}

impl ClusterValidator {
    /// Creates a validator that sequences candidates with `sequencer`.
    pub fn new(sequencer: Sequencer) -> Self {
        Self { sequencer }
    }

    /// The sequencer used for distance checks.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Validates `members` as a cluster of `kind`.
    pub fn validate<'a, I>(&self, kind: ClusterKind, members: I) -> Result<Tour, Rejection>
    where
        I: IntoIterator<Item = &'a Society>,
        I::IntoIter: Clone,
    {
        let members = members.into_iter();
        let band = kind.band().ok_or(Rejection::NotClusterable)?;
        let orders = members
            .clone()
            .fold(0u32, |acc, s| acc.saturating_add(s.orders()));
        if !band.contains(orders) {
            return Err(Rejection::OrdersOutOfBand { kind, orders, band });
        }

        let tour = self.sequencer.sequence(members);
        if kind == ClusterKind::Micro {
            let distance_km = round_km(tour.return_leg_km);
            if distance_km >= MICRO_MAX_LAST_STOP_KM {
                return Err(Rejection::LastStopTooFar {
                    distance_km,
                    limit_km: MICRO_MAX_LAST_STOP_KM,
                });
            }
        }
        Ok(tour)
    }
}
