//! Nearest-neighbor delivery sequencing.
//!
//! Starting at the depot, always drive to the nearest unvisited society,
//! then return to the depot once every society is visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Tie-break
//!
//! Stops are scanned in ascending society id and only a strictly shorter
//! leg replaces the current best, so equal distances resolve to the lowest
//! id regardless of input order.

use crate::distance::{round_km, scaled_distance_km};
use crate::models::{Coordinate, Society};

/// A visiting order with its round-trip distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Society ids in visiting order, depot excluded.
    pub stops: Vec<u64>,
    /// Depot → stops → depot distance in scaled kilometres, full precision.
    pub distance_km: f64,
    /// Scaled distance of the final leg back from the last stop.
    pub return_leg_km: f64,
}

impl Tour {
    fn empty() -> Self {
        Self {
            stops: Vec::new(),
            distance_km: 0.0,
            return_leg_km: 0.0,
        }
    }

    /// Round-trip distance rounded to two decimals.
    pub fn rounded_distance_km(&self) -> f64 {
        round_km(self.distance_km)
    }

    /// Returns `true` if the tour visits no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Sequences stops from a fixed depot with a fixed circuity factor.
///
/// # Examples
///
/// ```
/// use u_clustering::models::{Coordinate, Society};
/// use u_clustering::sequencing::Sequencer;
///
/// let stops = vec![
///     Society::new(1, "far", 0.0, 0.02, 10),
///     Society::new(2, "near", 0.0, 0.01, 10),
/// ];
/// let sequencer = Sequencer::new(Coordinate::new(0.0, 0.0), 1.0);
/// let tour = sequencer.sequence(&stops);
/// assert_eq!(tour.stops, vec![2, 1]);
/// assert!(tour.distance_km > 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sequencer {
    depot: Coordinate,
    circuity_factor: f64,
}

impl Sequencer {
    /// Creates a sequencer for the given depot and circuity factor.
    pub fn new(depot: Coordinate, circuity_factor: f64) -> Self {
        Self {
            depot,
            circuity_factor,
        }
    }

    /// Depot every tour starts and ends at.
    pub fn depot(&self) -> Coordinate {
        self.depot
    }

    /// Multiplier applied to every great-circle leg.
    pub fn circuity_factor(&self) -> f64 {
        self.circuity_factor
    }

    /// Scaled distance between two coordinates.
    pub fn leg_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        scaled_distance_km(from, to, self.circuity_factor)
    }

    /// Builds a nearest-neighbor tour over `stops`.
    ///
    /// An empty input yields an empty tour with zero distance.
    pub fn sequence<'a, I>(&self, stops: I) -> Tour
    where
        I: IntoIterator<Item = &'a Society>,
    {
        let mut unvisited: Vec<&Society> = stops.into_iter().collect();
        if unvisited.is_empty() {
            return Tour::empty();
        }
        unvisited.sort_by_key(|s| s.id());

        let mut order = Vec::with_capacity(unvisited.len());
        let mut current = self.depot;
        let mut total = 0.0;

        while !unvisited.is_empty() {
            let mut best: Option<(usize, f64)> = None;
            for (i, s) in unvisited.iter().enumerate() {
                let d = self.leg_km(current, s.location());
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((i, d));
                }
            }
            let Some((next, leg)) = best else { break };
            let stop = unvisited.remove(next);
            total += leg;
            current = stop.location();
            order.push(stop.id());
        }

        let return_leg = self.leg_km(current, self.depot);
        total += return_leg;

        Tour {
            stops: order,
            distance_km: total,
            return_leg_km: return_leg,
        }
    }
}
