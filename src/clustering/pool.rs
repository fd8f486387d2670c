//! Per-hub pool of unassigned societies.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::distance::great_circle_km;
use crate::models::Society;

/// Index-based view of one hub's still-unassigned societies.
///
/// Indices point into the run's arena, which is sorted by society id, so
/// ascending index order is ascending id order.
#[derive(Debug, Clone)]
pub(crate) struct HubPool<'a> {
    hub_name: &'a str,
    arena: &'a [Society],
    unassigned: BTreeSet<usize>,
}

impl<'a> HubPool<'a> {
    pub(crate) fn new<I>(hub_name: &'a str, arena: &'a [Society], members: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            hub_name,
            arena,
            unassigned: members.into_iter().collect(),
        }
    }

    pub(crate) fn hub_name(&self) -> &'a str {
        self.hub_name
    }

    pub(crate) fn society(&self, idx: usize) -> &'a Society {
        &self.arena[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.unassigned.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.unassigned.is_empty()
    }

    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.unassigned.contains(&idx)
    }

    /// Unassigned societies by descending orders, then ascending id.
    pub(crate) fn seeds(&self) -> Vec<usize> {
        let mut seeds: Vec<usize> = self.unassigned.iter().copied().collect();
        self.sort_by_volume(&mut seeds);
        seeds
    }

    /// Unassigned societies other than `seed`, optionally restricted to a
    /// great-circle radius around it, by descending orders then ascending id.
    pub(crate) fn neighbors(&self, seed: usize, radius_km: Option<f64>) -> Vec<usize> {
        let origin = self.arena[seed].location();
        let mut neighbors: Vec<usize> = self
            .unassigned
            .iter()
            .copied()
            .filter(|&idx| idx != seed)
            .filter(|&idx| {
                radius_km.map_or(true, |r| great_circle_km(origin, self.arena[idx].location()) < r)
            })
            .collect();
        self.sort_by_volume(&mut neighbors);
        neighbors
    }

    /// Removes accepted members from the pool.
    pub(crate) fn take(&mut self, members: &[usize]) {
        for idx in members {
            self.unassigned.remove(idx);
        }
    }

    /// Empties the pool, returning what was left in ascending id order.
    pub(crate) fn drain(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.unassigned).into_iter().collect()
    }

    fn sort_by_volume(&self, indices: &mut [usize]) {
        indices.sort_by_key(|&idx| {
            let s = &self.arena[idx];
            (Reverse(s.orders()), s.id())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<Society> {
        vec![
            Society::new(1, "a", 0.0, 0.0, 50),
            Society::new(2, "b", 0.0, 0.01, 80),
            Society::new(3, "c", 0.0, 0.05, 80),
            Society::new(4, "d", 0.0, 0.005, 20),
        ]
    }

    #[test]
    fn test_seed_order() {
        let arena = arena();
        let pool = HubPool::new("h", &arena, 0..arena.len());
        // 80 (id 2), 80 (id 3), 50, 20
        assert_eq!(pool.seeds(), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_neighbors_within_radius() {
        let arena = arena();
        let pool = HubPool::new("h", &arena, 0..arena.len());
        // id 3 sits about 5.6 km away and is excluded.
        assert_eq!(pool.neighbors(0, Some(2.0)), vec![1, 3]);
        assert_eq!(pool.neighbors(0, None), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_and_drain() {
        let arena = arena();
        let mut pool = HubPool::new("h", &arena, 0..arena.len());
        pool.take(&[1, 3]);
        assert_eq!(pool.len(), 2);
        assert!(!pool.contains(1));
        assert!(pool.contains(2));
        assert_eq!(pool.neighbors(0, None), vec![2]);
        assert_eq!(pool.drain(), vec![0, 2]);
        assert!(pool.is_empty());
    }
}
