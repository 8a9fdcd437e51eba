//! Best-first search for the nearest stop serving a specialty.
//!
//! Used by both phases: restaurants during pickup, the bag itself during
//! delivery. The search never mutates its candidates; callers remove the
//! chosen entry using [`Match::index`].

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use courier_core::{Coordinate, DistanceMetric, Specialty, Stop};

/// The closest matching candidate found by [`nearest_match`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a, T> {
    /// Position of the candidate in the searched slice.
    pub index: usize,
    /// The candidate itself.
    pub candidate: &'a T,
    /// Distance from the search origin to the candidate.
    pub distance: f64,
}

/// Frontier entry ordered by distance, then by insertion position.
#[derive(Debug, Clone, Copy)]
struct Ranked {
    distance: f64,
    index: usize,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Find the candidate serving `specialty` closest to `from`.
///
/// Every matching candidate is pushed onto a min-priority frontier keyed by
/// distance; the head of the frontier wins. Equal distances resolve to the
/// candidate that appears first in `candidates`. Returns `None` when nothing
/// matches.
///
/// # Examples
/// ```
/// use courier_core::test_support::{PlanarDistance, restaurant, specialty};
/// use courier_core::Coordinate;
/// use courier_planner::nearest_match;
///
/// let sushi = specialty("Japonesa", 30.0, 300);
/// let pizza = specialty("Italiana", 20.0, 440);
/// let pool = vec![
///     restaurant("Far", &sushi, 5.0, 0.0),
///     restaurant("Pizzeria", &pizza, 1.0, 0.0),
///     restaurant("Near", &sushi, 2.0, 0.0),
/// ];
/// let found = nearest_match(Coordinate::new(0.0, 0.0), &pool, &sushi, &PlanarDistance)
///     .expect("a sushi restaurant");
/// assert_eq!(found.index, 2);
/// assert_eq!(found.distance, 2.0);
/// ```
pub fn nearest_match<'a, T, M>(
    from: Coordinate,
    candidates: &'a [T],
    specialty: &Specialty,
    metric: &M,
) -> Option<Match<'a, T>>
where
    T: Stop,
    M: DistanceMetric + ?Sized,
{
    let mut frontier = BinaryHeap::new();
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.serves(specialty) {
            let distance = metric.distance(from, candidate.coordinate());
            frontier.push(Reverse(Ranked { distance, index }));
        }
    }
    let Reverse(best) = frontier.pop()?;
    candidates.get(best.index).map(|candidate| Match {
        index: best.index,
        candidate,
        distance: best.distance,
    })
}
