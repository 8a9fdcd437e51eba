//! Test-only utilities for `courier-planner`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use std::cell::Cell;

use courier_core::{Coordinate, DistanceMetric};

/// A metric that reports the same distance for every pair of points.
///
/// Makes every candidate equidistant, which isolates tie-breaking.
///
/// # Examples
/// ```rust
/// use courier_core::{Coordinate, DistanceMetric};
/// use courier_planner::test_support::ConstantDistance;
///
/// let metric = ConstantDistance(2.5);
/// let far = metric.distance(Coordinate::new(0.0, 0.0), Coordinate::new(80.0, 170.0));
/// assert_eq!(far, 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDistance(pub f64);

impl DistanceMetric for ConstantDistance {
    fn distance(&self, _from: Coordinate, _to: Coordinate) -> f64 {
        self.0
    }
}

/// Wraps another metric and counts how often it is consulted.
#[derive(Debug, Default)]
pub struct CountingDistance<M> {
    inner: M,
    calls: Cell<usize>,
}

impl<M> CountingDistance<M> {
    /// Start counting calls made to `inner`.
    #[must_use]
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of distances measured so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<M: DistanceMetric> DistanceMetric for CountingDistance<M> {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        self.calls.set(self.calls.get().saturating_add(1));
        self.inner.distance(from, to)
    }
}
