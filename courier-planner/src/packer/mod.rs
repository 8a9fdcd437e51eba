//! Hill-climbing selection of the next batch of orders.
//!
//! The packer searches over orderings of the pending pool. An ordering is
//! scored by its capacity-feasible prefix: the earlier an urgent (low
//! commitment weight) order sits in that prefix, the better. Each iteration
//! evaluates every pairwise swap and moves to the best one if it strictly
//! improves the score. The search stops at the iteration cap, or once it has
//! stagnated for more than a tenth of that cap.
//!
//! The converged ordering is cut at the first order that would overflow the
//! bag. Everything after the cut, including lighter orders that might still
//! have fitted, stays pending for a later cycle.

use std::cmp::Ordering;

use courier_core::Order;

/// Positional decay applied to commitment weights inside the prefix.
pub const POSITION_DECAY: f64 = 0.9;

/// Score of one ordering; larger is better.
///
/// Compares first by the negated decayed commitment sum, then by the number
/// of orders in the feasible prefix.
#[derive(Debug, Clone, Copy)]
pub struct Fitness {
    weighted_commitment: f64,
    count: usize,
}

impl Fitness {
    /// Decayed commitment sum `S` over the feasible prefix.
    #[must_use]
    pub const fn weighted_commitment(&self) -> f64 {
        self.weighted_commitment
    }

    /// Number of orders in the feasible prefix.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl PartialEq for Fitness {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fitness {}

impl PartialOrd for Fitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fitness {
    fn cmp(&self, other: &Self) -> Ordering {
        // A smaller sum means a larger `-S`.
        other
            .weighted_commitment
            .total_cmp(&self.weighted_commitment)
            .then_with(|| self.count.cmp(&other.count))
    }
}

/// Number of leading orders whose cumulative mass stays within `capacity`.
#[must_use]
pub fn feasible_prefix_len(orders: &[Order], capacity: u32) -> usize {
    let mut mass = 0_u32;
    orders
        .iter()
        .take_while(|order| match mass.checked_add(order.mass()) {
            Some(next) if next <= capacity => {
                mass = next;
                true
            }
            _ => false,
        })
        .count()
}

/// Score `orders` against `capacity`.
///
/// # Examples
/// ```
/// use courier_core::test_support::{order, specialty};
/// use courier_planner::packer::fitness;
///
/// let urgent = specialty("Hindú", 10.0, 400);
/// let relaxed = specialty("Argentina", 50.0, 500);
/// let pool = vec![order(1, &urgent, 0.0, 0.0), order(2, &relaxed, 0.0, 0.0)];
/// let score = fitness(&pool, 800);
/// assert_eq!(score.count(), 1);
/// assert_eq!(score.weighted_commitment(), 10.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the objective is a decayed floating-point sum"
)]
pub fn fitness(orders: &[Order], capacity: u32) -> Fitness {
    let count = feasible_prefix_len(orders, capacity);
    let mut decay = 1.0;
    let mut weighted_commitment = 0.0;
    for order in orders.iter().take(count) {
        weighted_commitment += order.commitment_weight() * decay;
        decay *= POSITION_DECAY;
    }
    Fitness {
        weighted_commitment,
        count,
    }
}

/// How the hill climb progressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbTrace {
    /// Fitness of the current ordering before the first iteration and after
    /// each one.
    pub history: Vec<Fitness>,
    /// Iterations performed.
    pub iterations: usize,
    /// Iterations that moved to a better ordering.
    pub improvements: usize,
}

impl ClimbTrace {
    /// Fitness of the converged ordering.
    #[must_use]
    pub fn final_fitness(&self) -> Option<Fitness> {
        self.history.last().copied()
    }
}

/// Result of one packing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    /// Orders to load this cycle, in pickup order.
    pub scheduled: Vec<Order>,
    /// Orders left pending, in converged order.
    pub remaining: Vec<Order>,
    /// Search diagnostics.
    pub trace: ClimbTrace,
}

impl Packing {
    /// Total mass of the scheduled orders.
    #[must_use]
    pub fn scheduled_mass(&self) -> u32 {
        self.scheduled
            .iter()
            .fold(0_u32, |mass, order| mass.saturating_add(order.mass()))
    }
}

/// Steepest-ascent hill climb over pairwise swaps of the pending pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPacker {
    capacity: u32,
    max_iterations: usize,
}

impl BatchPacker {
    /// Construct a packer for a bag of `capacity` mass units.
    #[must_use]
    pub const fn new(capacity: u32, max_iterations: usize) -> Self {
        Self {
            capacity,
            max_iterations,
        }
    }

    /// Bag capacity in mass units.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Iteration cap for the hill climb.
    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Split `pending` into the next batch and the orders left over.
    ///
    /// The union of `scheduled` and `remaining` is always a permutation of
    /// `pending`, and the mass of `scheduled` never exceeds the capacity.
    #[must_use]
    pub fn pack(&self, pending: Vec<Order>) -> Packing {
        let mut current = pending;
        let mut current_fitness = fitness(&current, self.capacity);
        let mut trace = ClimbTrace {
            history: vec![current_fitness],
            iterations: 0,
            improvements: 0,
        };
        let mut stagnation = 0_usize;

        while trace.iterations < self.max_iterations {
            let Some(best) = self.best_swap(&mut current) else {
                break;
            };
            trace.iterations = trace.iterations.saturating_add(1);
            if best.fitness > current_fitness {
                current.swap(best.first, best.second);
                current_fitness = best.fitness;
                trace.improvements = trace.improvements.saturating_add(1);
                stagnation = 0;
            } else {
                stagnation = stagnation.saturating_add(1);
            }
            trace.history.push(current_fitness);
            if stagnation.saturating_mul(10) > self.max_iterations {
                break;
            }
        }

        log::debug!(
            "hill climb stopped after {} iterations ({} improving) with {} orders in the feasible prefix",
            trace.iterations,
            trace.improvements,
            current_fitness.count()
        );

        let cut = feasible_prefix_len(&current, self.capacity);
        let remaining = current.split_off(cut);
        Packing {
            scheduled: current,
            remaining,
            trace,
        }
    }

    /// Evaluate every `i < j` swap in place and return the best one.
    ///
    /// The first maximum in enumeration order wins. Returns `None` when the
    /// ordering has fewer than two orders.
    fn best_swap(&self, ordering: &mut [Order]) -> Option<Swap> {
        let len = ordering.len();
        let mut best: Option<Swap> = None;
        for first in 0..len {
            for second in first.saturating_add(1)..len {
                ordering.swap(first, second);
                let candidate = fitness(ordering, self.capacity);
                ordering.swap(first, second);
                if best.is_none_or(|current| candidate > current.fitness) {
                    best = Some(Swap {
                        first,
                        second,
                        fitness: candidate,
                    });
                }
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy)]
struct Swap {
    first: usize,
    second: usize,
    fitness: Fitness,
}
