//! What a finished simulation hands to the renderer.

use courier_core::{Coordinate, LabelledRoute};

use crate::pickup::PickupVisit;

/// One completed Loading and Delivering cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// One-based cycle number.
    pub index: usize,
    /// Ids of the orders packed this cycle, in pickup order.
    pub scheduled: Vec<u64>,
    /// Mass carried between pickup and delivery.
    pub bag_mass: u32,
    /// Restaurants visited, one per scheduled order.
    pub visits: Vec<PickupVisit>,
    /// The blue pickup route.
    pub pickup: LabelledRoute,
    /// The red delivery route.
    pub delivery: LabelledRoute,
}

impl CycleReport {
    /// Distance travelled during this cycle.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "sums two phase distances")]
    pub fn distance(&self) -> f64 {
        self.pickup.distance + self.delivery.distance
    }
}

/// Result of a simulation that reached `Done`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    /// Where the courier started and finished.
    pub origin: Coordinate,
    /// Cycles in execution order.
    pub cycles: Vec<CycleReport>,
    /// The final green leg back to the origin.
    pub return_home: LabelledRoute,
    /// Total distance over every phase.
    pub total_distance: f64,
}

impl SimulationReport {
    /// Every recorded route: pickup then delivery per cycle, then the way
    /// home.
    pub fn routes(&self) -> impl Iterator<Item = &LabelledRoute> + '_ {
        self.cycles
            .iter()
            .flat_map(|cycle| [&cycle.pickup, &cycle.delivery])
            .chain(std::iter::once(&self.return_home))
    }

    /// Number of orders delivered across all cycles.
    #[must_use]
    pub fn delivered_orders(&self) -> usize {
        self.cycles.iter().map(|cycle| cycle.scheduled.len()).sum()
    }

    /// Total distance in kilometres.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance / 1_000.0
    }
}
