//! Errors raised while planning or running a simulation.

use thiserror::Error;

/// Fatal conditions that abort a simulation run.
///
/// None of these are retried: the run stops at the first error and no partial
/// report is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A scheduled order's specialty is not prepared by any restaurant left in
    /// the pool.
    #[error("no available restaurant serves specialty {specialty} (needed by order {order_id})")]
    UnservedSpecialty {
        /// Name of the unserved specialty.
        specialty: String,
        /// Order that could not be picked up.
        order_id: u64,
    },
    /// The delivery phase found no match for an order already in the bag.
    #[error(
        "delivery found no order of specialty {specialty} although {remaining} orders remain in the bag"
    )]
    DeliveryInvariant {
        /// Specialty of the reference order.
        specialty: String,
        /// Orders still carried when the search failed.
        remaining: usize,
    },
    /// No order could ever fit in the bag.
    #[error("capacity {capacity} is below the lightest order mass {lightest}")]
    CapacityBelowLightestOrder {
        /// Configured bag capacity.
        capacity: u32,
        /// Mass of the lightest pending order.
        lightest: u32,
    },
    /// A single order is heavier than the whole bag.
    #[error("order {order_id} weighs {mass}, more than the bag capacity {capacity}")]
    OrderExceedsCapacity {
        /// Offending order.
        order_id: u64,
        /// Its mass.
        mass: u32,
        /// Configured bag capacity.
        capacity: u32,
    },
    /// The packer scheduled nothing while orders were still pending.
    #[error("packing scheduled no orders while {pending} remain pending")]
    StalledPacking {
        /// Orders left in the pending pool.
        pending: usize,
    },
    /// The simulation configuration is unusable.
    #[error("invalid simulation configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: &'static str,
    },
}
