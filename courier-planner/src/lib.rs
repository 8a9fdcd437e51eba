//! Batch planning and simulation for a single courier.
//!
//! The crate composes two heuristics into a simulation loop:
//!
//! - [`packer::BatchPacker`] hill-climbs over orderings of the pending pool to
//!   pick an urgency-ordered batch that fits the bag.
//! - [`nearest_match`] performs a best-first search for the closest stop
//!   serving a specialty, used by both [`pickup()`] and [`deliver()`].
//!
//! [`Simulation`] drives repeated pack, pickup and delivery cycles until no
//! order is pending, then returns the courier to the origin and hands back a
//! [`SimulationReport`] for rendering. Distances are measured through the
//! [`DistanceMetric`](courier_core::DistanceMetric) seam, so tests can swap the
//! geodesic metric for planar arithmetic.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod delivery;
mod error;
pub mod packer;
pub mod pickup;
pub mod selector;
pub mod simulation;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use delivery::{DeliveryOutcome, deliver};
pub use error::PlanError;
pub use packer::{BatchPacker, Fitness, Packing};
pub use pickup::{PickupOutcome, PickupVisit, pickup};
pub use selector::{Match, nearest_match};
pub use simulation::{
    CycleReport, DEFAULT_CAPACITY, DEFAULT_MAX_HILL_CLIMB_ITERATIONS, Phase, Simulation,
    SimulationConfig, SimulationReport, SimulationRun,
};
