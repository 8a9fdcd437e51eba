//! Facade crate for the courier batch-delivery simulator.
//!
//! Re-exports the catalogue model from `courier-core` and the packing,
//! pickup, delivery and simulation machinery from `courier-planner`, so
//! embedders can depend on a single crate.

#![forbid(unsafe_code)]

pub use courier_core::{
    Catalog, CatalogDocument, CatalogError, Coordinate, CoordinateError, DistanceMetric,
    GeodesicDistance, LabelledRoute, Order, Restaurant, Route, RouteColour, Specialty,
    SpecialtyError, Stop,
};
pub use courier_planner::{
    BatchPacker, CycleReport, DEFAULT_CAPACITY, DEFAULT_MAX_HILL_CLIMB_ITERATIONS,
    DeliveryOutcome, Fitness, Packing, Phase, PickupOutcome, PickupVisit, PlanError, Simulation,
    SimulationConfig, SimulationReport, SimulationRun, deliver, nearest_match, pickup,
};

#[cfg(feature = "test-support")]
pub use courier_core::test_support;
