//! Core domain types for the courier simulation.
//!
//! The crate models what a courier carries and where it goes: specialties,
//! orders, restaurants, coordinates and the routes travelled between them.
//! Constructors validate their input and return `Result` so invalid data is
//! rejected before any planning begins.
//!
//! Distances are measured through the [`DistanceMetric`] trait. Production
//! code uses [`GeodesicDistance`]; tests swap in a planar metric from the
//! `test-support` feature to keep arithmetic exact.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod coordinate;
pub mod distance;
pub mod route;
pub mod specialty;
pub mod stop;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{
    Catalog, CatalogDocument, CatalogError, OrderRecord, RestaurantRecord, SpecialtyRecord,
};
pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{DistanceMetric, GeodesicDistance};
pub use route::{LabelledRoute, Route, RouteColour};
pub use specialty::{DEFAULT_MARKER_COLOUR, Specialty, SpecialtyError};
pub use stop::{Order, Restaurant, Stop};
