//! Test-only builders and a planar distance metric used by unit, behaviour
//! and property tests across the workspace.

use std::sync::Arc;

use crate::{Coordinate, DistanceMetric, Order, Restaurant, Specialty};

/// Euclidean distance over raw degrees.
///
/// Keeps test arithmetic exact: `(0, 0)` to `(3, 4)` is `5.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlanarDistance;

impl DistanceMetric for PlanarDistance {
    #[expect(
        clippy::float_arithmetic,
        reason = "distance calculation requires floating-point arithmetic"
    )]
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        let dlat = from.latitude - to.latitude;
        let dlon = from.longitude - to.longitude;
        dlat.hypot(dlon)
    }
}

/// Construct a shared specialty without validation.
///
/// # Examples
/// ```rust
/// use courier_core::test_support::specialty;
///
/// let pizza = specialty("Pizza", 10.0, 400);
/// assert_eq!(pizza.unit_weight(), 400);
/// ```
#[must_use]
pub fn specialty(name: &str, commitment_weight: f64, unit_weight: u32) -> Arc<Specialty> {
    Arc::new(Specialty {
        name: name.to_owned(),
        commitment_weight,
        unit_weight,
        marker_colour: crate::specialty::DEFAULT_MARKER_COLOUR.to_owned(),
    })
}

/// Construct an order at `(latitude, longitude)`.
#[must_use]
pub fn order(id: u64, specialty: &Arc<Specialty>, latitude: f64, longitude: f64) -> Order {
    Order::new(
        id,
        Arc::clone(specialty),
        format!("Address {id}"),
        Coordinate::new(latitude, longitude),
    )
}

/// Construct a restaurant at `(latitude, longitude)`.
#[must_use]
pub fn restaurant(
    name: &str,
    specialty: &Arc<Specialty>,
    latitude: f64,
    longitude: f64,
) -> Restaurant {
    Restaurant::new(
        name,
        format!("{name} street"),
        Arc::clone(specialty),
        Coordinate::new(latitude, longitude),
    )
}

/// Identifiers of `orders`, in order.
#[must_use]
pub fn ids(orders: &[Order]) -> Vec<u64> {
    orders.iter().map(|order| order.id).collect()
}
