//! Emptying the bag at delivery addresses.
//!
//! The head of the bag picks the specialty; the courier then drives to the
//! closest remaining order of that specialty. Deliveries therefore cluster by
//! specialty before distance across specialties is considered.

use std::sync::Arc;

use courier_core::{Coordinate, DistanceMetric, Order, Route};

use crate::PlanError;
use crate::selector::nearest_match;

/// State handed back by [`deliver`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryOutcome {
    /// Orders in the sequence they were delivered.
    pub delivered: Vec<Order>,
    /// Distance travelled during the phase.
    pub distance: f64,
    /// Where the courier stands afterwards.
    pub position: Coordinate,
    /// Start position followed by every delivery address.
    pub route: Route,
}

/// Deliver every order in `bag`, starting from `start`.
///
/// # Errors
///
/// Returns [`PlanError::DeliveryInvariant`] if the search finds nothing while
/// the bag is non-empty. The reference order always matches itself, so this
/// indicates a corrupted bag.
#[expect(
    clippy::float_arithmetic,
    reason = "phase distance accumulates floating-point legs"
)]
pub fn deliver<M>(
    start: Coordinate,
    bag: Vec<Order>,
    metric: &M,
) -> Result<DeliveryOutcome, PlanError>
where
    M: DistanceMetric + ?Sized,
{
    let mut remaining = bag;
    let mut outcome = DeliveryOutcome {
        delivered: Vec::with_capacity(remaining.len()),
        distance: 0.0,
        position: start,
        route: Route::starting_at(start),
    };

    while let Some(reference) = remaining.first() {
        let specialty = Arc::clone(&reference.specialty);
        let Some(found) = nearest_match(outcome.position, &remaining, &specialty, metric) else {
            return Err(PlanError::DeliveryInvariant {
                specialty: specialty.name().to_owned(),
                remaining: remaining.len(),
            });
        };
        let index = found.index;
        let distance = found.distance;
        let order = remaining.remove(index);

        log::debug!(
            "delivering order {} ({specialty}) to {}, {distance:.2} m away",
            order.id,
            order.address
        );

        outcome.distance += distance;
        outcome.position = order.coordinate;
        outcome.route.push(order.coordinate);
        outcome.delivered.push(order);
    }

    Ok(outcome)
}
