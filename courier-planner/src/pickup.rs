//! Collecting a packed batch from restaurants.

use courier_core::{Coordinate, DistanceMetric, Order, Restaurant, Route};

use crate::PlanError;
use crate::selector::nearest_match;

/// One restaurant stop made during pickup.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupVisit {
    /// Order collected at this stop.
    pub order_id: u64,
    /// Restaurant visited.
    pub restaurant: String,
    /// Distance travelled to reach it.
    pub distance: f64,
}

/// State handed back by [`pickup`].
#[derive(Debug, Clone, PartialEq)]
pub struct PickupOutcome {
    /// Collected orders in pickup order.
    pub bag: Vec<Order>,
    /// Mass of the bag, for reporting only.
    pub mass: u32,
    /// Distance travelled during the phase.
    pub distance: f64,
    /// Where the courier stands afterwards.
    pub position: Coordinate,
    /// Start position followed by every restaurant visited.
    pub route: Route,
    /// Restaurants still available to later cycles.
    pub restaurants: Vec<Restaurant>,
    /// Per-stop narration of the phase.
    pub visits: Vec<PickupVisit>,
}

/// Visit the nearest serving restaurant for each scheduled order in turn.
///
/// When `allow_repeat_visits` is false a visited restaurant leaves the pool
/// for good.
///
/// # Errors
///
/// Returns [`PlanError::UnservedSpecialty`] as soon as an order's specialty
/// has no restaurant left in the pool.
#[expect(
    clippy::float_arithmetic,
    reason = "phase distance accumulates floating-point legs"
)]
pub fn pickup<M>(
    start: Coordinate,
    scheduled: Vec<Order>,
    restaurants: Vec<Restaurant>,
    allow_repeat_visits: bool,
    metric: &M,
) -> Result<PickupOutcome, PlanError>
where
    M: DistanceMetric + ?Sized,
{
    let mut outcome = PickupOutcome {
        bag: Vec::with_capacity(scheduled.len()),
        mass: 0,
        distance: 0.0,
        position: start,
        route: Route::starting_at(start),
        restaurants,
        visits: Vec::with_capacity(scheduled.len()),
    };

    for order in scheduled {
        let Some(found) = nearest_match(
            outcome.position,
            &outcome.restaurants,
            &order.specialty,
            metric,
        ) else {
            return Err(PlanError::UnservedSpecialty {
                specialty: order.specialty.name().to_owned(),
                order_id: order.id,
            });
        };
        let index = found.index;
        let distance = found.distance;
        let stop = found.candidate.coordinate;
        let restaurant_name = found.candidate.name.clone();
        let unit_weight = found.candidate.specialty.unit_weight();

        log::debug!(
            "collecting order {} ({}) at {restaurant_name}, {distance:.2} m away",
            order.id,
            order.specialty
        );

        outcome.mass = outcome.mass.saturating_add(unit_weight);
        outcome.distance += distance;
        outcome.position = stop;
        outcome.route.push(stop);
        outcome.visits.push(PickupVisit {
            order_id: order.id,
            restaurant: restaurant_name,
            distance,
        });
        outcome.bag.push(order);

        if !allow_repeat_visits {
            outcome.restaurants.remove(index);
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::test_support::{PlanarDistance, ids, order, restaurant, specialty};
    use rstest::rstest;

    #[rstest]
    fn visits_nearest_restaurant_per_order() {
        let sushi = specialty("Japonesa", 30.0, 300);
        let pizza = specialty("Italiana", 20.0, 440);
        let restaurants = vec![
            restaurant("Sushi Far", &sushi, 0.0, 9.0),
            restaurant("Pizzeria", &pizza, 3.0, 4.0),
            restaurant("Sushi Near", &sushi, 3.0, 0.0),
        ];
        let scheduled = vec![order(1, &pizza, 0.0, 0.0), order(2, &sushi, 0.0, 0.0)];
        let outcome = pickup(
            Coordinate::new(0.0, 0.0),
            scheduled,
            restaurants,
            true,
            &PlanarDistance,
        )
        .expect("every specialty is served");

        assert_eq!(ids(&outcome.bag), vec![1, 2]);
        assert_eq!(outcome.mass, 740);
        // (0,0) -> (3,4) is 5, then (3,4) -> (3,0) is 4.
        assert_eq!(outcome.distance, 9.0);
        assert_eq!(outcome.position, Coordinate::new(3.0, 0.0));
        assert_eq!(outcome.route.stops().len(), 3);
        assert_eq!(outcome.restaurants.len(), 3);
        let names: Vec<&str> = outcome.visits.iter().map(|v| v.restaurant.as_str()).collect();
        assert_eq!(names, ["Pizzeria", "Sushi Near"]);
    }

    #[rstest]
    fn repeat_visits_reuse_the_same_restaurant() {
        let sushi = specialty("Japonesa", 30.0, 300);
        let restaurants = vec![restaurant("Only Sushi", &sushi, 1.0, 0.0)];
        let scheduled = vec![order(1, &sushi, 0.0, 0.0), order(2, &sushi, 0.0, 0.0)];
        let outcome = pickup(
            Coordinate::new(0.0, 0.0),
            scheduled,
            restaurants,
            true,
            &PlanarDistance,
        )
        .expect("restaurant can be revisited");
        assert_eq!(outcome.bag.len(), 2);
        assert_eq!(outcome.distance, 1.0);
        assert_eq!(outcome.restaurants.len(), 1);
    }

    #[rstest]
    fn consumed_restaurant_leaves_second_order_unserved() {
        let sushi = specialty("Japonesa", 30.0, 300);
        let restaurants = vec![restaurant("Only Sushi", &sushi, 1.0, 0.0)];
        let scheduled = vec![order(1, &sushi, 0.0, 0.0), order(2, &sushi, 0.0, 0.0)];
        let err = pickup(
            Coordinate::new(0.0, 0.0),
            scheduled,
            restaurants,
            false,
            &PlanarDistance,
        )
        .expect_err("second order has no restaurant left");
        assert_eq!(
            err,
            PlanError::UnservedSpecialty {
                specialty: "Japonesa".to_owned(),
                order_id: 2,
            }
        );
    }

    #[rstest]
    fn without_repeats_each_restaurant_is_used_once() {
        let sushi = specialty("Japonesa", 30.0, 300);
        let restaurants = vec![
            restaurant("Near", &sushi, 1.0, 0.0),
            restaurant("Far", &sushi, 5.0, 0.0),
        ];
        let scheduled = vec![order(1, &sushi, 0.0, 0.0), order(2, &sushi, 0.0, 0.0)];
        let outcome = pickup(
            Coordinate::new(0.0, 0.0),
            scheduled,
            restaurants,
            false,
            &PlanarDistance,
        )
        .expect("two restaurants for two orders");
        assert!(outcome.restaurants.is_empty());
        assert_eq!(outcome.distance, 5.0);
        assert_eq!(outcome.position, Coordinate::new(5.0, 0.0));
    }

    #[rstest]
    fn empty_batch_stays_put() {
        let sushi = specialty("Japonesa", 30.0, 300);
        let restaurants = vec![restaurant("Sushi", &sushi, 1.0, 0.0)];
        let start = Coordinate::new(2.0, 2.0);
        let outcome = pickup(start, Vec::new(), restaurants, false, &PlanarDistance)
            .expect("nothing to collect");
        assert!(outcome.bag.is_empty());
        assert_eq!(outcome.position, start);
        assert_eq!(outcome.route.stops(), &[start]);
        assert_eq!(outcome.restaurants.len(), 1);
    }
}
