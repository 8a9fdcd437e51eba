//! Places a courier can travel to: restaurants and delivery addresses.

use std::sync::Arc;

use crate::{Coordinate, Specialty};

/// Anything with a position and a specialty that the courier may visit.
///
/// The nearest-match selector is generic over this trait so the same search
/// serves restaurants during pickup and orders during delivery.
pub trait Stop {
    /// Where the stop is.
    fn coordinate(&self) -> Coordinate;

    /// The specialty served or requested at this stop.
    fn specialty(&self) -> &Specialty;

    /// Whether this stop matches `specialty`.
    fn serves(&self, specialty: &Specialty) -> bool {
        self.specialty() == specialty
    }
}

/// A customer order awaiting pickup and delivery.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use courier_core::{Coordinate, Order, Specialty};
///
/// # fn main() -> Result<(), courier_core::SpecialtyError> {
/// let italiana = Arc::new(Specialty::new("Italiana", 20.0, 440)?);
/// let order = Order::new(1, italiana, "La Riera 8", Coordinate::new(41.54, 2.44));
/// assert_eq!(order.mass(), 440);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: u64,
    /// Requested specialty.
    pub specialty: Arc<Specialty>,
    /// Display address.
    pub address: String,
    /// Delivery position.
    pub coordinate: Coordinate,
}

impl Order {
    /// Construct an order.
    pub fn new(
        id: u64,
        specialty: Arc<Specialty>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            specialty,
            address: address.into(),
            coordinate,
        }
    }

    /// Mass the order adds to the bag.
    #[must_use]
    pub fn mass(&self) -> u32 {
        self.specialty.unit_weight()
    }

    /// Urgency inherited from the specialty.
    #[must_use]
    pub fn commitment_weight(&self) -> f64 {
        self.specialty.commitment_weight()
    }
}

impl Stop for Order {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn specialty(&self) -> &Specialty {
        &self.specialty
    }
}

/// A restaurant able to prepare one specialty.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// Display name.
    pub name: String,
    /// Display address.
    pub address: String,
    /// Specialty prepared here.
    pub specialty: Arc<Specialty>,
    /// Pickup position.
    pub coordinate: Coordinate,
}

impl Restaurant {
    /// Construct a restaurant.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        specialty: Arc<Specialty>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            specialty,
            coordinate,
        }
    }
}

impl Stop for Restaurant {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn specialty(&self) -> &Specialty {
        &self.specialty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn japonesa() -> Arc<Specialty> {
        Arc::new(Specialty::new("Japonesa", 30.0, 300).expect("valid specialty"))
    }

    #[rstest]
    fn order_mass_follows_specialty(japonesa: Arc<Specialty>) {
        let order = Order::new(2, japonesa, "Sant Benet 8", Coordinate::new(41.53, 2.44));
        assert_eq!(order.mass(), 300);
        assert_eq!(order.commitment_weight(), 30.0);
    }

    #[rstest]
    fn stops_serve_their_own_specialty(japonesa: Arc<Specialty>) {
        let restaurant = Restaurant::new(
            "Katsumi Sushi",
            "Plaça d'Espanya 18",
            Arc::clone(&japonesa),
            Coordinate::new(41.544, 2.441),
        );
        let other = Specialty::new("Xinesa", 32.0, 350).expect("valid specialty");
        assert!(restaurant.serves(&japonesa));
        assert!(!restaurant.serves(&other));
    }
}
