//! The read-only input of a simulation: origin, specialties, orders and
//! restaurants.
//!
//! Catalogues are usually decoded from a JSON [`CatalogDocument`] and then
//! validated into shared domain values by [`Catalog::from_document`]:
//! specialty names are resolved into `Arc<Specialty>` references so every
//! order and restaurant of a specialty points at the same value.

mod document;
mod error;

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::sync::Arc;

pub use document::{CatalogDocument, OrderRecord, RestaurantRecord, SpecialtyRecord};
pub use error::CatalogError;

use crate::{Coordinate, Order, Restaurant, Specialty};

/// Validated simulation input.
///
/// # Examples
/// ```
/// use courier_core::Catalog;
///
/// # fn main() -> Result<(), courier_core::CatalogError> {
/// let json = r#"{
///     "origin": { "latitude": 41.528, "longitude": 2.434 },
///     "specialties": [{ "name": "Catalana", "commitment_weight": 15, "unit_weight": 400 }],
///     "orders": [{
///         "id": 5, "specialty": "Catalana", "address": "Plaça de Catalunya 28",
///         "coordinate": { "latitude": 41.538, "longitude": 2.432 }
///     }],
///     "restaurants": [{
///         "name": "Bar Europa", "address": "Camí Ral de la Mercè 468", "specialty": "Catalana",
///         "coordinate": { "latitude": 41.536, "longitude": 2.442 }
///     }]
/// }"#;
/// let catalog = Catalog::from_json_str(json)?;
/// assert_eq!(catalog.orders().len(), 1);
/// assert_eq!(catalog.lightest_unit_weight(), Some(400));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    origin: Coordinate,
    specialties: Vec<Arc<Specialty>>,
    orders: Vec<Order>,
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Assemble a catalogue from already-built domain values.
    ///
    /// No cross-validation is performed; prefer [`Catalog::from_document`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(
        origin: Coordinate,
        specialties: Vec<Arc<Specialty>>,
        orders: Vec<Order>,
        restaurants: Vec<Restaurant>,
    ) -> Self {
        Self {
            origin,
            specialties,
            orders,
            restaurants,
        }
    }

    /// Decode and validate a JSON catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and any validation
    /// error raised by [`Catalog::from_document`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Decode and validate a JSON catalogue from a reader.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Validate a decoded document and resolve specialty references.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for invalid or duplicate specialties,
    /// unknown specialty references, duplicate order ids and invalid
    /// coordinates.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let CatalogDocument {
            origin,
            specialties: specialty_records,
            orders: order_records,
            restaurants: restaurant_records,
        } = document;

        origin
            .validate()
            .map_err(|source| CatalogError::InvalidCoordinate {
                owner: "origin".to_owned(),
                source,
            })?;

        let mut by_name: HashMap<String, Arc<Specialty>> = HashMap::new();
        let mut specialties = Vec::with_capacity(specialty_records.len());
        for record in specialty_records {
            let mut specialty =
                Specialty::new(record.name, record.commitment_weight, record.unit_weight)?;
            if let Some(colour) = record.marker_colour {
                specialty = specialty.with_marker_colour(colour);
            }
            if by_name.contains_key(specialty.name()) {
                return Err(CatalogError::DuplicateSpecialty {
                    name: specialty.name().to_owned(),
                });
            }
            let shared = Arc::new(specialty);
            by_name.insert(shared.name().to_owned(), Arc::clone(&shared));
            specialties.push(shared);
        }

        let mut seen_ids = HashSet::new();
        let mut orders = Vec::with_capacity(order_records.len());
        for record in order_records {
            let owner = format!("order {}", record.id);
            if !seen_ids.insert(record.id) {
                return Err(CatalogError::DuplicateOrderId { id: record.id });
            }
            let specialty = resolve(&by_name, &owner, &record.specialty)?;
            let coordinate = checked(record.coordinate, &owner)?;
            orders.push(Order::new(record.id, specialty, record.address, coordinate));
        }

        let mut restaurants = Vec::with_capacity(restaurant_records.len());
        for record in restaurant_records {
            let owner = format!("restaurant {}", record.name);
            let specialty = resolve(&by_name, &owner, &record.specialty)?;
            let coordinate = checked(record.coordinate, &owner)?;
            restaurants.push(Restaurant::new(
                record.name,
                record.address,
                specialty,
                coordinate,
            ));
        }

        log::debug!(
            "loaded catalogue with {} specialties, {} orders and {} restaurants",
            specialties.len(),
            orders.len(),
            restaurants.len()
        );

        Ok(Self::new(origin, specialties, orders, restaurants))
    }

    /// Where the courier starts and returns.
    #[must_use]
    pub const fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Every defined specialty, in document order.
    #[must_use]
    pub fn specialties(&self) -> &[Arc<Specialty>] {
        &self.specialties
    }

    /// Orders to deliver, in document order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Restaurants available for pickup, in document order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Look up a specialty by name.
    #[must_use]
    pub fn specialty(&self, name: &str) -> Option<&Arc<Specialty>> {
        self.specialties.iter().find(|s| s.name() == name)
    }

    /// Smallest unit weight among all defined specialties.
    #[must_use]
    pub fn lightest_unit_weight(&self) -> Option<u32> {
        self.specialties.iter().map(|s| s.unit_weight()).min()
    }

    /// Specialties requested by at least one order but served by no
    /// restaurant, in first-requested order.
    #[must_use]
    pub fn unserved_specialties(&self) -> Vec<Arc<Specialty>> {
        let served: HashSet<&str> = self
            .restaurants
            .iter()
            .map(|r| r.specialty.name())
            .collect();
        let mut reported = HashSet::new();
        self.orders
            .iter()
            .filter(|order| !served.contains(order.specialty.name()))
            .filter(|order| reported.insert(order.specialty.name().to_owned()))
            .map(|order| Arc::clone(&order.specialty))
            .collect()
    }

    /// Split the catalogue into owned parts for a simulation run.
    #[must_use]
    pub fn into_parts(self) -> (Coordinate, Vec<Order>, Vec<Restaurant>) {
        (self.origin, self.orders, self.restaurants)
    }
}

fn resolve(
    by_name: &HashMap<String, Arc<Specialty>>,
    owner: &str,
    name: &str,
) -> Result<Arc<Specialty>, CatalogError> {
    by_name
        .get(name)
        .cloned()
        .ok_or_else(|| CatalogError::UnknownSpecialty {
            owner: owner.to_owned(),
            specialty: name.to_owned(),
        })
}

fn checked(coordinate: Coordinate, owner: &str) -> Result<Coordinate, CatalogError> {
    coordinate
        .validate()
        .map_err(|source| CatalogError::InvalidCoordinate {
            owner: owner.to_owned(),
            source,
        })?;
    Ok(coordinate)
}
