//! Serialised form of the static catalogue.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Top-level JSON document describing one simulation's input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Where the courier starts and finishes.
    pub origin: Coordinate,
    /// Every specialty referenced by orders or restaurants.
    pub specialties: Vec<SpecialtyRecord>,
    /// Orders to deliver.
    pub orders: Vec<OrderRecord>,
    /// Restaurants available for pickup.
    pub restaurants: Vec<RestaurantRecord>,
}

/// A specialty as written in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyRecord {
    /// Unique specialty name.
    pub name: String,
    /// Urgency score; lower is more urgent.
    pub commitment_weight: f64,
    /// Mass of one order.
    pub unit_weight: u32,
    /// Optional marker colour for the map renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_colour: Option<String>,
}

/// An order as written in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order identifier.
    pub id: u64,
    /// Name of the requested specialty.
    pub specialty: String,
    /// Display address.
    pub address: String,
    /// Delivery position.
    pub coordinate: Coordinate,
}

/// A restaurant as written in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Display name.
    pub name: String,
    /// Display address.
    pub address: String,
    /// Name of the specialty prepared here.
    pub specialty: String,
    /// Pickup position.
    pub coordinate: Coordinate,
}
