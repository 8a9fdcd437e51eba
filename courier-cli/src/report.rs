//! GeoJSON rendering of a finished simulation.
//!
//! Routes become `LineString` features and catalogue entries become `Point`
//! markers, so any GeoJSON viewer can draw the courier's day.

use courier_core::{Catalog, Coordinate, DEFAULT_MARKER_COLOUR, LabelledRoute};
use courier_planner::SimulationReport;
use serde::{Deserialize, Serialize};

/// Name given to the origin marker.
pub(crate) const ORIGIN_MARKER_NAME: &str = "Origin";

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub(crate) struct FeatureCollection {
    pub(crate) features: Vec<Feature>,
}

/// A GeoJSON `Feature`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub(crate) struct Feature {
    pub(crate) geometry: Geometry,
    pub(crate) properties: Properties,
}

/// Geometries used by the report. Positions are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum MarkerKind {
    Origin,
    Order,
    Restaurant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum Properties {
    Route {
        label: String,
        colour: String,
        distance_m: f64,
    },
    Marker {
        kind: MarkerKind,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specialty: Option<String>,
        colour: String,
    },
}

impl Feature {
    fn route(route: &LabelledRoute) -> Self {
        Self {
            geometry: Geometry::LineString {
                coordinates: route.route.stops().iter().copied().map(position).collect(),
            },
            properties: Properties::Route {
                label: route.label.clone(),
                colour: route.colour.as_str().to_owned(),
                distance_m: route.distance,
            },
        }
    }

    fn marker(
        kind: MarkerKind,
        name: String,
        specialty: Option<String>,
        colour: &str,
        at: Coordinate,
    ) -> Self {
        Self {
            geometry: Geometry::Point {
                coordinates: position(at),
            },
            properties: Properties::Marker {
                kind,
                name,
                specialty,
                colour: colour.to_owned(),
            },
        }
    }
}

const fn position(coordinate: Coordinate) -> [f64; 2] {
    [coordinate.longitude, coordinate.latitude]
}

/// Markers for the origin, every order and every restaurant in `catalog`.
///
/// Built before the catalogue is handed to the simulation, which consumes it.
pub(crate) fn catalogue_markers(catalog: &Catalog) -> Vec<Feature> {
    let origin = Feature::marker(
        MarkerKind::Origin,
        ORIGIN_MARKER_NAME.to_owned(),
        None,
        DEFAULT_MARKER_COLOUR,
        catalog.origin(),
    );
    let orders = catalog.orders().iter().map(|order| {
        Feature::marker(
            MarkerKind::Order,
            format!("Order {} ({})", order.id, order.address),
            Some(order.specialty.name().to_owned()),
            order.specialty.marker_colour(),
            order.coordinate,
        )
    });
    let restaurants = catalog.restaurants().iter().map(|restaurant| {
        Feature::marker(
            MarkerKind::Restaurant,
            restaurant.name.clone(),
            Some(restaurant.specialty.name().to_owned()),
            restaurant.specialty.marker_colour(),
            restaurant.coordinate,
        )
    });
    std::iter::once(origin).chain(orders).chain(restaurants).collect()
}

/// Assemble the route lines of `report` followed by `markers`.
pub(crate) fn feature_collection(
    report: &SimulationReport,
    markers: Vec<Feature>,
) -> FeatureCollection {
    let mut features: Vec<Feature> = report.routes().map(Feature::route).collect();
    features.extend(markers);
    FeatureCollection { features }
}
