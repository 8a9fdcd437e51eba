//! Routes travelled by the courier.
//!
//! A [`Route`] is the ordered list of coordinates visited during one phase.
//! [`LabelledRoute`] attaches the display label and colour the map renderer
//! expects.

use serde::Serialize;

use crate::{Coordinate, DistanceMetric};

/// An ordered path through coordinates, starting where the phase began.
///
/// # Examples
/// ```
/// use courier_core::{Coordinate, Route};
///
/// let mut route = Route::starting_at(Coordinate::new(0.0, 0.0));
/// route.push(Coordinate::new(0.0, 1.0));
/// assert_eq!(route.stops().len(), 2);
/// assert_eq!(route.legs().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    stops: Vec<Coordinate>,
}

impl Route {
    /// Construct a route from an explicit list of stops.
    #[must_use]
    pub const fn new(stops: Vec<Coordinate>) -> Self {
        Self { stops }
    }

    /// Construct a route whose first stop is `start`.
    #[must_use]
    pub fn starting_at(start: Coordinate) -> Self {
        Self::new(vec![start])
    }

    /// Append the next visited coordinate.
    pub fn push(&mut self, stop: Coordinate) {
        self.stops.push(stop);
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[Coordinate] {
        &self.stops
    }

    /// Whether the route records no stops at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.stops
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((*from, *to)),
                _ => None,
            })
    }

    /// Sum of leg distances measured with `metric`.
    #[must_use]
    pub fn length_with<M>(&self, metric: &M) -> f64
    where
        M: DistanceMetric + ?Sized,
    {
        self.legs().map(|(from, to)| metric.distance(from, to)).sum()
    }
}

/// Display colour for a rendered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteColour {
    /// Pickup legs.
    Blue,
    /// Delivery legs.
    Red,
    /// The final leg back to the origin.
    Green,
}

impl RouteColour {
    /// Return the colour as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for RouteColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route tagged for display, with the distance travelled along it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledRoute {
    /// Human-readable label such as `Pickup 2`.
    pub label: String,
    /// Display colour.
    pub colour: RouteColour,
    /// Stops in visiting order.
    pub route: Route,
    /// Distance accumulated along the route.
    pub distance: f64,
}

impl LabelledRoute {
    /// Attach a label and colour to `route`.
    pub fn new(label: impl Into<String>, colour: RouteColour, route: Route, distance: f64) -> Self {
        Self {
            label: label.into(),
            colour,
            route,
            distance,
        }
    }
}
