//! Distance between two coordinates.
//!
//! Planning code never measures distance itself; it asks a
//! [`DistanceMetric`]. Production runs use [`GeodesicDistance`], tests can
//! substitute a planar metric with exact arithmetic.

use geo::{Distance as _, Geodesic};

use crate::Coordinate;

/// Measure the travel distance between two coordinates.
///
/// Implementations must be non-negative and return zero for identical
/// coordinates. The unit is whatever the implementation documents; the
/// planner only compares and sums values.
///
/// # Examples
/// ```
/// use courier_core::{Coordinate, DistanceMetric};
///
/// struct Manhattan;
///
/// impl DistanceMetric for Manhattan {
///     fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
///         (from.latitude - to.latitude).abs() + (from.longitude - to.longitude).abs()
///     }
/// }
///
/// let d = Manhattan.distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 2.0));
/// assert_eq!(d, 3.0);
/// ```
pub trait DistanceMetric {
    /// Distance from `from` to `to`.
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64;
}

impl<M> DistanceMetric for &M
where
    M: DistanceMetric + ?Sized,
{
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        (**self).distance(from, to)
    }
}

/// Great-circle surface distance in metres on the WGS84 ellipsoid.
///
/// Backed by `geo::Geodesic` (Karney 2013).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeodesicDistance;

impl DistanceMetric for GeodesicDistance {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        Geodesic.distance(from.to_point(), to.to_point())
    }
}
