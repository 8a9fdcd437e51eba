//! Geographic coordinates for stops on a courier route.

use geo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::{DistanceMetric, GeodesicDistance};

/// A WGS84 position expressed as latitude and longitude in degrees.
///
/// Coordinates are plain values: copying one never aliases another stop.
///
/// # Examples
/// ```
/// use courier_core::Coordinate;
///
/// let office = Coordinate::new(41.528, 2.434);
/// assert_eq!(office.distance_to(&office), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

/// Errors returned by [`Coordinate::try_new`] and [`Coordinate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was not a finite value in `[-90, 90]`.
    #[error("latitude {latitude} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        latitude: f64,
    },
    /// Longitude was not a finite value in `[-180, 180]`.
    #[error("longitude {longitude} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        longitude: f64,
    },
}

impl Coordinate {
    /// Construct a coordinate without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate and construct a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is non-finite or out
    /// of range.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check that both components are finite and within WGS84 bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] naming the first offending component.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange {
                latitude: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange {
                longitude: self.longitude,
            });
        }
        Ok(())
    }

    /// Convert into a `geo` point (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Geodesic surface distance to `other` in metres.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        GeodesicDistance.distance(*self, *other)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_point()
    }
}
