use crate::core::constants::EPSILON;
use crate::core::distance::distance;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples in `(lng, lat)` order, `geo_types::Point<f64>`
/// and [`LatLng`]. This allows encode functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// A latitude/longitude pair in degrees.
///
/// Equality is approximate: two points are equal when both components differ by
/// less than `1e-6`, which absorbs round-trip error through decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_coord(coord: &impl Coordinate) -> Self {
        Self::new(coord.y(), coord.x())
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        (self.lat - other.lat).abs() < EPSILON && (self.lng - other.lng).abs() < EPSILON
    }
}

impl Coordinate for LatLng {
    fn x(&self) -> f64 {
        self.lng
    }
    fn y(&self) -> f64 {
        self.lat
    }
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<LatLng> for Point<f64> {
    fn from(latlng: LatLng) -> Self {
        latlng.to_point()
    }
}

/// `a - b` is the great-circle distance between the points in kilometers.
impl Sub for LatLng {
    type Output = f64;

    fn sub(self, other: LatLng) -> f64 {
        distance(&self, &other)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
