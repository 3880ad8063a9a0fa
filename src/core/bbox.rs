use crate::core::constants::DOMAIN;
use crate::core::distance::{
    km_per_degree_lat, km_per_degree_lng, latitudinal_span_km, longitudinal_span_km,
};
use crate::util::coord::{Coordinate, LatLng};
use geo_types::{Polygon, Rect, coord};

/// An axis-aligned latitude/longitude rectangle.
///
/// A `GeoBox` is what a geohash decodes to. It starts as the full canonical
/// domain and narrows as code bits are replayed; it can also be built
/// directly from two corners or from a center and a radius.
///
/// # Example
/// ```
/// use geocell::{GeoBox, LatLng};
///
/// let bbox = GeoBox::from_points(&LatLng::new(40.0, 117.0), &LatLng::new(39.0, 116.0));
/// assert!(bbox.contains(&LatLng::new(39.5, 116.5)));
/// assert_eq!(bbox.center(), LatLng::new(39.5, 116.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Default for GeoBox {
    fn default() -> Self {
        Self::world()
    }
}

impl GeoBox {
    /// The canonical domain `[-90, 90] x [-180, 180]`.
    pub const fn world() -> Self {
        Self {
            min_lat: DOMAIN[0],
            max_lat: DOMAIN[1],
            min_lng: DOMAIN[2],
            max_lng: DOMAIN[3],
        }
    }

    /// Builds a box from raw bounds in any order.
    pub fn new(lat1: f64, lat2: f64, lng1: f64, lng2: f64) -> Self {
        Self {
            min_lat: lat1.min(lat2),
            max_lat: lat1.max(lat2),
            min_lng: lng1.min(lng2),
            max_lng: lng1.max(lng2),
        }
    }

    /// Builds the smallest box holding both points.
    pub fn from_points(a: &impl Coordinate, b: &impl Coordinate) -> Self {
        Self::new(a.y(), b.y(), a.x(), b.x())
    }

    /// Builds a box covering every point within `radius_km` of `center`.
    ///
    /// The longitude half-width is measured on whichever edge parallel is closer
    /// to a pole, where a degree of longitude is shortest. Bounds are clamped to
    /// the canonical domain. A negative radius counts by its magnitude and a NaN
    /// radius as zero.
    pub fn from_center_and_radius(center: &impl Coordinate, radius_km: f64) -> Self {
        let radius_km = if radius_km.is_nan() { 0.0 } else { radius_km.abs() };
        let lat_delta = radius_km / km_per_degree_lat();

        let (north, south) = (center.y() + lat_delta, center.y() - lat_delta);
        let poleward = if north.abs() > south.abs() { north } else { south };

        let lng_km = km_per_degree_lng(poleward);
        let half_width = (DOMAIN[3] - DOMAIN[2]) / 2.0;
        let lng_delta = if poleward.abs() >= DOMAIN[1] || lng_km <= f64::EPSILON {
            half_width
        } else {
            (radius_km / lng_km).min(half_width)
        };

        Self {
            min_lat: south.max(DOMAIN[0]),
            max_lat: north.min(DOMAIN[1]),
            min_lng: (center.x() - lng_delta).max(DOMAIN[2]),
            max_lng: (center.x() + lng_delta).min(DOMAIN[3]),
        }
    }

    /// Grows this box in place to also cover `other`.
    pub fn merge(&mut self, other: &GeoBox) -> &mut Self {
        self.min_lat = self.min_lat.min(other.min_lat);
        self.max_lat = self.max_lat.max(other.max_lat);
        self.min_lng = self.min_lng.min(other.min_lng);
        self.max_lng = self.max_lng.max(other.max_lng);
        self
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, point: &impl Coordinate) -> bool {
        point.y() >= self.min_lat
            && point.y() <= self.max_lat
            && point.x() >= self.min_lng
            && point.x() <= self.max_lng
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_range(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn lat_center(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }

    pub fn lng_center(&self) -> f64 {
        (self.min_lng + self.max_lng) / 2.0
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(self.lat_center(), self.lng_center())
    }

    /// The smallest linear dimension of the box in kilometers.
    ///
    /// Longitude span is measured on both edge parallels since it shrinks
    /// toward the poles.
    pub fn min_span(&self) -> f64 {
        let lat_span = latitudinal_span_km(self.min_lat, self.max_lat);
        let south_span = longitudinal_span_km(self.min_lat, self.min_lng, self.max_lng);
        let north_span = longitudinal_span_km(self.max_lat, self.min_lng, self.max_lng);
        lat_span.min(south_span).min(north_span)
    }

    /// Corners in SW, SE, NW, NE order.
    pub fn corners(&self) -> [LatLng; 4] {
        [
            LatLng::new(self.min_lat, self.min_lng),
            LatLng::new(self.min_lat, self.max_lng),
            LatLng::new(self.max_lat, self.min_lng),
            LatLng::new(self.max_lat, self.max_lng),
        ]
    }

    /// Converts to a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lng, y: self.min_lat },
            coord! { x: self.max_lng, y: self.max_lat },
        )
    }

    /// Converts to a closed five-vertex polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

impl From<Rect<f64>> for GeoBox {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min().y, rect.max().y, rect.min().x, rect.max().x)
    }
}

/// Returns the componentwise union of two boxes.
pub fn merge(a: &GeoBox, b: &GeoBox) -> GeoBox {
    let mut merged = *a;
    merged.merge(b);
    merged
}
