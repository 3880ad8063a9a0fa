use crate::core::constants::EARTH_RADIUS_KM;
use crate::util::coord::Coordinate;

/// Great-circle distance in kilometers between two points, by the haversine formula.
///
/// Inputs are used as given (no normalization), so values outside ±90/±180
/// still produce a finite non-negative result.
///
/// # Example
/// ```
/// use geocell::{distance, LatLng};
///
/// let beijing = LatLng::new(39.9042, 116.4074);
/// let shanghai = LatLng::new(31.2304, 121.4737);
/// let km = distance(&beijing, &shanghai);
/// assert!((km - 1067.0).abs() < 5.0);
/// ```
pub fn distance(a: &impl Coordinate, b: &impl Coordinate) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let d_lat = (a.y() - b.y()).to_radians();
    let d_lng = (a.x() - b.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
}

/// Kilometers per degree along a meridian.
pub fn km_per_degree_lat() -> f64 {
    EARTH_RADIUS_KM.to_radians()
}

/// Kilometers per degree along the parallel at `lat`.
pub fn km_per_degree_lng(lat: f64) -> f64 {
    EARTH_RADIUS_KM.to_radians() * lat.to_radians().cos().abs()
}

/// Arc length in kilometers along a meridian between two latitudes.
pub fn latitudinal_span_km(lat1: f64, lat2: f64) -> f64 {
    (lat1 - lat2).abs() * km_per_degree_lat()
}

/// Arc length in kilometers along the parallel at `lat` between two longitudes.
pub fn longitudinal_span_km(lat: f64, lng1: f64, lng2: f64) -> f64 {
    (lng1 - lng2).abs() * km_per_degree_lng(lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::coord::LatLng;
    use geo::{Distance, Haversine};
    use geo_types::Point;

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = LatLng::new(39.9793796465, 116.3397989834);
        assert!(distance(&p, &p).abs() < 1e-9);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = LatLng::new(39.9793796465, 116.3397989834);
        let b = LatLng::new(-33.8688, 151.2093);
        assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_meridian() {
        let equator = LatLng::new(0.0, 0.0);
        let pole = LatLng::new(90.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((distance(&equator, &pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((distance(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_unnormalized_input_is_finite() {
        let a = LatLng::new(95.0, 200.0);
        let b = LatLng::new(-100.0, -190.0);
        let d = distance(&a, &b);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_matches_geo_haversine() {
        let a = Point::new(116.3397989834, 39.9793796465);
        let b = Point::new(-0.1278, 51.5074);

        let ours = distance(&a, &b);
        let theirs = Haversine.distance(a, b) / 1000.0;
        assert!((ours - theirs).abs() / theirs < 0.001);
    }

    #[test]
    fn test_spans_match_distance_along_axes() {
        let lat_span = latitudinal_span_km(10.0, 11.0);
        let along_meridian = distance(&(20.0, 10.0), &(20.0, 11.0));
        assert!((lat_span - along_meridian).abs() < 1e-6);

        let lng_span = longitudinal_span_km(0.0, 20.0, 21.0);
        let along_equator = distance(&(20.0, 0.0), &(21.0, 0.0));
        assert!((lng_span - along_equator).abs() < 1e-6);
    }

    #[test]
    fn test_longitudinal_span_shrinks_with_latitude() {
        let equator = longitudinal_span_km(0.0, 0.0, 1.0);
        let sixty = longitudinal_span_km(60.0, 0.0, 1.0);
        assert!((sixty - equator / 2.0).abs() < 1e-9);
        assert!(longitudinal_span_km(90.0, 0.0, 1.0) < 1e-9);
    }
}
