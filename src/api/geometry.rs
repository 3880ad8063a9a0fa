use crate::api::code::SpatialCode;
use crate::api::neighbor::Neighborhood;
use crate::util::coord::LatLng;
use crate::util::error::GeohashError;
use geo::Centroid;
use geo_types::Geometry;
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue, feature::Id};
use std::str::FromStr;
use wkt::{ToWkt, Wkt};

/// Output format for cell polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON geometry object
    GeoJson,
}

/// Renders the cell of `code` as a polygon string.
///
/// # Example
/// ```
/// use geocell::{Geohash, GeometryFormat, cell_geometry};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let code: Geohash = "w".parse()?;
/// let wkt = cell_geometry(&code, GeometryFormat::Wkt);
/// assert!(wkt.starts_with("POLYGON"));
/// # Ok(())
/// # }
/// ```
pub fn cell_geometry<C: SpatialCode>(code: &C, format: GeometryFormat) -> String {
    let polygon = code.decode().to_polygon();
    match format {
        GeometryFormat::Wkt => polygon.wkt_string(),
        GeometryFormat::GeoJson => geojson::Geometry::from(&polygon).to_string(),
    }
}

/// Parses a point from WKT or GeoJSON.
///
/// Input starting with `{` is read as GeoJSON (a geometry or a feature), anything
/// else as WKT. Lines and polygons reduce to their centroid.
///
/// # Example
/// ```
/// use geocell::{LatLng, parse_point};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let point = parse_point("POINT(116.3397989834 39.9793796465)")?;
/// assert_eq!(point, LatLng::new(39.9793796465, 116.3397989834));
/// # Ok(())
/// # }
/// ```
pub fn parse_point(s: &str) -> Result<LatLng, GeohashError> {
    let input = s.trim();

    let geometry: Geometry<f64> = if input.starts_with('{') {
        let shape = match input.parse::<GeoJson>().map_err(geometry_error)? {
            GeoJson::Geometry(shape) => shape,
            GeoJson::Feature(feature) => feature
                .geometry
                .ok_or_else(|| geometry_error("feature has no geometry"))?,
            GeoJson::FeatureCollection(_) => {
                return Err(geometry_error("expected a single geometry, got a feature collection"));
            }
        };
        Geometry::try_from(shape).map_err(geometry_error)?
    } else {
        let text = Wkt::<f64>::from_str(input).map_err(geometry_error)?;
        Geometry::try_from(text).map_err(|_| geometry_error("unsupported WKT geometry"))?
    };

    geometry
        .centroid()
        .map(LatLng::from)
        .ok_or_else(|| geometry_error("geometry is empty"))
}

fn geometry_error(reason: impl std::fmt::Display) -> GeohashError {
    GeohashError::GeometryParseError(reason.to_string())
}

impl<C: SpatialCode> Neighborhood<C> {
    /// One polygon feature per cell, with `code` and `direction` properties.
    ///
    /// The origin's direction is `"origin"`. The collection's `bbox` is the
    /// neighborhood's bounding box as `[min_lng, min_lat, max_lng, max_lat]`.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .iter()
            .map(|(direction, code)| {
                let polygon = code.decode().to_polygon();

                let mut properties = JsonObject::new();
                properties.insert("code".to_string(), JsonValue::from(code.to_string()));
                properties.insert(
                    "direction".to_string(),
                    JsonValue::from(direction.map_or("origin", |d| d.as_str())),
                );

                Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::from(&polygon)),
                    id: Some(Id::String(code.to_string())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        let bounds = self.bounding_box();
        FeatureCollection {
            bbox: Some(vec![
                bounds.min_lng,
                bounds.min_lat,
                bounds.max_lng,
                bounds.max_lat,
            ]),
            features,
            foreign_members: None,
        }
    }

    /// The feature collection serialized as a GeoJSON string.
    pub fn to_geojson_string(&self) -> String {
        GeoJson::FeatureCollection(self.to_feature_collection()).to_string()
    }
}
