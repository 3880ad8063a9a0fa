//! # geocell
//!
//! Geohash encoding with resolution-driven precision. There are currently
//! three main entry points.
//!
//! ### 1. `Geohash` / `BitHash` - Single Cell Operations
//!
//! ```
//! use geocell::{Geohash, LatLng};
//!
//! # fn main() -> Result<(), geocell::GeohashError> {
//! let hash = Geohash::encode(&LatLng::new(39.9793796465, 116.3397989834), 8)?;
//! println!("{}", hash);
//! let cell = hash.decode();
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `shortest_sufficient_code` - Resolution-Driven Precision
//!
//! Pick the longest code whose cell is still at least twice the target size:
//!
//! ```
//! use geocell::{Geohash, LatLng, SpatialCode, shortest_sufficient_code};
//!
//! # fn main() -> Result<(), geocell::GeohashError> {
//! let point = LatLng::new(39.9793796465, 116.3397989834);
//! let code: Geohash = shortest_sufficient_code(&point, 0.02, 12)?;
//! assert!(code.decode().min_span() >= 0.04);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `neighborhood` - The 3x3 Block Around a Point
//!
//! ```
//! use geocell::{Geohash, GeometryFormat, LatLng, cell_geometry, neighborhood};
//!
//! # fn main() -> Result<(), geocell::GeohashError> {
//! let block = neighborhood::<Geohash>(&LatLng::new(39.9793796465, 116.3397989834), 0.005)?;
//! for code in block.codes() {
//!     println!("{}", cell_geometry(code, GeometryFormat::Wkt));
//! }
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    BitHash, Direction, Geohash, GeohashConfig, GeometryFormat, Neighborhood, SpatialCode,
    cell_geometry, decode, encode, neighbor, neighborhood, parse_point, shortest_sufficient_code,
};
pub use crate::core::{
    Axis, BASE32_ALPHABET, EARTH_RADIUS_KM, GeoBox, MAX_BIT_LENGTH, MAX_GEOHASH_LENGTH, distance,
    latitudinal_span_km, longitudinal_span_km, merge,
};
pub use crate::util::{Coordinate, GeohashError, LatLng};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;
    use std::collections::HashSet;

    const BEIJING: LatLng = LatLng::new(39.9793796465, 116.3397989834);

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeohashError> {
        let config = GeohashConfig::default();

        let base = config.base_code(&BEIJING)?;
        assert!(base.len() <= MAX_GEOHASH_LENGTH);
        assert!(base.decode().min_span() >= 0.04);
        assert!(base.decode().contains(&BEIJING));

        let block = config.neighborhood(&BEIJING)?;
        let distinct: HashSet<&Geohash> = block.codes().iter().collect();
        assert_eq!(distinct.len(), 9);

        let mut bounds = GeoBox::from_points(&BEIJING, &BEIJING);
        for code in block.codes() {
            bounds.merge(&decode(code.as_str())?);
        }
        assert!(bounds.contains(&BEIJING));
        assert_eq!(bounds, block.bounding_box());
        Ok(())
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert!(matches!(
            decode("a1b2"),
            Err(GeohashError::InvalidCharacter { character: 'a', .. })
        ));
    }

    #[test]
    fn test_using_geo_types_points() -> Result<(), GeohashError> {
        let pt = point! { x: 116.3397989834, y: 39.9793796465 };

        let from_point = Geohash::encode(&pt, 9)?;
        let from_tuple = Geohash::encode(&(116.3397989834, 39.9793796465), 9)?;
        let from_latlng = Geohash::encode(&BEIJING, 9)?;

        assert_eq!(from_point, from_tuple);
        assert_eq!(from_point, from_latlng);
        Ok(())
    }

    #[test]
    fn test_bit_and_character_codecs_agree() -> Result<(), GeohashError> {
        for length in 0..=MAX_GEOHASH_LENGTH {
            let chars = Geohash::encode(&BEIJING, length)?;
            let bits = BitHash::encode(&BEIJING, length * 5)?;
            assert_eq!(chars.decode(), bits.decode());
            assert_eq!(bits.to_geohash(), Some(chars));
        }
        Ok(())
    }

    #[test]
    fn test_bit_neighborhood() -> Result<(), GeohashError> {
        let block = neighborhood::<BitHash>(&BEIJING, 0.005)?;
        assert_eq!(block.len(), 9);
        assert!(block.bounding_box().contains(&BEIJING));
        for (direction, code) in block.iter() {
            if let Some(direction) = direction {
                assert_eq!(&neighbor(block.origin(), direction)?, code);
            }
        }
        Ok(())
    }

    #[test]
    fn test_radius_box_within_neighborhood() -> Result<(), GeohashError> {
        let block = neighborhood::<Geohash>(&BEIJING, 0.005)?;
        let around = GeoBox::from_center_and_radius(&BEIJING, 0.005);

        let bounds = block.bounding_box();
        for corner in around.corners() {
            assert!(bounds.contains(&corner));
        }
        Ok(())
    }
}
