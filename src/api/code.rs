use crate::core::bbox::GeoBox;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use log::debug;

/// A path through the recursive bisection of the lat/lng domain.
///
/// Implemented by [`BitHash`](crate::BitHash) (one bit per step) and
/// [`Geohash`](crate::Geohash) (five bits per base-32 character). Precision
/// selection and neighbor derivation are written once against this trait.
pub trait SpatialCode: Sized + Clone + PartialEq + std::fmt::Display {
    /// Longest code this representation can carry, in its own length unit.
    const MAX_LENGTH: usize;

    /// Encodes `coord` into a code `length` units long.
    fn encode(coord: &impl Coordinate, length: usize) -> Result<Self, GeohashError>;

    /// The cell this code identifies.
    fn decode(&self) -> GeoBox;

    /// Length in the representation's own unit (bits or characters).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds the longest code for `coord` whose cell is at least `2 * target_km` across.
///
/// Lengths are tried from `max_length` down to 1. Doubling the target means the
/// target radius fits inside the cell wherever `coord` falls within it.
///
/// # Example
/// ```
/// use geocell::{Geohash, LatLng, SpatialCode, shortest_sufficient_code};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let point = LatLng::new(39.9793796465, 116.3397989834);
/// let code: Geohash = shortest_sufficient_code(&point, 0.02, 12)?;
/// assert_eq!(code.len(), 7);
/// assert!(code.decode().min_span() >= 0.04);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::LengthOutOfRange`] - `max_length` exceeds `C::MAX_LENGTH`
/// - [`GeohashError::NoSufficientPrecision`] - `target_km` is not positive, or no
///   length yields a cell that large
pub fn shortest_sufficient_code<C: SpatialCode>(
    coord: &impl Coordinate,
    target_km: f64,
    max_length: usize,
) -> Result<C, GeohashError> {
    if max_length > C::MAX_LENGTH {
        return Err(GeohashError::LengthOutOfRange {
            length: max_length,
            max: C::MAX_LENGTH,
        });
    }

    let required = 2.0 * target_km;
    if required.is_nan() || required <= 0.0 {
        return Err(GeohashError::NoSufficientPrecision { target_km });
    }

    for length in (1..=max_length).rev() {
        let code = C::encode(coord, length)?;
        let span = code.decode().min_span();
        if span >= required {
            debug!(
                "selected {} (length {}) for target {} km, min span {:.6} km",
                code, length, target_km, span
            );
            return Ok(code);
        }
    }

    debug!(
        "no code up to length {} spans {} km at ({}, {})",
        max_length,
        required,
        coord.y(),
        coord.x()
    );
    Err(GeohashError::NoSufficientPrecision { target_km })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::bit_hash::BitHash;
    use crate::api::geohash::Geohash;
    use crate::core::constants::{MAX_BIT_LENGTH, MAX_GEOHASH_LENGTH};
    use crate::util::coord::LatLng;

    const BEIJING: LatLng = LatLng::new(39.9793796465, 116.3397989834);

    #[test]
    fn test_geohash_selection_is_longest_sufficient() -> Result<(), GeohashError> {
        let code: Geohash = shortest_sufficient_code(&BEIJING, 0.02, MAX_GEOHASH_LENGTH)?;
        assert!(code.decode().min_span() >= 0.04);

        let longer = Geohash::encode(&BEIJING, code.len() + 1)?;
        assert!(longer.decode().min_span() < 0.04);
        Ok(())
    }

    #[test]
    fn test_bit_selection_is_longest_sufficient() -> Result<(), GeohashError> {
        let code: BitHash = shortest_sufficient_code(&BEIJING, 0.005, MAX_BIT_LENGTH)?;
        assert!(code.decode().min_span() >= 0.01);
        assert!(code.decode().contains(&BEIJING));

        let longer = BitHash::encode(&BEIJING, code.len() + 1)?;
        assert!(longer.decode().min_span() < 0.01);
        Ok(())
    }

    #[test]
    fn test_bits_are_finer_grained_than_characters() -> Result<(), GeohashError> {
        let chars: Geohash = shortest_sufficient_code(&BEIJING, 0.005, MAX_GEOHASH_LENGTH)?;
        let bits: BitHash = shortest_sufficient_code(&BEIJING, 0.005, MAX_BIT_LENGTH)?;
        assert!(bits.len() >= chars.len() * 5);
        Ok(())
    }

    #[test]
    fn test_non_positive_target_fails() {
        for target in [0.0, -1.0, f64::NAN] {
            let result: Result<Geohash, _> =
                shortest_sufficient_code(&BEIJING, target, MAX_GEOHASH_LENGTH);
            assert!(matches!(
                result,
                Err(GeohashError::NoSufficientPrecision { .. })
            ));
        }
    }

    #[test]
    fn test_target_larger_than_world_fails() {
        let result: Result<Geohash, _> = shortest_sufficient_code(&BEIJING, 30000.0, 12);
        assert_eq!(
            result,
            Err(GeohashError::NoSufficientPrecision { target_km: 30000.0 })
        );
    }

    #[test]
    fn test_max_length_out_of_range() {
        let result: Result<Geohash, _> = shortest_sufficient_code(&BEIJING, 0.02, 13);
        assert_eq!(
            result,
            Err(GeohashError::LengthOutOfRange { length: 13, max: 12 })
        );

        let result: Result<BitHash, _> = shortest_sufficient_code(&BEIJING, 0.02, 65);
        assert!(result.is_err());
    }

    #[test]
    fn test_short_max_length_caps_result() -> Result<(), GeohashError> {
        let code: Geohash = shortest_sufficient_code(&BEIJING, 0.005, 4)?;
        assert_eq!(code.len(), 4);
        Ok(())
    }
}
