use crate::api::code::shortest_sufficient_code;
use crate::api::geohash::Geohash;
use crate::api::neighbor::Neighborhood;
use crate::core::constants::MAX_GEOHASH_LENGTH;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use serde::{Deserialize, Serialize};

/// Target resolutions for locating a point and its surroundings.
///
/// `base_resolution_km` sizes the cell a point is filed under;
/// `nearby_resolution_km` sizes the cells of its 3x3 neighborhood.
///
/// # Example
/// ```
/// use geocell::{GeohashConfig, LatLng};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let config = GeohashConfig::new()
///     .base_resolution(0.05)
///     .max_length(9);
///
/// let code = config.base_code(&LatLng::new(39.9793796465, 116.3397989834))?;
/// assert!(code.len() <= 9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeohashConfig {
    pub base_resolution_km: f64,
    pub nearby_resolution_km: f64,
    pub max_length: usize,
}

impl Default for GeohashConfig {
    fn default() -> Self {
        Self {
            base_resolution_km: 0.02,
            nearby_resolution_km: 0.005,
            max_length: MAX_GEOHASH_LENGTH,
        }
    }
}

impl GeohashConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_resolution(mut self, km: f64) -> Self {
        self.base_resolution_km = km;
        self
    }

    pub fn nearby_resolution(mut self, km: f64) -> Self {
        self.nearby_resolution_km = km;
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// Reads a config from JSON; absent fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, GeohashError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| GeohashError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GeohashError> {
        for (name, km) in [
            ("base_resolution_km", self.base_resolution_km),
            ("nearby_resolution_km", self.nearby_resolution_km),
        ] {
            if km.is_nan() || km <= 0.0 {
                return Err(GeohashError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, km
                )));
            }
        }
        if !(1..=MAX_GEOHASH_LENGTH).contains(&self.max_length) {
            return Err(GeohashError::InvalidConfig(format!(
                "max_length must be within 1..={}, got {}",
                MAX_GEOHASH_LENGTH, self.max_length
            )));
        }
        Ok(())
    }

    /// The geohash `coord` is filed under at the base resolution.
    pub fn base_code(&self, coord: &impl Coordinate) -> Result<Geohash, GeohashError> {
        self.validate()?;
        shortest_sufficient_code(coord, self.base_resolution_km, self.max_length)
    }

    /// The 3x3 block around `coord` at the nearby resolution.
    pub fn neighborhood(
        &self,
        coord: &impl Coordinate,
    ) -> Result<Neighborhood<Geohash>, GeohashError> {
        self.validate()?;
        let origin: Geohash =
            shortest_sufficient_code(coord, self.nearby_resolution_km, self.max_length)?;
        Neighborhood::around(origin)
    }
}
