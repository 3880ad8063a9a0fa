pub mod bbox;
pub mod bisect;
pub mod constants;
pub mod distance;

pub use bbox::{GeoBox, merge};
pub use bisect::{Axis, BitSink, BitSource, decode_from, encode_into, narrow};
pub use constants::{
    BASE32_ALPHABET, BITS_PER_CHAR, DOMAIN, EARTH_RADIUS_KM, EPSILON, MAX_BIT_LENGTH,
    MAX_GEOHASH_LENGTH,
};
pub use distance::{
    distance, km_per_degree_lat, km_per_degree_lng, latitudinal_span_km, longitudinal_span_km,
};
