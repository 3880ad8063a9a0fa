pub mod bit_hash;
pub mod code;
pub mod config;
pub mod geohash;
pub mod geometry;
pub mod neighbor;

pub use bit_hash::BitHash;
pub use code::{SpatialCode, shortest_sufficient_code};
pub use config::GeohashConfig;
pub use geohash::{Geohash, decode, encode};
pub use geometry::{GeometryFormat, cell_geometry, parse_point};
pub use neighbor::{Direction, Neighborhood, neighbor, neighborhood};
