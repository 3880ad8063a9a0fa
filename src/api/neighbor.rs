use crate::api::code::{SpatialCode, shortest_sufficient_code};
use crate::core::bbox::GeoBox;
use crate::util::coord::{Coordinate, LatLng};
use crate::util::error::GeohashError;
use geo_types::Polygon;
use log::{debug, trace, warn};

/// One of the eight compass offsets from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Row-major order over the 3x3 block, skipping the middle.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// `(lat_sign, lng_sign)`, each in `-1..=1`.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (1, -1),
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (-1, -1),
            Direction::South => (-1, 0),
            Direction::SouthEast => (-1, 1),
        }
    }

    /// The direction for an offset, or `None` for `(0, 0)` and out-of-range signs.
    pub fn from_offset(lat_sign: i8, lng_sign: i8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.offset() == (lat_sign, lng_sign))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::NorthWest => "nw",
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::West => "w",
            Direction::East => "e",
            Direction::SouthWest => "sw",
            Direction::South => "s",
            Direction::SouthEast => "se",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The code of the same-sized cell adjacent to `code` in `direction`.
///
/// The cell center is shifted by one full cell height and/or width and
/// re-encoded at the same length. There is no wrap at the antimeridian or
/// the poles: a shift past the domain edge lands in the edge cell on that side.
///
/// # Example
/// ```
/// use geocell::{Direction, Geohash, neighbor};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let origin: Geohash = "wx4erqh0".parse()?;
/// let east = neighbor(&origin, Direction::East)?;
/// assert_eq!(east.len(), origin.len());
/// assert_eq!(east.decode().min_lng, origin.decode().max_lng);
/// # Ok(())
/// # }
/// ```
pub fn neighbor<C: SpatialCode>(code: &C, direction: Direction) -> Result<C, GeohashError> {
    let cell = code.decode();
    let center = cell.center();
    let (lat_sign, lng_sign) = direction.offset();

    let shifted = LatLng::new(
        center.lat + f64::from(lat_sign) * cell.lat_range(),
        center.lng + f64::from(lng_sign) * cell.lng_range(),
    );
    if !GeoBox::world().contains(&shifted) {
        warn!(
            "{} neighbor of {} falls outside the domain at {}, clamping to edge cell",
            direction, code, shifted
        );
    }

    let next = C::encode(&shifted, code.len())?;
    trace!("{} neighbor of {} is {}", direction, code, next);
    Ok(next)
}

/// A 3x3 block of same-sized cells around an origin cell.
///
/// # Example
/// ```
/// use geocell::{Geohash, LatLng, neighborhood};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let point = LatLng::new(39.9793796465, 116.3397989834);
/// let block = neighborhood::<Geohash>(&point, 0.005)?;
///
/// assert_eq!(block.len(), 9);
/// assert!(block.bounding_box().contains(&point));
/// for code in block.codes() {
///     println!("{}", code);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood<C> {
    // Direction::ALL order, origin last
    cells: Vec<C>,
}

impl<C: SpatialCode> Neighborhood<C> {
    /// Derives all eight neighbors of `origin`.
    pub fn around(origin: C) -> Result<Self, GeohashError> {
        let mut cells = Direction::ALL
            .iter()
            .map(|&direction| neighbor(&origin, direction))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("neighborhood of {} built", origin);
        cells.push(origin);
        Ok(Self { cells })
    }

    pub fn origin(&self) -> &C {
        &self.cells[Direction::ALL.len()]
    }

    pub fn get(&self, direction: Direction) -> &C {
        let index = Direction::ALL
            .iter()
            .position(|&d| d == direction)
            .unwrap_or(Direction::ALL.len());
        &self.cells[index]
    }

    /// All nine codes: NW, N, NE, W, E, SW, S, SE, then the origin.
    pub fn codes(&self) -> &[C] {
        &self.cells
    }

    /// Codes paired with their direction; the origin has none.
    pub fn iter(&self) -> impl Iterator<Item = (Option<Direction>, &C)> {
        Direction::ALL
            .into_iter()
            .map(Some)
            .chain(std::iter::once(None))
            .zip(self.cells.iter())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The union of all nine decoded cells.
    pub fn bounding_box(&self) -> GeoBox {
        let mut bounds = self.origin().decode();
        for code in &self.cells {
            bounds.merge(&code.decode());
        }
        bounds
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells
            .iter()
            .map(|code| code.decode().to_polygon())
            .collect()
    }
}

/// The sufficient code for `coord` at `target_km`, with its eight neighbors.
///
/// Uses the representation's full length as the search ceiling.
pub fn neighborhood<C: SpatialCode>(
    coord: &impl Coordinate,
    target_km: f64,
) -> Result<Neighborhood<C>, GeohashError> {
    let origin: C = shortest_sufficient_code(coord, target_km, C::MAX_LENGTH)?;
    Neighborhood::around(origin)
}
