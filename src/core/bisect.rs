//! Recursive bisection of the canonical domain.
//!
//! Both code representations are paths through the same binary subdivision:
//! each bit halves the current box on one axis, alternating longitude then
//! latitude. Encoding chooses each bit by comparing the point with the box
//! center; decoding replays bits from an existing code. Either way the box
//! narrows through [`narrow`].

use crate::core::bbox::GeoBox;
use crate::util::coord::Coordinate;

/// The axis a bisection step splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    /// Every code starts by splitting longitude.
    pub const FIRST: Axis = Axis::Longitude;

    pub fn flip(self) -> Self {
        match self {
            Axis::Longitude => Axis::Latitude,
            Axis::Latitude => Axis::Longitude,
        }
    }
}

/// Receives bits as encoding emits them.
pub trait BitSink {
    fn push_bit(&mut self, bit: bool);
}

/// Yields the bits of an existing code in path order.
pub trait BitSource {
    fn read_bit(&mut self) -> Option<bool>;
}

impl<I: Iterator<Item = bool>> BitSource for I {
    fn read_bit(&mut self) -> Option<bool> {
        self.next()
    }
}

/// Keeps the upper half of `bbox` on `axis` when `bit` is set, the lower half otherwise.
///
/// Returns the narrowed box and the axis for the next step.
pub fn narrow(bbox: GeoBox, axis: Axis, bit: bool) -> (GeoBox, Axis) {
    let mut next = bbox;
    match (axis, bit) {
        (Axis::Longitude, true) => next.min_lng = bbox.lng_center(),
        (Axis::Longitude, false) => next.max_lng = bbox.lng_center(),
        (Axis::Latitude, true) => next.min_lat = bbox.lat_center(),
        (Axis::Latitude, false) => next.max_lat = bbox.lat_center(),
    }
    (next, axis.flip())
}

/// The bit a point takes on `axis` within `bbox`: set when at or above the center.
pub fn choose_bit(bbox: &GeoBox, axis: Axis, point: &impl Coordinate) -> bool {
    match axis {
        Axis::Longitude => point.x() >= bbox.lng_center(),
        Axis::Latitude => point.y() >= bbox.lat_center(),
    }
}

/// Emits `bit_count` bits locating `point` into `sink` and returns the final cell.
pub fn encode_into<S: BitSink>(point: &impl Coordinate, bit_count: usize, sink: &mut S) -> GeoBox {
    let mut bbox = GeoBox::world();
    let mut axis = Axis::FIRST;

    for _ in 0..bit_count {
        let bit = choose_bit(&bbox, axis, point);
        sink.push_bit(bit);
        (bbox, axis) = narrow(bbox, axis, bit);
    }

    bbox
}

/// Replays every bit from `source` and returns the cell it identifies.
pub fn decode_from<S: BitSource>(source: &mut S) -> GeoBox {
    let mut bbox = GeoBox::world();
    let mut axis = Axis::FIRST;

    while let Some(bit) = source.read_bit() {
        (bbox, axis) = narrow(bbox, axis, bit);
    }

    bbox
}
