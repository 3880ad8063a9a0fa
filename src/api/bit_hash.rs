use crate::api::code::SpatialCode;
use crate::api::geohash::Geohash;
use crate::core::bbox::GeoBox;
use crate::core::bisect::{BitSink, decode_from, encode_into};
use crate::core::constants::{BASE32_ALPHABET, BITS_PER_CHAR, MAX_BIT_LENGTH};
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use std::str::FromStr;

/// A geohash kept as raw bits.
///
/// Up to 64 bisection steps packed into a `u64`. The first step of the path is
/// the most significant of the `len` used bits; unused high bits are zero.
///
/// # Example
/// ```
/// use geocell::{BitHash, LatLng};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let hash = BitHash::encode(&LatLng::new(39.9793796465, 116.3397989834), 10)?;
/// assert_eq!(hash.to_string(), "1110011101");
/// assert!(hash.decode().contains(&LatLng::new(39.9793796465, 116.3397989834)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitHash {
    bits: u64,
    len: u8,
}

impl BitHash {
    pub const fn empty() -> Self {
        Self { bits: 0, len: 0 }
    }

    /// Builds a hash from its low `len` bits; higher bits are discarded.
    pub fn from_raw(bits: u64, len: usize) -> Result<Self, GeohashError> {
        if len > MAX_BIT_LENGTH {
            return Err(GeohashError::LengthOutOfRange {
                length: len,
                max: MAX_BIT_LENGTH,
            });
        }
        let mask = if len == MAX_BIT_LENGTH {
            u64::MAX
        } else {
            (1u64 << len) - 1
        };
        Ok(Self {
            bits: bits & mask,
            len: len as u8,
        })
    }

    /// Encodes `coord` into `length` bits.
    pub fn encode(coord: &impl Coordinate, length: usize) -> Result<Self, GeohashError> {
        if length > MAX_BIT_LENGTH {
            return Err(GeohashError::LengthOutOfRange {
                length,
                max: MAX_BIT_LENGTH,
            });
        }
        let mut hash = Self::empty();
        encode_into(coord, length, &mut hash);
        Ok(hash)
    }

    /// Replays the bits over the canonical domain. The empty hash decodes to the whole world.
    pub fn decode(&self) -> GeoBox {
        decode_from(&mut self.iter())
    }

    /// The used bits, right-aligned.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends one bisection step.
    pub fn push(&mut self, bit: bool) -> Result<(), GeohashError> {
        if self.len() >= MAX_BIT_LENGTH {
            return Err(GeohashError::LengthOutOfRange {
                length: self.len() + 1,
                max: MAX_BIT_LENGTH,
            });
        }
        self.bits = (self.bits << 1) | bit as u64;
        self.len += 1;
        Ok(())
    }

    /// The `n`th step of the path, counting from zero, or `None` past the end.
    pub fn test(&self, n: usize) -> Option<bool> {
        (n < self.len()).then(|| (self.bits >> (self.len() - 1 - n)) & 1 == 1)
    }

    /// Iterates the path from its first step.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).filter_map(|n| self.test(n))
    }

    /// Keeps the first `n` steps, giving an enclosing cell.
    pub fn truncate(&self, n: usize) -> Self {
        let keep = self.len().min(n);
        if keep == 0 {
            return Self::empty();
        }
        Self {
            bits: self.bits >> (self.len() - keep),
            len: keep as u8,
        }
    }

    /// Regroups the bits into base-32 characters, when they divide evenly.
    pub fn to_geohash(&self) -> Option<Geohash> {
        if self.len() % BITS_PER_CHAR != 0 {
            return None;
        }
        let chars = self.len() / BITS_PER_CHAR;
        let text: String = (0..chars)
            .map(|i| {
                let shift = (chars - 1 - i) * BITS_PER_CHAR;
                BASE32_ALPHABET[((self.bits >> shift) & 0x1f) as usize] as char
            })
            .collect();
        Geohash::parse(&text).ok()
    }
}

impl BitSink for BitHash {
    fn push_bit(&mut self, bit: bool) {
        self.bits = (self.bits << 1) | bit as u64;
        self.len += 1;
    }
}

impl SpatialCode for BitHash {
    const MAX_LENGTH: usize = MAX_BIT_LENGTH;

    fn encode(coord: &impl Coordinate, length: usize) -> Result<Self, GeohashError> {
        BitHash::encode(coord, length)
    }

    fn decode(&self) -> GeoBox {
        BitHash::decode(self)
    }

    fn len(&self) -> usize {
        BitHash::len(self)
    }
}

impl std::fmt::Display for BitHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitHash {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hash = Self::empty();
        for (position, character) in s.chars().enumerate() {
            let bit = match character {
                '0' => false,
                '1' => true,
                _ => {
                    return Err(GeohashError::InvalidBit {
                        character,
                        position,
                    });
                }
            };
            hash.push(bit)?;
        }
        Ok(hash)
    }
}
