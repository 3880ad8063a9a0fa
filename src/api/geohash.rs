use crate::api::bit_hash::BitHash;
use crate::api::code::SpatialCode;
use crate::core::bbox::GeoBox;
use crate::core::bisect::{BitSink, decode_from, encode_into};
use crate::core::constants::{BASE32_ALPHABET, BITS_PER_CHAR, MAX_GEOHASH_LENGTH, base32_value};
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A base-32 geohash.
///
/// Each character carries five bisection steps through the alphabet
/// `0123456789bcdefghjkmnpqrstuvwxyz`. A `Geohash` is validated on
/// construction, so decoding it cannot fail.
///
/// # Example
/// ```
/// use geocell::{Geohash, LatLng};
///
/// # fn main() -> Result<(), geocell::GeohashError> {
/// let point = LatLng::new(39.9793796465, 116.3397989834);
/// let hash = Geohash::encode(&point, 8)?;
/// assert_eq!(hash.as_str(), "wx4erqh0");
///
/// let cell = hash.decode();
/// assert!(cell.contains(&point));
///
/// assert!("a1b2".parse::<Geohash>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Geohash(String);

impl Geohash {
    /// Validates `code` against the alphabet and maximum length.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::LengthOutOfRange`] - more than 12 characters
    /// - [`GeohashError::InvalidCharacter`] - a character outside the alphabet,
    ///   including upper case and the excluded `a`, `i`, `l`, `o`
    pub fn parse(code: &str) -> Result<Self, GeohashError> {
        let length = code.chars().count();
        if length > MAX_GEOHASH_LENGTH {
            return Err(GeohashError::LengthOutOfRange {
                length,
                max: MAX_GEOHASH_LENGTH,
            });
        }
        if let Some((position, character)) = code
            .chars()
            .enumerate()
            .find(|(_, c)| base32_value(*c).is_none())
        {
            return Err(GeohashError::InvalidCharacter {
                character,
                position,
            });
        }
        Ok(Self(code.to_string()))
    }

    /// Encodes `coord` into `length` characters (`5 * length` bisection steps).
    pub fn encode(coord: &impl Coordinate, length: usize) -> Result<Self, GeohashError> {
        if length > MAX_GEOHASH_LENGTH {
            return Err(GeohashError::LengthOutOfRange {
                length,
                max: MAX_GEOHASH_LENGTH,
            });
        }
        let mut writer = Base32Writer::with_capacity(length);
        encode_into(coord, length * BITS_PER_CHAR, &mut writer);
        Ok(Self(writer.finish()))
    }

    /// The cell this geohash identifies. The empty geohash decodes to the whole world.
    pub fn decode(&self) -> GeoBox {
        decode_from(&mut self.iter_bits())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The enclosing cell one character shorter, or `None` for the empty geohash.
    pub fn parent(&self) -> Option<Self> {
        let mut chars = self.0.chars();
        chars.next_back().map(|_| Self(chars.as_str().to_string()))
    }

    /// The same path as raw bits.
    pub fn to_bit_hash(&self) -> BitHash {
        let mut bits = BitHash::empty();
        for bit in self.iter_bits() {
            bits.push_bit(bit);
        }
        bits
    }

    fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.chars().flat_map(|c| {
            let value = base32_value(c).unwrap_or_default();
            (0..BITS_PER_CHAR).rev().map(move |shift| (value >> shift) & 1 == 1)
        })
    }
}

/// Decodes a geohash string to its cell.
///
/// # Example
/// ```
/// use geocell::decode;
///
/// let cell = decode("wx4erqh0").unwrap();
/// assert!(cell.lat_range() < 0.001);
/// assert!(decode("a1b2").is_err());
/// ```
pub fn decode(code: &str) -> Result<GeoBox, GeohashError> {
    Ok(Geohash::parse(code)?.decode())
}

/// Encodes `coord` as a geohash string of `length` characters.
pub fn encode(coord: &impl Coordinate, length: usize) -> Result<String, GeohashError> {
    Geohash::encode(coord, length).map(String::from)
}

/// Packs emitted bits five at a time into alphabet characters.
struct Base32Writer {
    out: String,
    pending: u8,
    filled: usize,
}

impl Base32Writer {
    fn with_capacity(chars: usize) -> Self {
        Self {
            out: String::with_capacity(chars),
            pending: 0,
            filled: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

impl BitSink for Base32Writer {
    fn push_bit(&mut self, bit: bool) {
        self.pending = (self.pending << 1) | bit as u8;
        self.filled += 1;
        if self.filled == BITS_PER_CHAR {
            self.out.push(BASE32_ALPHABET[self.pending as usize] as char);
            self.pending = 0;
            self.filled = 0;
        }
    }
}

impl SpatialCode for Geohash {
    const MAX_LENGTH: usize = MAX_GEOHASH_LENGTH;

    fn encode(coord: &impl Coordinate, length: usize) -> Result<Self, GeohashError> {
        Geohash::encode(coord, length)
    }

    fn decode(&self) -> GeoBox {
        Geohash::decode(self)
    }

    fn len(&self) -> usize {
        Geohash::len(self)
    }
}

impl FromStr for Geohash {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Geohash {
    type Error = GeohashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Geohash> for String {
    fn from(hash: Geohash) -> Self {
        hash.0
    }
}

impl AsRef<str> for Geohash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Geohash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
