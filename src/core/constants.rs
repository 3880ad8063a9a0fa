/// Mean Earth radius in kilometers, shared by distance and radius/degree conversions
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Canonical domain [min_lat, max_lat, min_lng, max_lng]
pub const DOMAIN: [f64; 4] = [-90.0, 90.0, -180.0, 180.0];

/// Tolerance used when comparing points
pub const EPSILON: f64 = 0.000001;

/// Base-32 alphabet: digits then lowercase letters without `a`, `i`, `l`, `o`
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits carried by one base-32 character
pub const BITS_PER_CHAR: usize = 5;

/// Maximum character geohash length (60 bits)
pub const MAX_GEOHASH_LENGTH: usize = 12;

/// Maximum bit hash length (width of the backing `u64`)
pub const MAX_BIT_LENGTH: usize = 64;

const INVALID: u8 = 0xff;

/// Inverse of [`BASE32_ALPHABET`], indexed by ASCII byte. Unmapped bytes hold `0xff`.
pub(crate) const BASE32_INDEX: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < BASE32_ALPHABET.len() {
        table[BASE32_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Looks up the 5-bit value of a geohash character.
pub(crate) fn base32_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match BASE32_INDEX[c as usize] {
        INVALID => None,
        v => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_inverts_alphabet() {
        for (i, &b) in BASE32_ALPHABET.iter().enumerate() {
            assert_eq!(base32_value(b as char), Some(i as u8));
        }
    }

    #[test]
    fn test_excluded_letters() {
        for c in ['a', 'i', 'l', 'o', 'A', 'B', '-', 'é'] {
            assert_eq!(base32_value(c), None, "{c} should not map");
        }
    }
}
