/// Error type for geocell operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// A geohash contains a character outside the base-32 alphabet.
    InvalidCharacter { character: char, position: usize },
    /// A bit string contains something other than `0` or `1`.
    InvalidBit { character: char, position: usize },
    /// The requested code length exceeds the representation's maximum.
    LengthOutOfRange { length: usize, max: usize },
    /// No code length within bounds yields a cell at least twice the target size.
    NoSufficientPrecision { target_km: f64 },
    /// Configuration failed validation or could not be deserialized.
    InvalidConfig(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid geohash character {:?} at position {}",
                character, position
            ),
            GeohashError::InvalidBit {
                character,
                position,
            } => write!(f, "Invalid bit {:?} at position {}", character, position),
            GeohashError::LengthOutOfRange { length, max } => {
                write!(f, "Code length {} out of range (max {})", length, max)
            }
            GeohashError::NoSufficientPrecision { target_km } => {
                write!(f, "No sufficient precision for target {} km", target_km)
            }
            GeohashError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            GeohashError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for GeohashError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_character() {
        let err = GeohashError::InvalidCharacter {
            character: 'a',
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid geohash character 'a' at position 0"
        );
    }

    #[test]
    fn test_display_length() {
        let err = GeohashError::LengthOutOfRange { length: 13, max: 12 };
        assert_eq!(err.to_string(), "Code length 13 out of range (max 12)");
    }
}
