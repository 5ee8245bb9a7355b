//! Station identity and code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// Maximum length of a station code.
const MAX_CODE_LEN: usize = 5;

/// A short station code such as `NDLS` or `MAS`.
///
/// Codes are 1 to 5 uppercase ASCII letters or digits and always start
/// with a letter. This type guarantees that any `StationCode` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use journey_server::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("ndls").is_err());
///
/// // Too long is rejected
/// assert!(StationCode::parse("NDLSXX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode {
    bytes: [u8; MAX_CODE_LEN],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.is_empty() || bytes.len() > MAX_CODE_LEN {
            return Err(InvalidStationCode {
                reason: "must be 1 to 5 characters",
            });
        }

        if !bytes[0].is_ascii_uppercase() {
            return Err(InvalidStationCode {
                reason: "must start with an uppercase letter",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        let mut code = [0u8; MAX_CODE_LEN];
        code[..bytes.len()].copy_from_slice(bytes);

        Ok(StationCode {
            bytes: code,
            len: bytes.len() as u8,
        })
    }

    /// Parse after trimming whitespace and uppercasing.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable numeric station identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub u32);

impl StationId {
    /// Identifiers handed out by the schedule are always positive.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station in the network. Reference data, never mutated by searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub code: StationCode,
    pub active: bool,
}

impl Station {
    /// Creates an active station.
    pub fn new(id: StationId, name: impl Into<String>, code: StationCode) -> Self {
        Self {
            id,
            name: name.into(),
            code,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("MAS").is_ok());
        assert!(StationCode::parse("NDLS").is_ok());
        assert!(StationCode::parse("KOAA").is_ok());
        assert!(StationCode::parse("R").is_ok());
        assert!(StationCode::parse("BCT1").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("mas").is_err());
        assert!(StationCode::parse("Mas").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("ABCDEF").is_err());
    }

    #[test]
    fn reject_leading_digit_and_symbols() {
        assert!(StationCode::parse("1AB").is_err());
        assert!(StationCode::parse("A-B").is_err());
        assert!(StationCode::parse("A B").is_err());
    }

    #[test]
    fn parse_normalized_uppercases() {
        let code = StationCode::parse_normalized("  ndls ").unwrap();
        assert_eq!(code.as_str(), "NDLS");
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("SBC").unwrap();
        assert_eq!(format!("{code}"), "SBC");
        assert_eq!(format!("{code:?}"), "StationCode(SBC)");
    }

    #[test]
    fn station_id_validity() {
        assert!(StationId(1).is_valid());
        assert!(!StationId(0).is_valid());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z][A-Z0-9]{0,4}") {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{1,5}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// Over-long strings are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z]{6,12}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
