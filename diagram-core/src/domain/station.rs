//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated station identifier.
///
/// TRA station identifiers are short strings of ASCII digits (e.g. "1000"
/// for Taipei), but branch-line extensions use letter suffixes, so this
/// type accepts any non-empty run of up to 8 ASCII alphanumerics. Any
/// `StationId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use diagram_core::domain::StationId;
///
/// let taipei = StationId::parse("1000").unwrap();
/// assert_eq!(taipei.as_str(), "1000");
///
/// // Empty identifiers are rejected
/// assert!(StationId::parse("").is_err());
///
/// // Whitespace is rejected
/// assert!(StationId::parse("10 00").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    ///
    /// The input must be 1 to 8 ASCII alphanumeric characters.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        if s.len() > 8 {
            return Err(InvalidStationId {
                reason: "must be at most 8 characters",
            });
        }
        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStationId {
                reason: "must be ASCII alphanumeric",
            });
        }

        Ok(StationId(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid station identifiers.
    fn valid_id_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9]{1,8}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_id_string()) {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Too-long strings are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Za-z0-9]{9,16}") {
            prop_assert!(StationId::parse(&s).is_err());
        }

        /// Strings containing punctuation are rejected
        #[test]
        fn punctuation_rejected(s in "[A-Za-z0-9]{0,3}[-_: ][A-Za-z0-9]{0,3}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
