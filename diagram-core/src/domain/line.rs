//! Operating-line identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A named operating line: one branch or corridor of the network,
/// drawn as its own band of a space-time diagram.
///
/// Line identifiers come from the diagram configuration and key the
/// line-membership table, so this type derives serde support. The only
/// structural requirement is that the identifier is non-empty.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }
        Ok(LineId(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidLineId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }
        Ok(LineId(s))
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> String {
        id.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
