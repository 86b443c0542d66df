#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Numeric identifier of an administrative region.
///
/// Region codes arrive as text at every boundary (dataset cells, path
/// segments, CLI arguments). They are parsed once into this type so the
/// catalog only ever compares integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RegionCode(i64);

impl RegionCode {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parses a region code, ignoring surrounding whitespace and an explicit `+`.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ModelError::InvalidRegionCode(raw.to_string()))
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for RegionCode {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for RegionCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
