//! Outcome of a region query issued from a transport boundary.

use serde::{Deserialize, Serialize};

use crate::{OutletSummary, RegionCode};

/// Message carried by [`RegionQuery::Invalid`].
pub const INVALID_REGION_MESSAGE: &str = "Invalid region";

/// Result of resolving a raw region argument against the catalog.
///
/// Serializes to `{"region": 12, "parapharmacies": [...]}` on success and
/// `{"error": "Invalid region"}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionQuery {
    Found {
        region: RegionCode,
        #[serde(rename = "parapharmacies")]
        outlets: Vec<OutletSummary>,
    },
    Invalid {
        error: String,
    },
}

impl RegionQuery {
    pub fn invalid() -> Self {
        Self::Invalid {
            error: INVALID_REGION_MESSAGE.to_string(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Outlets of a successful query; empty for an invalid region.
    pub fn outlets(&self) -> &[OutletSummary] {
        match self {
            Self::Found { outlets, .. } => outlets,
            Self::Invalid { .. } => &[],
        }
    }
}
