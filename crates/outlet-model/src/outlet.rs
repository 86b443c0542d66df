use serde::{Deserialize, Serialize};

use crate::RegionCode;

/// One row of the outlet dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletRecord {
    pub region_code: RegionCode,
    pub region_name: String,
    pub municipality_name: String,
    pub site_name: String,
    pub address: String,
    /// Kept as text so leading zeros survive (`00184`).
    pub postal_code: String,
}

impl OutletRecord {
    /// Returns the region this record belongs to.
    pub fn region(&self) -> Region {
        Region {
            code: self.region_code,
            name: self.region_name.clone(),
        }
    }

    /// Projects the record to the shape returned by region queries.
    pub fn summary(&self) -> OutletSummary {
        OutletSummary {
            name: self.site_name.clone(),
            address: self.address.clone(),
            cap: self.postal_code.clone(),
            city: self.municipality_name.clone(),
        }
    }
}

/// A distinct `(code, name)` pair present in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub code: RegionCode,
    pub name: String,
}

/// Outlet as returned by `find_by_region`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletSummary {
    /// Site name.
    pub name: String,
    pub address: String,
    /// Postal code.
    pub cap: String,
    /// Municipality name.
    pub city: String,
}
