//! Header resolution for the outlet dataset.

use std::path::Path;

use csv::StringRecord;
use outlet_model::{OutletRecord, RegionCode};

use crate::error::{CatalogError, Result};

pub const REGION_CODE: &str = "CODICEREGIONE";
pub const REGION_NAME: &str = "DESCRIZIONEREGIONE";
pub const MUNICIPALITY_NAME: &str = "DESCRIZIONECOMUNE";
pub const SITE_NAME: &str = "DENOMINAZIONESITO";
pub const ADDRESS: &str = "INDIRIZZO";
pub const POSTAL_CODE: &str = "CAP";

/// Columns that must be present in the header row. Matching is exact and
/// case-sensitive; other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    REGION_CODE,
    REGION_NAME,
    MUNICIPALITY_NAME,
    SITE_NAME,
    ADDRESS,
    POSTAL_CODE,
];

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    region_code: usize,
    region_name: usize,
    municipality_name: usize,
    site_name: usize,
    address: usize,
    postal_code: usize,
}

impl ColumnMap {
    pub(crate) fn resolve(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim_matches('\u{feff}').trim() == column)
                .ok_or_else(|| CatalogError::MissingColumn {
                    column: column.to_string(),
                    path: path.to_path_buf(),
                })
        };

        Ok(Self {
            region_code: find(REGION_CODE)?,
            region_name: find(REGION_NAME)?,
            municipality_name: find(MUNICIPALITY_NAME)?,
            site_name: find(SITE_NAME)?,
            address: find(ADDRESS)?,
            postal_code: find(POSTAL_CODE)?,
        })
    }

    pub(crate) fn to_record(&self, row: &StringRecord, path: &Path) -> Result<OutletRecord> {
        let line = row.position().map_or(0, csv::Position::line);
        let field = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

        let raw_code = field(self.region_code);
        let region_code =
            RegionCode::parse(&raw_code).map_err(|_| CatalogError::InvalidValue {
                field: REGION_CODE.to_string(),
                value: raw_code.clone(),
                line,
                path: path.to_path_buf(),
            })?;

        Ok(OutletRecord {
            region_code,
            region_name: field(self.region_name),
            municipality_name: field(self.municipality_name),
            site_name: field(self.site_name),
            address: field(self.address),
            postal_code: field(self.postal_code),
        })
    }
}
