//! Catalog lifecycle and queries.

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use outlet_model::{OutletRecord, OutletSummary, Region, RegionCode, RegionQuery};

use crate::config::DatasetConfig;
use crate::dataset::{CsvDataset, DatasetSource};
use crate::error::{CatalogError, Result};
use crate::index::CatalogIndex;

/// Lifecycle state of a [`Catalog`]. The only transition is
/// `Unloaded -> Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    Unloaded,
    Loaded,
}

/// In-memory, load-once view of the outlet dataset.
///
/// Once loaded the table is never mutated, so every query takes `&self`
/// and a catalog can be shared across threads behind an `Arc` without
/// further locking.
pub struct Catalog {
    source: Box<dyn DatasetSource>,
    index: OnceLock<CatalogIndex>,
    /// Serializes the first load so the source is read exactly once.
    load_lock: Mutex<()>,
}

impl Catalog {
    /// Creates an unloaded catalog over `source`.
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            index: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// Creates an unloaded catalog reading the configured dataset file.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(CsvDataset::new(config))
    }

    /// Creates a catalog and loads it immediately.
    pub fn open(config: &DatasetConfig) -> Result<Self> {
        let catalog = Self::from_config(config);
        catalog.load()?;
        Ok(catalog)
    }

    pub fn state(&self) -> CatalogState {
        if self.index.get().is_some() {
            CatalogState::Loaded
        } else {
            CatalogState::Unloaded
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == CatalogState::Loaded
    }

    /// Loads the dataset if that has not happened yet.
    ///
    /// Safe to call from many threads at once: one caller reads the source,
    /// the others wait and then observe the loaded table. A failed load
    /// leaves the catalog unloaded, so a later call retries.
    pub fn load(&self) -> Result<()> {
        if self.index.get().is_some() {
            return Ok(());
        }

        // The lock only guards `()`, so a poisoned lock carries no broken state.
        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.index.get().is_some() {
            return Ok(());
        }

        let records = self.source.read().inspect_err(|error| {
            tracing::error!(source = %self.source.location(), %error, "catalog load failed");
        })?;
        let index = CatalogIndex::build(records);
        tracing::info!(
            source = %self.source.location(),
            records = index.records().len(),
            regions = index.regions().len(),
            "catalog loaded"
        );
        // Cannot already be set: writers hold `load_lock`.
        let _ = self.index.set(index);
        Ok(())
    }

    fn index(&self) -> Result<&CatalogIndex> {
        self.index.get().ok_or(CatalogError::NotReady)
    }

    /// Every record in table order.
    pub fn records(&self) -> Result<&[OutletRecord]> {
        Ok(self.index()?.records())
    }

    /// Number of records in the table.
    pub fn len(&self) -> Result<usize> {
        Ok(self.index()?.records().len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Distinct regions, sorted by name with a case-sensitive code point
    /// comparison. Regions sharing a name keep their first-seen order.
    pub fn list_regions(&self) -> Result<Vec<Region>> {
        let regions = self.index()?.regions().to_vec();
        tracing::debug!(regions = regions.len(), "listed regions");
        Ok(regions)
    }

    /// True iff at least one record carries `code`.
    pub fn is_valid_region(&self, code: RegionCode) -> Result<bool> {
        Ok(self.index()?.contains(code))
    }

    /// Outlets of region `code`, ordered by city then site name, both
    /// compared case-insensitively (see [`crate::fold_key`]). Ties keep
    /// table order. An unknown code yields an empty list.
    pub fn find_by_region(&self, code: RegionCode) -> Result<Vec<OutletSummary>> {
        let outlets: Vec<OutletSummary> = self
            .index()?
            .outlets(code)
            .map(OutletRecord::summary)
            .collect();
        tracing::debug!(region = %code, outlets = outlets.len(), "found outlets");
        Ok(outlets)
    }

    /// Resolves a raw region argument (path segment, CLI value).
    ///
    /// Text that is not an integer, or a code absent from the table, gives
    /// [`RegionQuery::Invalid`] rather than an error.
    pub fn query_region(&self, raw: &str) -> Result<RegionQuery> {
        let Ok(code) = RegionCode::parse(raw) else {
            tracing::debug!(raw, "region argument is not an integer");
            return Ok(RegionQuery::invalid());
        };
        if !self.is_valid_region(code)? {
            tracing::debug!(region = %code, "unknown region");
            return Ok(RegionQuery::invalid());
        }
        Ok(RegionQuery::Found {
            region: code,
            outlets: self.find_by_region(code)?,
        })
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("source", &self.source.location())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
