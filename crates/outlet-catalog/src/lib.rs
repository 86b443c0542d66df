//! Outlet catalog core.
//!
//! Loads a delimited dataset of retail outlets once and answers two kinds of
//! query against the immutable in-memory table: the distinct regions present
//! in the dataset, and the outlets of one region in a deterministic order.
//!
//! # Lifecycle
//!
//! A [`Catalog`] starts `Unloaded`. [`Catalog::load`] parses the dataset and
//! moves it to `Loaded`; the transition happens at most once, even when many
//! threads race to perform it. Queries on an unloaded catalog fail with
//! [`CatalogError::NotReady`].
//!
//! # Example
//!
//! ```ignore
//! use outlet_catalog::{Catalog, DatasetConfig};
//! use outlet_model::RegionCode;
//!
//! let catalog = Catalog::open(&DatasetConfig::new("parafarmacie.csv"))?;
//!
//! for region in catalog.list_regions()? {
//!     println!("{} {}", region.code, region.name);
//! }
//!
//! let outlets = catalog.find_by_region(RegionCode::new(120))?;
//! ```

#![deny(unsafe_code)]

mod catalog;
mod collation;
mod config;
mod dataset;
mod error;
mod index;

// === Error Types ===
pub use error::{CatalogError, Result};

// === Configuration ===
pub use config::{
    DATASET_ENV_VAR, DEFAULT_DATASET_FILE, DEFAULT_DELIMITER, DatasetConfig, default_dataset_path,
};

// === Dataset Sources ===
pub use dataset::{CsvDataset, DatasetSource, InMemoryDataset, REQUIRED_COLUMNS, read_dataset};

// === Catalog ===
pub use catalog::{Catalog, CatalogState};
pub use collation::{cmp_folded, fold_key};
