//! Data model for the outlet catalog.
//!
//! These types are shared between the catalog core and its consumers. Every
//! type that crosses the transport boundary derives `Serialize` with the
//! field names the JSON surface expects (`code`/`name` for regions,
//! `name`/`address`/`cap`/`city` for outlets).

#![deny(unsafe_code)]

pub mod error;
pub mod ids;
pub mod outlet;
pub mod query;

pub use error::{ModelError, Result};
pub use ids::RegionCode;
pub use outlet::{OutletRecord, OutletSummary, Region};
pub use query::{INVALID_REGION_MESSAGE, RegionQuery};
