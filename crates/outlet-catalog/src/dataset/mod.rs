//! Dataset sources feeding the catalog.

mod columns;
mod reader;

use std::path::{Path, PathBuf};

use outlet_model::OutletRecord;

use crate::config::DatasetConfig;
use crate::error::Result;

pub use columns::REQUIRED_COLUMNS;
pub use reader::read_dataset;

/// Something the catalog can load its records from.
///
/// `read` is called at most once per catalog.
pub trait DatasetSource: Send + Sync {
    /// Human-readable location used in log output.
    fn location(&self) -> String;

    /// Reads every record, in table order.
    fn read(&self) -> Result<Vec<OutletRecord>>;
}

/// Delimited text file on disk.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    path: PathBuf,
    delimiter: u8,
}

impl CsvDataset {
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            path: config.path.clone(),
            delimiter: config.delimiter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvDataset {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Vec<OutletRecord>> {
        read_dataset(&self.path, self.delimiter)
    }
}

/// Records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    records: Vec<OutletRecord>,
}

impl InMemoryDataset {
    pub fn new(records: Vec<OutletRecord>) -> Self {
        Self { records }
    }
}

impl DatasetSource for InMemoryDataset {
    fn location(&self) -> String {
        format!("<memory: {} records>", self.records.len())
    }

    fn read(&self) -> Result<Vec<OutletRecord>> {
        Ok(self.records.clone())
    }
}
