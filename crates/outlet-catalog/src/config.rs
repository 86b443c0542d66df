//! Dataset location and format.

use std::path::PathBuf;

/// Environment variable overriding the dataset path.
pub const DATASET_ENV_VAR: &str = "OUTLET_DATASET_PATH";

/// Dataset file used when nothing else is configured.
pub const DEFAULT_DATASET_FILE: &str = "parafarmacie.csv";

/// Field delimiter of the published dataset.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Get the default dataset path.
///
/// Checks the `OUTLET_DATASET_PATH` environment variable first, then falls
/// back to `parafarmacie.csv` in the working directory.
pub fn default_dataset_path() -> PathBuf {
    dataset_path_from(std::env::var(DATASET_ENV_VAR).ok())
}

fn dataset_path_from(env_value: Option<String>) -> PathBuf {
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATASET_FILE),
    }
}

/// Where the dataset lives and how its fields are separated.
///
/// The file is always read as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(default_dataset_path())
    }
}

impl DatasetConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
