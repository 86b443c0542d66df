//! Error types for the outlet catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the catalog.
///
/// Invalid region codes are not errors: the queries answer `false` or an
/// empty result for them.
#[derive(Debug, Error)]
pub enum CatalogError {
    // === Availability ===
    /// Dataset file missing or unreadable.
    #[error("dataset unavailable {path}: {source}")]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Malformed Dataset ===
    /// Required column absent from the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A cell could not be converted to its field type.
    #[error("invalid {field} value '{value}' at line {line} in {path}")]
    InvalidValue {
        field: String,
        value: String,
        line: u64,
        path: PathBuf,
    },

    /// File starts with a byte order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The delimited-text parser rejected the file.
    #[error("failed to parse dataset {path}: {message}")]
    Csv { path: PathBuf, message: String },

    // === Lifecycle ===
    /// A query ran before the catalog finished loading.
    #[error("catalog is not loaded")]
    NotReady,
}

impl CatalogError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DatasetUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::DatasetUnavailable { path, source },
            _ => Self::Csv { path, message },
        }
    }

    /// True for every error meaning the dataset content is unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::InvalidValue { .. }
                | Self::UnsupportedEncoding { .. }
                | Self::Csv { .. }
        )
    }

    /// True if the dataset could not be opened or read.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::DatasetUnavailable { .. })
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
