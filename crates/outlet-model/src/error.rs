use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid region code: '{0}'")]
    InvalidRegionCode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
