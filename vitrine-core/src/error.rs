use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unrecognized sort key: {0}")]
    UnrecognizedSortKey(String),

    #[error("Unknown {kind}: {value}")]
    UnknownCategory { kind: &'static str, value: String },

    #[error("Invalid catalog entity: {0}")]
    InvalidEntity(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<vitrine_model::ModelError> for CatalogError {
    fn from(err: vitrine_model::ModelError) -> Self {
        match err {
            vitrine_model::ModelError::UnknownVariant { kind, value } => {
                CatalogError::UnknownCategory { kind, value }
            }
            other => CatalogError::InvalidEntity(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
