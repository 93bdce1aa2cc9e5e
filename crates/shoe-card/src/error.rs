//! Error types for card rendering.

use shoe_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while building or rendering a card.
#[derive(Error, Debug)]
pub enum CardError {
    /// The underlying record was invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for CardError {
    fn from(err: toml::de::Error) -> Self {
        CardError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::Config(err.to_string())
    }
}
