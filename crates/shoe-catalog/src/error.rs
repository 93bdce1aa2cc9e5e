//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while reading shoe records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The record has no usable base price.
    #[error("Missing price for {0}")]
    MissingPrice(String),

    /// The release date is absent or cannot be parsed.
    #[error("Invalid release date for {slug}: {reason}")]
    InvalidReleaseDate { slug: String, reason: String },

    /// A numeric amount was NaN or infinite.
    #[error("Non-finite amount in field {0}")]
    NonFiniteAmount(&'static str),

    /// Any other field failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The feed could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
