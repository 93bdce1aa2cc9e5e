//! Card configuration.

use serde::{Deserialize, Serialize};
use shoe_catalog::Currency;
use std::path::Path;

use crate::error::CardError;
use crate::recency::{RecencyWindow, DEFAULT_RECENCY_DAYS};
use crate::style::Palette;

/// Settings shared by every card in a listing.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```toml
/// recency_days = 14
/// currency = "EUR"
///
/// [palette]
/// primary = "hsl(0deg 80% 50%)"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Days after release during which a shoe is flagged as new.
    pub recency_days: i64,

    /// Currency of feed amounts.
    pub currency: Currency,

    /// Path prefix of shoe detail pages.
    pub route_prefix: String,

    /// Colors used by the style directives.
    pub palette: Palette,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recency_days: DEFAULT_RECENCY_DAYS,
            currency: Currency::USD,
            route_prefix: default_route_prefix(),
            palette: Palette::default(),
        }
    }
}

fn default_route_prefix() -> String {
    "/shoe".to_string()
}

impl CardConfig {
    /// Load config from a file.
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CardError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: CardConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        tracing::debug!(path = %path.display(), recency_days = config.recency_days, "loaded card config");
        config.validate()
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, CardError> {
        let config: CardConfig = toml::from_str(content)?;
        config.validate()
    }

    /// Check field ranges.
    pub fn validate(self) -> Result<Self, CardError> {
        if self.recency_days <= 0 {
            return Err(CardError::Config(format!(
                "recency_days must be positive, got {}",
                self.recency_days
            )));
        }
        self.recency_window()?;
        if !self.route_prefix.starts_with('/') {
            return Err(CardError::Config(format!(
                "route_prefix must start with '/', got {:?}",
                self.route_prefix
            )));
        }
        Ok(self)
    }

    /// The recency window built from `recency_days`.
    ///
    /// Fails when the day count does not fit in a duration, which can happen
    /// for configs built in code that never went through [`validate`](Self::validate).
    pub fn recency_window(&self) -> Result<RecencyWindow, CardError> {
        RecencyWindow::try_days(self.recency_days).ok_or_else(|| {
            CardError::Config(format!(
                "recency_days {} is out of range",
                self.recency_days
            ))
        })
    }

    /// Link target for a shoe slug.
    pub fn href_for(&self, slug: &str) -> String {
        format!("{}/{}", self.route_prefix.trim_end_matches('/'), slug)
    }
}
