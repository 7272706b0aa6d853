//! Search configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for query parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Results per page; also the offset step between pages.
    pub page_size: u32,
    /// Maximum labels the engine should return per facet dimension.
    pub max_facets: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_facets: 5,
        }
    }
}

impl SearchConfig {
    /// Load config from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: SearchConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            page_size = config.page_size,
            max_facets = config.max_facets,
            "Loaded search config"
        );
        Ok(config)
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the parser cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
