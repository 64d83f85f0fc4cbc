//! Configuration for list handlers
//!
//! A [`PagerConfig`] describes one handler: its own page fields, the page
//! size policy, and optionally the DuckDB database it pages over. Configs
//! are written in YAML.

use crate::error::{Error, Result, ResultExt};
use crate::pagination::{PageBackend, PageSizePolicy, Paginator};
use crate::params::LegacyParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete handler configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Handler-level page fields, consulted after the request
    #[serde(default, skip_serializing_if = "LegacyParams::is_empty")]
    pub defaults: LegacyParams,

    /// Page size hook
    #[serde(default)]
    pub page_size_policy: PageSizePolicy,

    /// Database to page over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl PagerConfig {
    /// Build a paginator over `backend` configured by this config
    pub fn paginator<B: PageBackend>(&self, backend: B) -> Paginator<B> {
        Paginator::new(backend)
            .with_legacy_params(self.defaults)
            .with_page_size_policy(self.page_size_policy)
    }

    /// Render the config as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

// ============================================================================
// Database
// ============================================================================

/// DuckDB database settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file; in-memory when omitted
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Statements run once after opening (views over CSV files, attaches, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub init: Vec<String>,
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    load_config_from_str(&content)
}

/// Load a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    // An empty file is an all-default config
    if yaml.trim().is_empty() {
        return Ok(PagerConfig::default());
    }

    let config: PagerConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a config
pub fn validate_config(config: &PagerConfig) -> Result<()> {
    if config.defaults.page_size == Some(0) {
        return Err(Error::invalid_value(
            "defaults.page_size",
            "must be at least 1",
        ));
    }

    if config.defaults.current_page == Some(0) {
        return Err(Error::invalid_value(
            "defaults.current_page",
            "must be at least 1",
        ));
    }

    match config.page_size_policy {
        PageSizePolicy::Cap { max: 0 } => Err(Error::invalid_value(
            "page_size_policy.max",
            "must be at least 1",
        )),
        PageSizePolicy::Fixed { size: 0 } => Err(Error::invalid_value(
            "page_size_policy.size",
            "must be at least 1",
        )),
        _ => Ok(()),
    }
}
