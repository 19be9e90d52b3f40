//! `.seo-engine.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = ".seo-engine.toml";
pub const DEFAULT_HISTORY_PATH: &str = ".seo-engine/history.jsonl";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub history: HistoryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_HISTORY_PATH),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report panel.
    #[default]
    Text,
    /// Full result as pretty JSON.
    Json,
    /// Title and meta description only.
    Copy,
}

impl SeoConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load an explicitly requested config file. Any failure is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `.seo-engine.toml` from `dir`, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or invalid one is logged and
    /// ignored.
    pub fn discover(dir: &Path) -> Self {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            log::debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }
}
