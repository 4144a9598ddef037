// Configuration file handling

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = "vehicle-ledger";
const CONFIG_FILE: &str = "config.yaml";

/// Settings read from `config.yaml`; CLI flags take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// JSONL file to load instead of the built-in sample
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default = "default_status")]
    pub default_status: String,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_status() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "date".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            default_status: default_status(),
            default_sort: default_sort(),
            color: default_color(),
        }
    }
}

impl LedgerConfig {
    /// `<config dir>/vehicle-ledger/config.yaml`, if a config dir exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self =
            serde_yaml::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!(file = ?path, ?config, "Loaded config");
        Ok(config)
    }

    /// Load an explicit config, else the default location if present, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
