//! Data folder configuration.
//!
//! The store takes its folder explicitly; this is the small config layer
//! that says where that folder is, loadable from a TOML file.

use super::store::CsvStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional data folder, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where the per-ticker data files live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.into(),
        }
    }
}

impl DataConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read config file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse config TOML: {e}"))
    }

    /// A store over the configured folder.
    pub fn store(&self) -> CsvStore {
        CsvStore::new(&self.data_dir)
    }
}
