//! Configuration for marginalia
//!
//! Stored as TOML. Lookup order: an explicit path, then
//! `$MARGINALIA_CONFIG_DIR/config.toml`, then the platform config directory
//! (`~/.config/marginalia/config.toml` on Linux). A missing default file
//! means default settings.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MarginaliaError, Result};

pub use types::{Config, ExportSettings, LatexStyle, SearchSettings};

const CONFIG_DIR: &str = "marginalia";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "MARGINALIA_CONFIG_DIR";

impl Config {
    /// Path of the default configuration file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    MarginaliaError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MarginaliaError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load `explicit` (which must exist), else the default file if present
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MarginaliaError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
