//! Configuration management

use crate::error::{LandmarksError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const WORKSPACE_DIR: &str = ".landmarks";
pub const DEFAULT_DATA_FILE: &str = "accounts.toml";

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// User whose notes `landmarks notes` shows when no filter is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
    /// Account data file, relative to `.landmarks/`
    #[serde(default = "default_data_file")]
    pub data_file: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            default_user: None,
            data_file: default_data_file(),
            created: Utc::now(),
        }
    }

    /// Load config from .landmarks/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LandmarksError::NotWorkspace(path.to_path_buf())
            } else {
                LandmarksError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| LandmarksError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .landmarks/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LandmarksError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Effective default user; LANDMARKS_USER wins over the stored value
    pub fn get_default_user(&self) -> Option<String> {
        std::env::var("LANDMARKS_USER")
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| self.default_user.clone())
    }
}
