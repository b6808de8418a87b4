//! Config management use case

use crate::domain::validate_username;
use crate::error::{LandmarksError, Result};
use crate::infrastructure::{Config, Workspace};

/// A data file must be a plain `<stem>.toml` name inside `.landmarks/`
fn validate_data_file(value: &str) -> Result<()> {
    let plain = !value.contains(|c: char| c == '/' || c == '\\')
        && value != "."
        && value != "..";
    let has_stem = value
        .strip_suffix(".toml")
        .is_some_and(|stem| !stem.trim().is_empty() && stem != ".");
    if plain && has_stem {
        Ok(())
    } else {
        Err(LandmarksError::Config(format!(
            "Invalid data_file: '{}'. Use a plain <name>.toml file name inside .landmarks/",
            value
        )))
    }
}

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "default_user" => Ok(config.default_user.unwrap_or_default()),
            "data_file" => Ok(config.data_file),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(LandmarksError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_user, data_file, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "default_user" => {
                if value.is_empty() {
                    config.default_user = None;
                } else {
                    validate_username(value)?;
                    config.default_user = Some(value.to_string());
                }
            }
            "data_file" => {
                validate_data_file(value)?;
                config.data_file = value.to_string();
            }
            "created" => {
                return Err(LandmarksError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(LandmarksError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_user, data_file",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
