//! Workspace discovery and layout

use crate::error::{LandmarksError, Result};
use crate::infrastructure::config::{Config, WORKSPACE_DIR};
use crate::infrastructure::store::TomlAccountStore;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory holding a `.landmarks/` folder
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks LANDMARKS_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("LANDMARKS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(LandmarksError::Config(format!(
                    "LANDMARKS_ROOT is set to '{}' but no .landmarks directory found. \
                    Run 'landmarks init' in that directory or unset LANDMARKS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(LandmarksError::NotWorkspace(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Create the .landmarks directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let dir = self.root.join(WORKSPACE_DIR);

        if dir.exists() {
            return Err(LandmarksError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Account store configured for this workspace
    pub fn account_store(&self, config: &Config) -> TomlAccountStore {
        TomlAccountStore::new(self.root.join(WORKSPACE_DIR).join(&config.data_file))
    }
}
