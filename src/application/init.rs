//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new landmarks workspace at the specified path.
pub fn init(path: &Path) -> Result<Workspace> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new();
    workspace.save_config(&config)?;
    workspace.account_store(&config).create_empty()?;

    info!("event=workspace_init module=init path={}", path.display());
    println!("Initialized landmarks workspace at {}", path.display());

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::AccountStore;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("trip");

        let ws = init(&root).unwrap();

        assert!(root.join(".landmarks/config.toml").exists());
        assert!(root.join(".landmarks/accounts.toml").exists());
        let config = ws.load_config().unwrap();
        assert!(ws.account_store(&config).load().unwrap().is_empty());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
