//! Account persistence

use crate::domain::Account;
use crate::error::{LandmarksError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence collaborator for the account set
pub trait AccountStore {
    /// Load every stored account
    fn load(&self) -> Result<Vec<Account>>;

    /// Persist the full account set after `changed` was mutated
    fn save(&self, changed: &Account, all: &[&Account]) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    #[serde(default)]
    accounts: Vec<Account>,
}

/// Stores all accounts in a single TOML file
#[derive(Debug, Clone)]
pub struct TomlAccountStore {
    path: PathBuf,
}

impl TomlAccountStore {
    pub fn new(path: PathBuf) -> Self {
        TomlAccountStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty account file, creating parent directories
    pub fn create_empty(&self) -> Result<()> {
        self.write(&AccountsFile::default())
    }

    fn write(&self, file: &AccountsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(file)?;

        // Write beside the target, then swap it in
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, contents)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl AccountStore for TomlAccountStore {
    fn load(&self) -> Result<Vec<Account>> {
        if !self.path.exists() {
            debug!(
                "event=accounts_load module=store status=missing path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let file: AccountsFile = toml::from_str(&contents).map_err(|e| {
            LandmarksError::Config(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(
            "event=accounts_load module=store status=ok accounts={}",
            file.accounts.len()
        );
        Ok(file.accounts)
    }

    fn save(&self, changed: &Account, all: &[&Account]) -> Result<()> {
        let file = AccountsFile {
            accounts: all.iter().map(|a| (*a).clone()).collect(),
        };
        self.write(&file)?;

        info!(
            "event=accounts_save module=store changed_user={} accounts={}",
            changed.username,
            all.len()
        );
        Ok(())
    }
}

/// In-memory store that records what was saved
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    initial: Vec<Account>,
    saved: RefCell<Vec<Account>>,
    saves: Cell<usize>,
    last_changed: RefCell<Option<String>>,
    fail_next_save: Cell<bool>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that yields the given accounts on load
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        MemoryAccountStore {
            initial: accounts,
            ..Self::default()
        }
    }

    /// Make the next `save` fail with an IO error without recording anything
    pub fn fail_next_save(&self) {
        self.fail_next_save.set(true);
    }

    /// Number of successful `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Account set passed to the most recent `save`
    pub fn snapshot(&self) -> Vec<Account> {
        self.saved.borrow().clone()
    }

    /// Username passed as `changed` to the most recent `save`
    pub fn last_changed(&self) -> Option<String> {
        self.last_changed.borrow().clone()
    }
}

impl AccountStore for MemoryAccountStore {
    fn load(&self) -> Result<Vec<Account>> {
        Ok(self.initial.clone())
    }

    fn save(&self, changed: &Account, all: &[&Account]) -> Result<()> {
        if self.fail_next_save.replace(false) {
            return Err(LandmarksError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "simulated save failure",
            )));
        }
        *self.saved.borrow_mut() = all.iter().map(|a| (*a).clone()).collect();
        *self.last_changed.borrow_mut() = Some(changed.username.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use tempfile::TempDir;

    fn sample_accounts() -> Vec<Account> {
        let mut ana = Account::new("ana").unwrap();
        ana.notes.push(Note::new("Louvre", "crowded at noon"));
        ana.notes.push(Note::new("Orsay", "clock window"));
        let bob = Account::new("bob").unwrap();
        vec![ana, bob]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = TomlAccountStore::new(temp.path().join("accounts.toml"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_create_empty_then_load() {
        let temp = TempDir::new().unwrap();
        let store = TomlAccountStore::new(temp.path().join("nested/accounts.toml"));
        store.create_empty().unwrap();
        assert!(store.path().exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_notes_and_order() {
        let temp = TempDir::new().unwrap();
        let store = TomlAccountStore::new(temp.path().join("accounts.toml"));
        let accounts = sample_accounts();
        let refs: Vec<&Account> = accounts.iter().collect();

        store.save(&accounts[0], &refs).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, accounts);
        assert!(!temp.path().join("accounts.toml.tmp").exists());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("accounts.toml");
        fs::write(&path, "[[accounts]]\nusername = 3\n").unwrap();

        let store = TomlAccountStore::new(path);
        match store.load().unwrap_err() {
            LandmarksError::Config(msg) => assert!(msg.contains("accounts.toml")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_rename_removes_tmp_file() {
        let temp = TempDir::new().unwrap();
        // A directory in place of the data file makes the rename fail
        let path = temp.path().join("accounts.toml");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let store = TomlAccountStore::new(path);
        let accounts = sample_accounts();
        let refs: Vec<&Account> = accounts.iter().collect();

        assert!(store.save(&accounts[0], &refs).is_err());
        assert!(!temp.path().join("accounts.toml.tmp").exists());
    }

    #[test]
    fn test_memory_store_fail_next_save() {
        let accounts = sample_accounts();
        let store = MemoryAccountStore::new();
        let refs: Vec<&Account> = accounts.iter().collect();

        store.fail_next_save();
        assert!(matches!(
            store.save(&accounts[0], &refs),
            Err(LandmarksError::Io(_))
        ));
        assert_eq!(store.save_count(), 0);
        assert!(store.snapshot().is_empty());

        store.save(&accounts[0], &refs).unwrap();
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_memory_store_records_saves() {
        let accounts = sample_accounts();
        let store = MemoryAccountStore::with_accounts(accounts.clone());
        assert_eq!(store.load().unwrap(), accounts);
        assert_eq!(store.save_count(), 0);

        let refs: Vec<&Account> = accounts.iter().collect();
        store.save(&accounts[1], &refs).unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.last_changed().as_deref(), Some("bob"));
        assert_eq!(store.snapshot(), accounts);
    }
}
