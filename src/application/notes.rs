//! Note repository use cases
//!
//! Accounts are held in memory, keyed by username. A secondary index maps
//! every note id to its owning username so deletes never scan accounts.

use crate::domain::{validate_username, Account, Landmark, Note, NoteId};
use crate::error::{LandmarksError, Result};
use crate::infrastructure::AccountStore;
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap};

/// In-memory account set backed by an `AccountStore`
pub struct NoteRepository<S: AccountStore> {
    accounts: BTreeMap<String, Account>,
    index: HashMap<NoteId, String>,
    store: S,
}

impl<S: AccountStore> NoteRepository<S> {
    /// Load all accounts from the store and index their notes
    pub fn open(store: S) -> Result<Self> {
        let mut accounts = BTreeMap::new();
        let mut index = HashMap::new();

        for account in store.load()? {
            for note in &account.notes {
                if index.insert(note.id, account.username.clone()).is_some() {
                    return Err(LandmarksError::DuplicateNote(note.id));
                }
            }
            if accounts.contains_key(&account.username) {
                return Err(LandmarksError::DuplicateUser(account.username));
            }
            accounts.insert(account.username.clone(), account);
        }

        debug!(
            "event=repo_open module=notes accounts={} notes={}",
            accounts.len(),
            index.len()
        );
        Ok(NoteRepository {
            accounts,
            index,
            store,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Remove the note with this id from its owner and persist that account.
    ///
    /// Returns `Ok(false)` without touching the store when no account holds
    /// the note.
    pub fn delete_note(&mut self, id: &NoteId) -> Result<bool> {
        let Some(owner) = self.index.get(id).cloned() else {
            debug!("event=note_delete module=notes status=missing id={}", id);
            return Ok(false);
        };

        let removed = self
            .accounts
            .get_mut(&owner)
            .and_then(|account| account.remove_note(id));
        let Some((pos, note)) = removed else {
            // Index pointed at an account that no longer holds the note
            warn!(
                "event=note_delete module=notes status=stale_index id={} user={}",
                id, owner
            );
            self.index.remove(id);
            return Ok(false);
        };
        self.index.remove(id);

        if let Err(e) = self.persist(&owner) {
            // Put the note back where it was so memory matches the store
            if let Some(account) = self.accounts.get_mut(&owner) {
                account.notes.insert(pos, note);
            }
            self.index.insert(*id, owner.clone());
            warn!(
                "event=note_delete module=notes status=save_failed id={} user={}",
                id, owner
            );
            return Err(e);
        }
        info!("event=note_delete module=notes status=ok id={} user={}", id, owner);
        Ok(true)
    }

    /// Copy of the user's notes; empty for unknown users
    pub fn notes_for_user(&self, username: &str) -> Vec<Note> {
        self.accounts
            .get(username)
            .map(|account| account.notes.clone())
            .unwrap_or_default()
    }

    /// Every note across all accounts whose landmark name equals `landmark`.
    /// Ordered by username, then insertion order within each account.
    pub fn notes_for_landmark(&self, landmark: &str) -> Vec<Note> {
        self.accounts
            .values()
            .flat_map(|account| account.notes_about(landmark))
            .cloned()
            .collect()
    }

    /// Create an empty account
    pub fn add_account(&mut self, username: &str) -> Result<()> {
        validate_username(username)?;
        if self.accounts.contains_key(username) {
            return Err(LandmarksError::DuplicateUser(username.to_string()));
        }

        self.accounts
            .insert(username.to_string(), Account::new(username)?);
        if let Err(e) = self.persist(username) {
            self.accounts.remove(username);
            warn!(
                "event=account_add module=notes status=save_failed user={}",
                username
            );
            return Err(e);
        }
        info!("event=account_add module=notes user={}", username);
        Ok(())
    }

    /// Attach a new note to an existing account
    pub fn add_note(&mut self, username: &str, landmark: &str, content: &str) -> Result<Note> {
        let landmark = Landmark::parse(landmark)?;
        let account = self
            .accounts
            .get_mut(username)
            .ok_or_else(|| LandmarksError::UnknownUser(username.to_string()))?;

        let note = Note::new(landmark.name, content);
        if self.index.contains_key(&note.id) {
            return Err(LandmarksError::DuplicateNote(note.id));
        }
        account.notes.push(note.clone());
        self.index.insert(note.id, username.to_string());

        if let Err(e) = self.persist(username) {
            if let Some(account) = self.accounts.get_mut(username) {
                account.notes.pop();
            }
            self.index.remove(&note.id);
            warn!(
                "event=note_add module=notes status=save_failed id={} user={}",
                note.id, username
            );
            return Err(e);
        }
        info!(
            "event=note_add module=notes id={} user={}",
            note.id, username
        );
        Ok(note)
    }

    /// Owning username of a note
    pub fn owner_of(&self, id: &NoteId) -> Option<&str> {
        self.index.get(id).map(String::as_str)
    }

    /// Accounts in username order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Distinct landmark names with how many notes reference each
    pub fn landmarks(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for note in self.accounts.values().flat_map(|a| a.notes.iter()) {
            *counts.entry(note.landmark.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn persist(&self, changed: &str) -> Result<()> {
        let Some(account) = self.accounts.get(changed) else {
            return Err(LandmarksError::UnknownUser(changed.to_string()));
        };
        let all: Vec<&Account> = self.accounts.values().collect();
        self.store.save(account, &all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryAccountStore;

    fn account(name: &str, notes: &[(&str, &str)]) -> Account {
        let mut account = Account::new(name).unwrap();
        for (landmark, content) in notes {
            account.notes.push(Note::new(*landmark, *content));
        }
        account
    }

    fn repo_with(accounts: Vec<Account>) -> NoteRepository<MemoryAccountStore> {
        NoteRepository::open(MemoryAccountStore::with_accounts(accounts)).unwrap()
    }

    fn fixture() -> NoteRepository<MemoryAccountStore> {
        repo_with(vec![
            account("ana", &[("Louvre", "long lines"), ("Orsay", "the clock")]),
            account("bob", &[("Louvre", "go early"), ("louvre", "lowercase")]),
            account("cy", &[]),
        ])
    }

    #[test]
    fn test_delete_existing_note() {
        let mut repo = fixture();
        let target = repo.notes_for_user("bob")[0].clone();

        assert!(repo.delete_note(&target.id).unwrap());

        let bob = repo.notes_for_user("bob");
        assert_eq!(bob.len(), 1);
        assert!(bob.iter().all(|n| n.id != target.id));
        assert_eq!(repo.notes_for_user("ana").len(), 2);
        assert_eq!(repo.store().save_count(), 1);
        assert_eq!(repo.store().last_changed().as_deref(), Some("bob"));
        assert_eq!(repo.owner_of(&target.id), None);
    }

    #[test]
    fn test_delete_persists_full_account_set() {
        let mut repo = fixture();
        let target = repo.notes_for_user("ana")[1].clone();

        repo.delete_note(&target.id).unwrap();

        let snapshot = repo.store().snapshot();
        let names: Vec<&str> = snapshot.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(names, vec!["ana", "bob", "cy"]);
        assert_eq!(snapshot[0].notes.len(), 1);
    }

    #[test]
    fn test_delete_missing_note_is_noop() {
        let mut repo = fixture();
        let before: Vec<Account> = repo.accounts().cloned().collect();

        assert!(!repo.delete_note(&NoteId::new()).unwrap());

        let after: Vec<Account> = repo.accounts().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn test_delete_same_note_twice() {
        let mut repo = fixture();
        let target = repo.notes_for_user("ana")[0].clone();

        assert!(repo.delete_note(&target.id).unwrap());
        assert!(!repo.delete_note(&target.id).unwrap());
        assert_eq!(repo.store().save_count(), 1);
    }

    #[test]
    fn test_notes_for_unknown_user_is_empty() {
        let repo = fixture();
        assert!(repo.notes_for_user("nobody").is_empty());
        assert!(repo.notes_for_user("").is_empty());
        assert!(repo.notes_for_user("cy").is_empty());
    }

    #[test]
    fn test_notes_for_user_is_a_copy() {
        let mut repo = fixture();
        let mut copy = repo.notes_for_user("ana");
        copy.clear();

        assert_eq!(repo.notes_for_user("ana").len(), 2);
        let id = repo.notes_for_user("ana")[0].id;
        assert!(repo.delete_note(&id).unwrap());
    }

    #[test]
    fn test_notes_for_landmark_spans_accounts() {
        let repo = fixture();
        let contents: Vec<String> = repo
            .notes_for_landmark("Louvre")
            .into_iter()
            .map(|n| n.content)
            .collect();
        assert_eq!(contents, vec!["long lines", "go early"]);
    }

    #[test]
    fn test_notes_for_landmark_is_case_sensitive() {
        let repo = fixture();
        let lower = repo.notes_for_landmark("louvre");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].content, "lowercase");
        assert!(repo.notes_for_landmark("LOUVRE").is_empty());
        assert!(repo.notes_for_landmark("Nowhere").is_empty());
    }

    #[test]
    fn test_add_note_indexes_and_persists() {
        let mut repo = fixture();
        let note = repo.add_note("cy", "Pantheon", "dome").unwrap();

        assert_eq!(repo.owner_of(&note.id), Some("cy"));
        assert_eq!(repo.notes_for_user("cy"), vec![note.clone()]);
        assert_eq!(repo.store().save_count(), 1);
        assert_eq!(repo.store().last_changed().as_deref(), Some("cy"));

        assert!(repo.delete_note(&note.id).unwrap());
        assert!(repo.notes_for_user("cy").is_empty());
    }

    #[test]
    fn test_add_note_unknown_user() {
        let mut repo = fixture();
        match repo.add_note("zed", "Louvre", "hi").unwrap_err() {
            LandmarksError::UnknownUser(name) => assert_eq!(name, "zed"),
            other => panic!("Expected UnknownUser, got {other:?}"),
        }
        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn test_add_note_blank_landmark() {
        let mut repo = fixture();
        assert!(matches!(
            repo.add_note("ana", "  ", "hi"),
            Err(LandmarksError::InvalidLandmark(_))
        ));
        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn test_add_account() {
        let mut repo = repo_with(Vec::new());
        repo.add_account("dee").unwrap();

        assert_eq!(repo.accounts().count(), 1);
        assert!(repo.notes_for_user("dee").is_empty());
        assert_eq!(repo.store().save_count(), 1);
    }

    #[test]
    fn test_add_account_rejects_duplicates_and_bad_names() {
        let mut repo = fixture();
        assert!(matches!(
            repo.add_account("ana"),
            Err(LandmarksError::DuplicateUser(_))
        ));
        assert!(matches!(
            repo.add_account("has space"),
            Err(LandmarksError::InvalidUsername(_))
        ));
        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn test_open_rejects_duplicate_note_ids() {
        let mut ana = account("ana", &[("Louvre", "x")]);
        let mut bob = Account::new("bob").unwrap();
        bob.notes.push(ana.notes[0].clone());
        ana.notes.push(Note::new("Orsay", "y"));

        let result = NoteRepository::open(MemoryAccountStore::with_accounts(vec![ana, bob]));
        assert!(matches!(result, Err(LandmarksError::DuplicateNote(_))));
    }

    #[test]
    fn test_failed_delete_restores_note() {
        let mut repo = fixture();
        let before: Vec<Account> = repo.accounts().cloned().collect();
        let target = repo.notes_for_user("ana")[0].clone();

        repo.store().fail_next_save();
        assert!(matches!(
            repo.delete_note(&target.id),
            Err(LandmarksError::Io(_))
        ));

        let after: Vec<Account> = repo.accounts().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(repo.owner_of(&target.id), Some("ana"));
        assert_eq!(repo.store().save_count(), 0);

        // Once the store recovers the delete goes through
        assert!(repo.delete_note(&target.id).unwrap());
        assert_eq!(repo.store().save_count(), 1);
        assert_eq!(repo.notes_for_user("ana").len(), 1);
    }

    #[test]
    fn test_failed_add_note_leaves_no_trace() {
        let mut repo = fixture();
        let before: Vec<Account> = repo.accounts().cloned().collect();

        repo.store().fail_next_save();
        assert!(repo.add_note("ana", "Pantheon", "dome").is_err());

        let after: Vec<Account> = repo.accounts().cloned().collect();
        assert_eq!(before, after);
        assert!(repo.notes_for_landmark("Pantheon").is_empty());
        let indexed = before
            .iter()
            .flat_map(|a| a.notes.iter())
            .filter(|n| repo.owner_of(&n.id).is_some())
            .count();
        assert_eq!(indexed, 4);
        assert_eq!(repo.index.len(), 4);
    }

    #[test]
    fn test_failed_add_account_is_undone() {
        let mut repo = fixture();

        repo.store().fail_next_save();
        assert!(repo.add_account("dee").is_err());

        let names: Vec<&str> = repo.accounts().map(|a| a.username.as_str()).collect();
        assert_eq!(names, vec!["ana", "bob", "cy"]);

        repo.add_account("dee").unwrap();
        assert_eq!(repo.accounts().count(), 4);
    }

    #[test]
    fn test_landmark_counts() {
        let repo = fixture();
        let counts = repo.landmarks();
        assert_eq!(counts.get("Louvre"), Some(&2));
        assert_eq!(counts.get("Orsay"), Some(&1));
        assert_eq!(counts.get("louvre"), Some(&1));
        assert_eq!(counts.len(), 3);
    }
}
