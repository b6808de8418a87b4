//! User accounts

use crate::domain::note::{Note, NoteId};
use crate::error::{LandmarksError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MAX_USERNAME_LEN: usize = 64;

fn username_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap())
}

/// Check that a username is usable as an account key
pub fn validate_username(username: &str) -> Result<()> {
    if username.len() > MAX_USERNAME_LEN || !username_regex().is_match(username) {
        return Err(LandmarksError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Owner of an ordered collection of notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Account {
    /// Create an empty account after validating the username
    pub fn new(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Account {
            username,
            notes: Vec::new(),
        })
    }

    /// Remove the first note with the given id, returning its former
    /// position and the note
    pub fn remove_note(&mut self, id: &NoteId) -> Option<(usize, Note)> {
        let pos = self.notes.iter().position(|n| n.id == *id)?;
        Some((pos, self.notes.remove(pos)))
    }

    pub fn notes_about<'a>(&'a self, landmark: &'a str) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |n| n.is_about(landmark))
    }
}
