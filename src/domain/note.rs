//! Notes and their identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Globally unique note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Mint a fresh random id
    pub fn new() -> Self {
        NoteId(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for NoteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(NoteId)
            .map_err(|_| s.to_string())
    }
}

/// A user-authored annotation tied to a landmark by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Landmark name, compared exactly (case-sensitive)
    pub landmark: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Note {
    /// Create a note with a fresh id, timestamped now
    pub fn new(landmark: impl Into<String>, content: impl Into<String>) -> Self {
        Note {
            id: NoteId::new(),
            landmark: landmark.into(),
            content: content.into(),
            created: Utc::now(),
        }
    }

    /// Whether this note references the given landmark
    pub fn is_about(&self, landmark: &str) -> bool {
        self.landmark == landmark
    }
}
