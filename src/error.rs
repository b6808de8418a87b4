//! Error types for landmarks

use crate::domain::{HomeAction, NoteId};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the landmarks application
#[derive(Debug, Error)]
pub enum LandmarksError {
    #[error("Not a landmarks workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// Carries the homescreen's failure message verbatim
    #[error("{0}")]
    UnknownAction(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("User already exists: {0}")]
    DuplicateUser(String),

    #[error("Invalid landmark: {0}")]
    InvalidLandmark(String),

    #[error("Duplicate note id: {0}")]
    DuplicateNote(NoteId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LandmarksError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LandmarksError::NotWorkspace(_) => 2,
            LandmarksError::InvalidNoteId(_) => 3,
            LandmarksError::UnknownUser(_) => 4,
            LandmarksError::UnknownAction(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LandmarksError::NotWorkspace(path) => {
                format!(
                    "Not a landmarks workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'landmarks init' in this directory to create a workspace\n\
                    • Navigate to an existing landmarks workspace\n\
                    • Set LANDMARKS_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            LandmarksError::InvalidNoteId(id) => {
                format!(
                    "Invalid note id: '{}'\n\n\
                    Note ids are UUIDs (e.g., 67e55044-10b1-426f-9247-bb680e5fe0c8).\n\
                    Use 'landmarks notes --user <NAME>' to see note ids.",
                    id
                )
            }
            LandmarksError::UnknownUser(name) => {
                format!(
                    "Unknown user: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'landmarks user list' to see existing users\n\
                    • Create the account: landmarks user add {}",
                    name, name
                )
            }
            LandmarksError::UnknownAction(msg) => {
                let valid: Vec<&str> = HomeAction::ALL.iter().map(|a| a.label()).collect();
                format!(
                    "{}\n\n\
                    Valid actions: {}\n\
                    Example: landmarks home \"browse landmarks\"",
                    msg,
                    valid.join(", ")
                )
            }
            LandmarksError::InvalidUsername(name) => {
                format!(
                    "Invalid username: '{}'\n\n\
                    Usernames are 1-64 characters of letters, digits, '.', '_' or '-'.",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LandmarksError
pub type Result<T> = std::result::Result<T, LandmarksError>;
