//! Output formatting utilities

use crate::domain::{Account, Note};
use std::collections::BTreeMap;

/// Format notes for display, one per line
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {}  [{}] {}\n",
            note.id,
            note.created.format("%d-%m-%Y"),
            note.landmark,
            note.content
        ));
    }
    output
}

/// Format accounts with their note counts
pub fn format_account_list<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> String {
    let mut output = String::new();
    for account in accounts {
        output.push_str(&format!("{} ({})\n", account.username, account.notes.len()));
    }

    if output.is_empty() {
        return "No users found".to_string();
    }
    output
}

/// Format landmark names with their note counts
pub fn format_landmark_list(landmarks: &BTreeMap<String, usize>) -> String {
    if landmarks.is_empty() {
        return "No landmarks found".to_string();
    }

    let mut output = String::new();
    for (name, count) in landmarks {
        output.push_str(&format!("{} ({})\n", name, count));
    }
    output
}
