//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod presenter;

pub use commands::{Cli, Commands, NoteCommand, UserCommand};
pub use output::{format_account_list, format_landmark_list, format_note_list};
pub use presenter::{ConsolePresenter, HomeOutcome};
