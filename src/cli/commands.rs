//! CLI command definitions

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "landmarks")]
#[command(about = "Notes on landmarks, per user", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Add or remove notes
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },

    /// List notes for a user or a landmark
    #[command(group(ArgGroup::new("filter").args(["user", "landmark"])))]
    Notes {
        /// Show notes written by this user
        #[arg(short, long)]
        user: Option<String>,

        /// Show every user's notes for this landmark (exact name)
        #[arg(short, long)]
        landmark: Option<String>,
    },

    /// List landmarks that have notes
    Landmarks,

    /// Navigate from the homescreen
    Home {
        /// Action: "browse landmarks", "plan a route" or "my progress"
        action: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Create an account
    Add { name: String },
    /// List accounts
    List,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Add a note about a landmark
    Add {
        user: String,
        landmark: String,
        text: String,
    },
    /// Delete a note by id
    Rm { id: String },
}
