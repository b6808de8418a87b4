//! landmarks - Notes on landmarks, per user
//!
//! Keeps user accounts and their landmark notes in a local workspace, and
//! routes homescreen actions to the views they select.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::LandmarksError;
