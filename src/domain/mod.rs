//! Domain layer - Business logic and domain models

pub mod account;
pub mod home;
pub mod landmark;
pub mod note;

pub use account::{validate_username, Account};
pub use home::{HomeAction, View};
pub use landmark::Landmark;
pub use note::{Note, NoteId};
