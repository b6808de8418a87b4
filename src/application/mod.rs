//! Application layer - Use cases and orchestration

pub mod homescreen;
pub mod init;
pub mod manage_config;
pub mod notes;

pub use homescreen::{
    HomescreenInputBoundary, HomescreenInputData, HomescreenInteractor, HomescreenOutputBoundary,
    HomescreenOutputData,
};
pub use manage_config::ConfigService;
pub use notes::NoteRepository;
