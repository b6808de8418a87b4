//! Landmarks referenced by notes

use crate::error::{LandmarksError, Result};

/// A named point of interest. Notes refer to it by name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Landmark {
    pub name: String,
}

impl Landmark {
    /// Build a landmark from user input. The name is kept verbatim but must
    /// contain something other than whitespace.
    pub fn parse(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(LandmarksError::InvalidLandmark(
                "landmark name cannot be empty".to_string(),
            ));
        }
        Ok(Landmark {
            name: name.to_string(),
        })
    }
}
