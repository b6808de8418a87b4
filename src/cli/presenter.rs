//! Console presenter for the homescreen

use crate::application::{HomescreenOutputBoundary, HomescreenOutputData};

/// Outcome recorded by the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeOutcome {
    Navigate(String),
    Failed(String),
}

/// Captures the homescreen result so the CLI can print it
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    outcome: Option<HomeOutcome>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_outcome(self) -> Option<HomeOutcome> {
        self.outcome
    }
}

impl HomescreenOutputBoundary for ConsolePresenter {
    fn prepare_success_view(&mut self, output: HomescreenOutputData) {
        self.outcome = Some(HomeOutcome::Navigate(output.view_name));
    }

    fn prepare_fail_view(&mut self, error: String) {
        self.outcome = Some(HomeOutcome::Failed(error));
    }
}
