//! Homescreen use case

use crate::domain::HomeAction;
use log::debug;

/// Request from the homescreen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomescreenInputData {
    pub action: String,
}

impl HomescreenInputData {
    pub fn new(action: impl Into<String>) -> Self {
        HomescreenInputData {
            action: action.into(),
        }
    }
}

/// Navigation result handed to the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomescreenOutputData {
    pub view_name: String,
    pub success: bool,
}

/// Presenter side of the homescreen use case
pub trait HomescreenOutputBoundary {
    fn prepare_success_view(&mut self, output: HomescreenOutputData);
    fn prepare_fail_view(&mut self, error: String);
}

/// Entry point the controller calls
pub trait HomescreenInputBoundary {
    fn execute(&mut self, input: HomescreenInputData);
}

/// Routes a homescreen action to the view it selects
pub struct HomescreenInteractor<P: HomescreenOutputBoundary> {
    presenter: P,
}

impl<P: HomescreenOutputBoundary> HomescreenInteractor<P> {
    pub fn new(presenter: P) -> Self {
        HomescreenInteractor { presenter }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

impl<P: HomescreenOutputBoundary> HomescreenInputBoundary for HomescreenInteractor<P> {
    fn execute(&mut self, input: HomescreenInputData) {
        match HomeAction::from_label(&input.action) {
            Some(action) => {
                let view = action.target();
                debug!(
                    "event=home_route module=homescreen status=ok view={}",
                    view.name()
                );
                self.presenter.prepare_success_view(HomescreenOutputData {
                    view_name: view.name().to_string(),
                    success: true,
                });
            }
            None => {
                debug!("event=home_route module=homescreen status=unrecognized");
                self.presenter
                    .prepare_fail_view(format!("Unrecognized action: '{}'", input.action));
            }
        }
    }
}
