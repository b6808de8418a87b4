//! Homescreen actions and the views they lead to

/// A presentation target selected from the homescreen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    BrowseLandmarks,
    PlanRoute,
    MyProgress,
}

impl View {
    /// Identifier the presentation layer switches on
    pub fn name(&self) -> &'static str {
        match self {
            View::BrowseLandmarks => "browse landmarks",
            View::PlanRoute => "plan a route",
            View::MyProgress => "my progress",
        }
    }
}

/// Actions recognized on the homescreen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeAction {
    BrowseLandmarks,
    PlanRoute,
    MyProgress,
}

/// Action label -> target view. Add a row here to expose a new action.
const ROUTES: &[(HomeAction, &str, View)] = &[
    (HomeAction::BrowseLandmarks, "browse landmarks", View::BrowseLandmarks),
    (HomeAction::PlanRoute, "plan a route", View::PlanRoute),
    (HomeAction::MyProgress, "my progress", View::MyProgress),
];

impl HomeAction {
    /// Every recognized action, in menu order
    pub const ALL: [HomeAction; 3] = [
        HomeAction::BrowseLandmarks,
        HomeAction::PlanRoute,
        HomeAction::MyProgress,
    ];

    // ROUTES rows follow declaration order
    fn route(&self) -> &'static (HomeAction, &'static str, View) {
        &ROUTES[*self as usize]
    }

    /// The exact string a caller passes to select this action
    pub fn label(&self) -> &'static str {
        self.route().1
    }

    /// The view this action navigates to
    pub fn target(&self) -> View {
        self.route().2
    }

    /// Exact, case-sensitive lookup of an action label
    pub fn from_label(label: &str) -> Option<HomeAction> {
        ROUTES
            .iter()
            .find(|(_, l, _)| *l == label)
            .map(|(action, _, _)| *action)
    }
}
