//! Shell around the signed-in screens: navigation bar and user badge.

use serde::Serialize;

use crate::config::APP_NAME;
use crate::core_state::SessionState;
use crate::navigation::Route;

const NAV_ITEMS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("My Wellness", Route::MyWellness),
    ("My Healthcare", Route::MyHealthcare),
    ("Settings", Route::Settings),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutView {
    pub app_name: &'static str,
    pub user_name: Option<String>,
    pub nav: Vec<NavItem>,
    pub can_logout: bool,
}

/// Build the shell for `current_path`. An item is active when the path
/// resolves to its screen.
pub fn layout(session: &SessionState, current_path: &str) -> LayoutView {
    let current = Route::from_path(current_path);
    let user_name = session
        .authenticated
        .then(|| session.profile.display_name())
        .filter(|name| !name.is_empty());

    LayoutView {
        app_name: APP_NAME,
        user_name,
        nav: NAV_ITEMS
            .iter()
            .map(|&(name, route)| NavItem {
                name,
                path: route.path(),
                active: current == Some(route),
            })
            .collect(),
        can_logout: session.authenticated,
    }
}
