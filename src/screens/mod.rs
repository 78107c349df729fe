//! Screen view models and the actions their controls trigger.
//!
//! Each module turns the session (plus request input) into the data one
//! screen renders, and exposes the operations its buttons perform. Screens
//! hold no cross-screen state; everything shared goes through `CoreState`.

pub mod appointments;
pub mod auth;
pub mod booking;
pub mod calendar;
pub mod confirmation;
pub mod healthcare;
pub mod home;
pub mod layout;
pub mod map;
pub mod prescriptions;
pub mod settings;
pub mod wellness;

use serde::Serialize;

use crate::navigation::Route;

/// A button that navigates somewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavAction {
    pub label: &'static str,
    pub path: String,
}

impl NavAction {
    pub fn to(label: &'static str, route: Route) -> Self {
        Self {
            label,
            path: route.path().to_string(),
        }
    }

    pub fn with_path(label: &'static str, path: impl Into<String>) -> Self {
        Self {
            label,
            path: path.into(),
        }
    }
}
