//! Route table and the single route guard.
//!
//! Every screen has one path. Protected screens need an authenticated
//! session; navigating to one while signed out yields a redirect to the
//! login screen that replaces the history entry, so "back" does not return
//! to the guarded path.

use serde::Serialize;

/// A screen reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Welcome,
    Login,
    CreateAccount,
    Home,
    AppointmentBooking,
    CalendarSync,
    AppointmentConfirmation,
    MyAppointments,
    LogStress,
    Prescriptions,
    MyWellness,
    MyHealthcare,
    EligibilityCheck,
    Map,
    Settings,
}

/// Whether a route needs a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    Protected,
}

impl Route {
    pub const ALL: [Route; 15] = [
        Route::Welcome,
        Route::Login,
        Route::CreateAccount,
        Route::Home,
        Route::AppointmentBooking,
        Route::CalendarSync,
        Route::AppointmentConfirmation,
        Route::MyAppointments,
        Route::LogStress,
        Route::Prescriptions,
        Route::MyWellness,
        Route::MyHealthcare,
        Route::EligibilityCheck,
        Route::Map,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Login => "/login",
            Route::CreateAccount => "/create-account",
            Route::Home => "/home",
            Route::AppointmentBooking => "/appointment-booking",
            Route::CalendarSync => "/calendar-sync",
            Route::AppointmentConfirmation => "/appointment-confirmation",
            Route::MyAppointments => "/my-appointments",
            Route::LogStress => "/log-stress",
            Route::Prescriptions => "/prescriptions",
            Route::MyWellness => "/my-wellness",
            Route::MyHealthcare => "/my-healthcare",
            Route::EligibilityCheck => "/eligibility-check",
            Route::Map => "/map",
            Route::Settings => "/settings",
        }
    }

    /// Match a request path to a route. Sub-paths (`/prescriptions/<id>`)
    /// belong to their parent screen; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Welcome);
        }
        Route::ALL.into_iter().find(|route| {
            let base = route.path();
            base != "/"
                && (trimmed == base
                    || trimmed
                        .strip_prefix(base)
                        .is_some_and(|rest| rest.starts_with('/')))
        })
    }

    pub fn access(self) -> Access {
        match self {
            Route::Welcome
            | Route::Login
            | Route::CreateAccount
            | Route::AppointmentConfirmation
            | Route::Map
            | Route::MyHealthcare
            | Route::EligibilityCheck => Access::Public,
            Route::Home
            | Route::AppointmentBooking
            | Route::CalendarSync
            | Route::MyAppointments
            | Route::LogStress
            | Route::Prescriptions
            | Route::MyWellness
            | Route::Settings => Access::Protected,
        }
    }

    pub fn is_protected(self) -> bool {
        self.access() == Access::Protected
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Navigation {
    Render { route: Route },
    Redirect { to: Route, replace: bool },
    NotFound,
}

/// The route guard. Protected routes redirect to login while signed out.
pub fn navigate(path: &str, authenticated: bool) -> Navigation {
    match Route::from_path(path) {
        None => Navigation::NotFound,
        Some(route) if route.is_protected() && !authenticated => Navigation::Redirect {
            to: Route::Login,
            replace: true,
        },
        Some(route) => Navigation::Render { route },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route), "{route:?}");
        }
    }

    #[test]
    fn sub_paths_and_trailing_slashes() {
        assert_eq!(Route::from_path("/prescriptions/abc"), Some(Route::Prescriptions));
        assert_eq!(Route::from_path("/home/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Welcome));
        assert_eq!(Route::from_path("/homepage"), None);
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn protected_routes_redirect_when_signed_out() {
        for route in Route::ALL.into_iter().filter(|r| r.is_protected()) {
            assert_eq!(
                navigate(route.path(), false),
                Navigation::Redirect {
                    to: Route::Login,
                    replace: true
                }
            );
            assert_eq!(navigate(route.path(), true), Navigation::Render { route });
        }
    }

    #[test]
    fn public_routes_always_render() {
        for route in Route::ALL.into_iter().filter(|r| !r.is_protected()) {
            assert_eq!(navigate(route.path(), false), Navigation::Render { route });
            assert_eq!(navigate(route.path(), true), Navigation::Render { route });
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(navigate("/admin", true), Navigation::NotFound);
    }

    #[test]
    fn access_classes() {
        assert_eq!(Route::Map.access(), Access::Public);
        assert_eq!(Route::EligibilityCheck.access(), Access::Public);
        assert_eq!(Route::CalendarSync.access(), Access::Protected);
        assert_eq!(Route::Settings.access(), Access::Protected);
    }
}
