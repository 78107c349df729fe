//! Profile settings and logout.

use serde::Serialize;

use crate::confirm::{Confirmation, LOGOUT_PROMPT};
use crate::core_state::{CoreError, CoreState, SessionState};
use crate::models::UserProfile;
use crate::navigation::Route;

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub profile: UserProfile,
    pub display_name: String,
    /// Up to two uppercase initials for the avatar.
    pub initials: String,
}

pub fn settings(session: &SessionState) -> SettingsView {
    let profile = &session.profile;
    let initials = [&profile.first_name, &profile.last_name]
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    SettingsView {
        display_name: profile.display_name(),
        initials,
        profile: profile.clone(),
    }
}

/// Replace the profile with the edited form.
pub fn save(core: &CoreState, profile: UserProfile) -> Result<(), CoreError> {
    core.update_profile(profile)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Session cleared; show this screen next.
    LoggedOut(Route),
    Declined { prompt: &'static str },
}

pub fn logout(core: &CoreState, confirmation: &dyn Confirmation) -> Result<LogoutOutcome, CoreError> {
    if !confirmation.confirm(LOGOUT_PROMPT) {
        return Ok(LogoutOutcome::Declined {
            prompt: LOGOUT_PROMPT,
        });
    }
    core.logout()?;
    Ok(LogoutOutcome::LoggedOut(Route::Login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Answer;

    fn signed_in() -> CoreState {
        let core = CoreState::new();
        core.login(UserProfile {
            first_name: "ada".into(),
            last_name: "lovelace".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        })
        .unwrap();
        core
    }

    #[test]
    fn view_shows_profile() {
        let core = signed_in();
        let view = settings(&core.snapshot().unwrap());
        assert_eq!(view.display_name, "ada lovelace");
        assert_eq!(view.initials, "AL");
        assert_eq!(settings(&SessionState::default()).initials, "");
    }

    #[test]
    fn save_replaces_profile() {
        let core = signed_in();
        let mut profile = core.snapshot().unwrap().profile;
        profile.phone = "555-0100".into();
        save(&core, profile.clone()).unwrap();
        assert_eq!(core.snapshot().unwrap().profile, profile);
    }

    #[test]
    fn declined_logout_keeps_session() {
        let core = signed_in();
        assert_eq!(
            logout(&core, &Answer::NO).unwrap(),
            LogoutOutcome::Declined {
                prompt: "Are you sure you want to log out?"
            }
        );
        assert!(core.is_authenticated());
    }

    #[test]
    fn confirmed_logout_clears_session() {
        let core = signed_in();
        assert_eq!(
            logout(&core, &Answer::YES).unwrap(),
            LogoutOutcome::LoggedOut(Route::Login)
        );
        assert!(!core.is_authenticated());
        assert_eq!(core.snapshot().unwrap().profile, UserProfile::default());
    }
}
