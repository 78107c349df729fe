//! Welcome, login and account creation.
//!
//! There is no credential check: any non-empty email and password sign in.
//! Both forms are presence-gated and leave the session untouched when a
//! required field is blank.

use serde::{Deserialize, Serialize};

use super::NavAction;
use crate::config::APP_NAME;
use crate::core_state::{CoreError, CoreState};
use crate::models::UserProfile;
use crate::navigation::Route;

#[derive(Debug, Clone, Serialize)]
pub struct WelcomeView {
    pub app_name: &'static str,
    pub actions: Vec<NavAction>,
}

pub fn welcome() -> WelcomeView {
    WelcomeView {
        app_name: APP_NAME,
        actions: vec![
            NavAction::to("Login", Route::Login),
            NavAction::to("Create Account", Route::CreateAccount),
        ],
    }
}

/// Static description of a sign-in form.
#[derive(Debug, Clone, Serialize)]
pub struct AuthFormView {
    pub title: &'static str,
    pub fields: &'static [&'static str],
    pub required: &'static [&'static str],
    pub alternate: NavAction,
}

pub fn login_view() -> AuthFormView {
    AuthFormView {
        title: "Login",
        fields: &["email", "password"],
        required: &["email", "password"],
        alternate: NavAction::to("Create Account", Route::CreateAccount),
    }
}

pub fn create_account_view() -> AuthFormView {
    AuthFormView {
        title: "Create Account",
        fields: &["first_name", "last_name", "email", "password"],
        required: &["first_name", "email", "password"],
        alternate: NavAction::to("Login", Route::Login),
    }
}

// ── Login ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    /// Profile seeded from the email: first name is the local part.
    pub fn profile(&self) -> Option<UserProfile> {
        if !self.is_complete() {
            return None;
        }
        let email = self.email.as_str();
        let local = email.split('@').next().unwrap_or(email);
        Some(UserProfile {
            first_name: local.to_string(),
            last_name: String::new(),
            email: email.to_string(),
            ..Default::default()
        })
    }
}

/// Sign in. Returns the screen to show next, or `None` when gated.
pub fn login(core: &CoreState, form: &LoginForm) -> Result<Option<Route>, CoreError> {
    let Some(profile) = form.profile() else {
        return Ok(None);
    };
    core.login(profile)?;
    Ok(Some(Route::Home))
}

// ── Create account ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateAccountForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl CreateAccountForm {
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.is_complete().then(|| UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            ..Default::default()
        })
    }
}

pub fn create_account(
    core: &CoreState,
    form: &CreateAccountForm,
) -> Result<Option<Route>, CoreError> {
    let Some(profile) = form.profile() else {
        return Ok(None);
    };
    core.login(profile)?;
    Ok(Some(Route::Home))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn login_uses_email_local_part() {
        let core = CoreState::new();
        let next = login(&core, &login_form("a@b.com", "x")).unwrap();
        assert_eq!(next, Some(Route::Home));
        let profile = core.snapshot().unwrap().profile;
        assert_eq!(profile.first_name, "a");
        assert_eq!(profile.last_name, "");
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.zip_code, "");
    }

    #[test]
    fn login_without_at_sign_uses_whole_email() {
        let form = login_form("someone", "pw");
        assert_eq!(form.profile().unwrap().first_name, "someone");
    }

    #[test]
    fn blank_login_is_a_no_op() {
        let core = CoreState::new();
        assert_eq!(login(&core, &login_form("", "x")).unwrap(), None);
        assert_eq!(login(&core, &login_form("a@b.com", "")).unwrap(), None);
        assert!(!core.is_authenticated());
    }

    #[test]
    fn whitespace_credentials_are_non_empty() {
        let core = CoreState::new();
        let next = login(&core, &login_form(" ", "x")).unwrap();
        assert_eq!(next, Some(Route::Home));
        assert!(core.is_authenticated());
        let profile = core.snapshot().unwrap().profile;
        assert_eq!(profile.email, " ");
        assert_eq!(profile.first_name, " ");

        let form = CreateAccountForm {
            first_name: " ".into(),
            email: "  ".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert!(form.is_complete());
    }

    #[test]
    fn create_account_requires_first_name_email_password() {
        let core = CoreState::new();
        let mut form = CreateAccountForm {
            first_name: String::new(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
        };
        assert_eq!(create_account(&core, &form).unwrap(), None);
        assert!(!core.is_authenticated());

        form.first_name = "Ada".into();
        assert_eq!(create_account(&core, &form).unwrap(), Some(Route::Home));
        let profile = core.snapshot().unwrap().profile;
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.phone, "");
    }

    #[test]
    fn last_name_is_optional() {
        let form = CreateAccountForm {
            first_name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert!(form.is_complete());
    }

    #[test]
    fn form_views_link_to_each_other() {
        assert_eq!(login_view().alternate.path, "/create-account");
        assert_eq!(create_account_view().alternate.path, "/login");
        assert!(!create_account_view().required.contains(&"last_name"));
    }

    #[test]
    fn welcome_offers_both_entry_points() {
        let view = welcome();
        let paths: Vec<_> = view.actions.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, ["/login", "/create-account"]);
    }
}
