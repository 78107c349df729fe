//! Welcome, login, account creation and logout.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, HeaderConfirmation, NextScreen};
use crate::models::UserProfile;
use crate::screens::auth::{self, AuthFormView, CreateAccountForm, LoginForm, WelcomeView};
use crate::screens::settings::{self, LogoutOutcome};

/// `GET /`
pub async fn welcome() -> Json<WelcomeView> {
    Json(auth::welcome())
}

/// `GET /login`
pub async fn login_form() -> Json<AuthFormView> {
    Json(auth::login_view())
}

/// `POST /login`: any non-empty email and password sign in.
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(form): Json<LoginForm>,
) -> Result<Json<NextScreen<UserProfile>>, ApiError> {
    let next = auth::login(&ctx.core, &form)?.ok_or(ApiError::IncompleteForm("email, password"))?;
    let profile = ctx.core.snapshot()?.profile;
    Ok(Json(NextScreen::to(next.path(), Some(profile))))
}

/// `GET /create-account`
pub async fn create_account_form() -> Json<AuthFormView> {
    Json(auth::create_account_view())
}

/// `POST /create-account`
pub async fn create_account(
    State(ctx): State<ApiContext>,
    Json(form): Json<CreateAccountForm>,
) -> Result<Json<NextScreen<UserProfile>>, ApiError> {
    let next = auth::create_account(&ctx.core, &form)?
        .ok_or(ApiError::IncompleteForm("first_name, email, password"))?;
    let profile = ctx.core.snapshot()?.profile;
    Ok(Json(NextScreen::to(next.path(), Some(profile))))
}

/// `POST /logout`: requires `X-Confirm: true`.
pub async fn logout(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Json<NextScreen<()>>, ApiError> {
    let confirmation = HeaderConfirmation::from_headers(&headers);
    match settings::logout(&ctx.core, &confirmation)? {
        LogoutOutcome::LoggedOut(next) => Ok(Json(NextScreen::to(next.path(), None))),
        LogoutOutcome::Declined { prompt } => Err(ApiError::ConfirmationRequired {
            prompt: prompt.to_string(),
        }),
    }
}
