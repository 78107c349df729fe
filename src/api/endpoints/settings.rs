//! Profile settings.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::UserProfile;
use crate::screens::settings::{self, SettingsView};

/// `GET /settings`
pub async fn view(State(ctx): State<ApiContext>) -> Result<Json<SettingsView>, ApiError> {
    let session = ctx.core.read_session()?;
    Ok(Json(settings::settings(&session)))
}

/// `PUT /settings`: replace the profile.
pub async fn save(
    State(ctx): State<ApiContext>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<SettingsView>, ApiError> {
    settings::save(&ctx.core, profile)?;
    let session = ctx.core.read_session()?;
    Ok(Json(settings::settings(&session)))
}
