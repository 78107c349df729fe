//! Stress logging and the wellness summary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::WellnessEntry;
use crate::screens::wellness::{self, LogStressView, MyWellnessView, WellnessForm};

/// `GET /log-stress`
pub async fn log_form(State(ctx): State<ApiContext>) -> Result<Json<LogStressView>, ApiError> {
    let session = ctx.core.read_session()?;
    Ok(Json(wellness::log_stress(&session)))
}

/// `POST /log-stress`: the journal must not be blank.
pub async fn save(
    State(ctx): State<ApiContext>,
    Json(form): Json<WellnessForm>,
) -> Result<(StatusCode, Json<WellnessEntry>), ApiError> {
    let entry = wellness::save_entry(&ctx.core, &form)?.ok_or(ApiError::IncompleteForm("journal"))?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /my-wellness`
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<MyWellnessView>, ApiError> {
    let session = ctx.core.read_session()?;
    Ok(Json(wellness::my_wellness(&session)))
}
