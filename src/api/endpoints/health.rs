//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub authenticated: bool,
    pub version: &'static str,
}

/// `GET /health`: liveness and session flag.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        authenticated: ctx.core.is_authenticated(),
        version: crate::config::APP_VERSION,
    }))
}
