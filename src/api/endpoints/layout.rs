//! Application shell.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::screens::layout::{self, LayoutView};

#[derive(Deserialize)]
pub struct LayoutQuery {
    #[serde(default)]
    pub path: String,
}

/// `GET /layout?path=/home`: navigation bar for the current screen.
pub async fn shell(
    State(ctx): State<ApiContext>,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<LayoutView>, ApiError> {
    let session = ctx.core.read_session()?;
    Ok(Json(layout::layout(&session, &query.path)))
}
