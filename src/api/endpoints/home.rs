//! Dashboard endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::screens::home::{self, HomeView};

/// `GET /home`
pub async fn dashboard(State(ctx): State<ApiContext>) -> Result<Json<HomeView>, ApiError> {
    let today = home::weekday_of(ctx.core.clock().today());
    let session = ctx.core.read_session()?;
    Ok(Json(home::home(&session, today)))
}
