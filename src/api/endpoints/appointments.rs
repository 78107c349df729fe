//! Appointment list and cancellation.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use super::parse_id;
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, HeaderConfirmation};
use crate::screens::appointments::{self, CancelOutcome, MyAppointmentsView};

/// `GET /my-appointments`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<MyAppointmentsView>, ApiError> {
    let today = ctx.core.clock().today();
    let session = ctx.core.read_session()?;
    Ok(Json(appointments::my_appointments(session.appointments.as_slice(), today)))
}

/// `DELETE /my-appointments/:id`: requires `X-Confirm: true`.
/// Unknown ids are a no-op.
pub async fn cancel(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let confirmation = HeaderConfirmation::from_headers(&headers);
    match appointments::cancel(&ctx.core, id, &confirmation)? {
        CancelOutcome::Declined { prompt } => Err(ApiError::ConfirmationRequired { prompt }),
        CancelOutcome::Cancelled | CancelOutcome::NotFound => Ok(StatusCode::NO_CONTENT),
    }
}
