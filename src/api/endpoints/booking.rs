//! Booking flow: ZIP search, calendar, and the confirmation receipt.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_id;
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, NextScreen};
use crate::models::Appointment;
use crate::navigation::Route;
use crate::screens::booking::{self, BookingView};
use crate::screens::calendar::{self, CalendarSelection, CalendarView};
use crate::screens::confirmation::{self, ConfirmationView};

#[derive(Deserialize)]
pub struct ZipQuery {
    pub zip: Option<String>,
}

/// `GET /appointment-booking?zip=`
pub async fn booking_view(
    State(ctx): State<ApiContext>,
    Query(query): Query<ZipQuery>,
) -> Result<Json<BookingView>, ApiError> {
    let session = ctx.core.read_session()?;
    Ok(Json(booking::booking(&session.profile, query.zip.as_deref())))
}

/// `GET /calendar-sync?zip=&center=&year=&month=&day=&time=`
pub async fn calendar_view(
    Query(selection): Query<CalendarSelection>,
) -> Result<Json<CalendarView>, ApiError> {
    calendar::calendar(&selection)
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("Invalid month".into()))
}

/// `POST /calendar-sync`: book the selected slot.
pub async fn confirm(
    State(ctx): State<ApiContext>,
    Json(selection): Json<CalendarSelection>,
) -> Result<(StatusCode, Json<NextScreen<Appointment>>), ApiError> {
    let appointment = calendar::confirm_booking(&ctx.core, &selection)?
        .ok_or(ApiError::IncompleteForm("day, time"))?;

    let next = format!("{}?id={}", Route::AppointmentConfirmation.path(), appointment.id);
    Ok((StatusCode::CREATED, Json(NextScreen::to(next, Some(appointment)))))
}

#[derive(Deserialize)]
pub struct ConfirmationQuery {
    pub id: Option<String>,
}

/// `GET /appointment-confirmation?id=`: unknown or missing ids show the
/// sample receipt.
pub async fn confirmation_view(
    State(ctx): State<ApiContext>,
    Query(query): Query<ConfirmationQuery>,
) -> Result<Json<ConfirmationView>, ApiError> {
    let appointment = match query.id.as_deref().map(parse_id) {
        Some(Ok(id)) => ctx.core.appointment(id)?,
        _ => None,
    };
    let today = ctx.core.clock().today();
    Ok(Json(confirmation::confirmation(appointment.as_ref(), today)))
}
