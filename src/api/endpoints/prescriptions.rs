//! Prescription manager CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_id;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Prescription;
use crate::screens::prescriptions::{self, PrescriptionForm, PrescriptionsView, SaveOutcome};

const REQUIRED: &str = "name, dosage, days";

#[derive(Deserialize)]
pub struct EditQuery {
    pub edit: Option<String>,
}

/// `GET /prescriptions?edit=<id>`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<EditQuery>,
) -> Result<Json<PrescriptionsView>, ApiError> {
    let editing = query.edit.as_deref().map(parse_id).transpose()?;
    let session = ctx.core.read_session()?;
    Ok(Json(prescriptions::prescriptions(&session, editing)))
}

/// `POST /prescriptions`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(form): Json<PrescriptionForm>,
) -> Result<(StatusCode, Json<Prescription>), ApiError> {
    match prescriptions::add(&ctx.core, &form)? {
        SaveOutcome::Saved(rx) => Ok((StatusCode::CREATED, Json(rx))),
        SaveOutcome::Incomplete => Err(ApiError::IncompleteForm(REQUIRED)),
        SaveOutcome::NotFound => Err(ApiError::Internal("add reported a missing record".into())),
    }
}

/// `PUT /prescriptions/:id`: edit in place.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(form): Json<PrescriptionForm>,
) -> Result<Json<Prescription>, ApiError> {
    let id = parse_id(&id)?;
    match prescriptions::update(&ctx.core, id, &form)? {
        SaveOutcome::Saved(rx) => Ok(Json(rx)),
        SaveOutcome::Incomplete => Err(ApiError::IncompleteForm(REQUIRED)),
        SaveOutcome::NotFound => Err(ApiError::NotFound(format!("Prescription {id}"))),
    }
}

/// `DELETE /prescriptions/:id`: no confirmation; unknown ids are a no-op.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    prescriptions::delete(&ctx.core, id)?;
    Ok(StatusCode::NO_CONTENT)
}
