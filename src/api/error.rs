//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core_state::CoreError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("Required fields missing: {0}")]
    IncompleteForm(&'static str),
    #[error("Confirmation required: {prompt}")]
    ConfirmationRequired { prompt: String },
    #[error("Superseded by a newer query")]
    Superseded,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "AUTH_REQUIRED",
                "Authentication required".to_string(),
            ),
            ApiError::IncompleteForm(fields) => (
                StatusCode::BAD_REQUEST,
                "INCOMPLETE_FORM",
                format!("Required: {fields}"),
            ),
            ApiError::ConfirmationRequired { prompt } => (
                StatusCode::PRECONDITION_REQUIRED,
                "CONFIRMATION_REQUIRED",
                prompt.clone(),
            ),
            ApiError::Superseded => (
                StatusCode::CONFLICT,
                "SUPERSEDED",
                "A newer search replaced this one".to_string(),
            ),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotAuthenticated => ApiError::Unauthorized,
            CoreError::LockPoisoned => ApiError::Internal("lock poisoned".into()),
        }
    }
}
