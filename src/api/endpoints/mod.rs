//! Endpoint handlers.
//!
//! Each module corresponds to a screen (or a group of related screens).
//! `GET` returns the screen's view; other methods perform its actions.
//! Handlers only translate between HTTP and the `screens` layer.

pub mod appointments;
pub mod auth;
pub mod booking;
pub mod health;
pub mod healthcare;
pub mod home;
pub mod layout;
pub mod map;
pub mod prescriptions;
pub mod settings;
pub mod wellness;

use uuid::Uuid;

use crate::api::error::ApiError;

/// Parse a record id from a path segment.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid ID format".into()))
}
