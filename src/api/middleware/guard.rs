//! Route guard middleware.
//!
//! One guard for the whole protected route table. It asks
//! `navigation::navigate` what to do with the request path: a signed-out
//! screen request is redirected to `/login` with `303 See Other`; a
//! signed-out mutation is rejected with `AUTH_REQUIRED`.

use axum::http::{Method, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::navigation::{navigate, Navigation};

/// Require a signed-in session for protected screens.
///
/// Accesses `ApiContext` from request extensions (injected by Extension layer).
pub async fn require_session(req: Request<axum::body::Body>, next: Next) -> Response {
    match require_session_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_session_inner(
    req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx: ApiContext = req
        .extensions()
        .get::<ApiContext>()
        .cloned()
        .ok_or(ApiError::Internal("missing API context".into()))?;

    let authenticated = ctx.core.is_authenticated();
    match navigate(req.uri().path(), authenticated) {
        Navigation::Redirect { to, .. } => {
            if is_read(req.method()) {
                tracing::debug!(path = req.uri().path(), "Signed out, redirecting to login");
                Ok(Redirect::to(to.path()).into_response())
            } else {
                Err(ApiError::Unauthorized)
            }
        }
        Navigation::Render { .. } | Navigation::NotFound => Ok(next.run(req).await),
    }
}

fn is_read(method: &Method) -> bool {
    method == Method::GET || method == Method::HEAD
}
