//! Request audit logging.
//!
//! Logs every request with method, path, response status and latency.
//! Runs innermost so it sees the handler's final status.

use std::time::Instant;

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::types::ApiContext;

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let authenticated = req
        .extensions()
        .get::<ApiContext>()
        .map(|ctx| ctx.core.is_authenticated())
        .unwrap_or(false);

    let started = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        authenticated,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );

    response
}
