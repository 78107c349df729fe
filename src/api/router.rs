//! Portal router.
//!
//! Every screen is a JSON view at its own path; actions use the same path
//! with a mutating method. Two route tables share one `ApiContext`:
//!
//! - protected screens, behind the session guard
//! - public screens and service routes (`/logout`, `/layout`, `/health`)
//!
//! Middleware stack (outermost → innermost):
//! Extension → CORS → Cache-Control → Guard (protected only) → Audit → Handler

use std::sync::Arc;

use axum::http::{header, HeaderValue, Uri};
use axum::routing::{delete, get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the portal router around a shared `CoreState`.
///
/// Middleware uses `Extension<ApiContext>` (injected as the outermost layer).
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

/// Build router from a pre-constructed `ApiContext`, so tests can inspect
/// the map search state directly.
#[cfg(test)]
pub(crate) fn api_router_with_ctx(ctx: ApiContext) -> Router {
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let protected = Router::new()
        .route("/home", get(endpoints::home::dashboard))
        .route(
            "/appointment-booking",
            get(endpoints::booking::booking_view),
        )
        .route(
            "/calendar-sync",
            get(endpoints::booking::calendar_view).post(endpoints::booking::confirm),
        )
        .route("/my-appointments", get(endpoints::appointments::list))
        .route(
            "/my-appointments/:id",
            delete(endpoints::appointments::cancel),
        )
        .route(
            "/log-stress",
            get(endpoints::wellness::log_form).post(endpoints::wellness::save),
        )
        .route("/my-wellness", get(endpoints::wellness::summary))
        .route(
            "/prescriptions",
            get(endpoints::prescriptions::list).post(endpoints::prescriptions::create),
        )
        .route(
            "/prescriptions/:id",
            put(endpoints::prescriptions::update).delete(endpoints::prescriptions::remove),
        )
        .route(
            "/settings",
            get(endpoints::settings::view).put(endpoints::settings::save),
        )
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::middleware::from_fn(middleware::guard::require_session));

    let public = Router::new()
        .route("/", get(endpoints::auth::welcome))
        .route(
            "/login",
            get(endpoints::auth::login_form).post(endpoints::auth::login),
        )
        .route(
            "/create-account",
            get(endpoints::auth::create_account_form).post(endpoints::auth::create_account),
        )
        .route("/logout", axum::routing::post(endpoints::auth::logout))
        .route(
            "/appointment-confirmation",
            get(endpoints::booking::confirmation_view),
        )
        .route("/map", get(endpoints::map::search))
        .route("/my-healthcare", get(endpoints::healthcare::hub))
        .route(
            "/eligibility-check",
            get(endpoints::healthcare::start).post(endpoints::healthcare::submit),
        )
        .route("/layout", get(endpoints::layout::shell))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::audit::log_access));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(protected)
        .merge(public)
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(cors)
        // Extension must be outermost so middleware can extract ApiContext
        .layer(axum::Extension(ctx))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No screen at {}", uri.path()))
}
