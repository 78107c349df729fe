//! HTTP surface of the portal.
//!
//! Each screen is served as a JSON view at its route path. Protected
//! screens sit behind the session guard; confirmations travel in the
//! `X-Confirm` header.
//!
//! The router is composable: `api_router()` returns a `Router` that can be
//! mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
