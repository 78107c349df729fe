//! Middleware for the portal router.
//!
//! - `guard`: signed-out access to protected screens
//! - `audit`: per-request access log

pub mod audit;
pub mod guard;
