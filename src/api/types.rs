//! Shared types for the HTTP layer.

use std::sync::Arc;

use axum::http::HeaderMap;
use serde::Serialize;

use crate::confirm::Confirmation;
use crate::core_state::CoreState;
use crate::map_search::MapSearch;

/// Header carrying the user's answer to a confirmation prompt.
pub const CONFIRM_HEADER: &str = "X-Confirm";

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all routes and middleware.
/// Wraps `CoreState` plus the map screen's search state.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
    pub map_search: Arc<MapSearch>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        let map_search = Arc::new(MapSearch::new(&core.config));
        Self { core, map_search }
    }
}

// ═══════════════════════════════════════════════════════════
// Request-level confirmation
// ═══════════════════════════════════════════════════════════

/// Confirmation answered by the `X-Confirm` request header.
///
/// Only `true`, `yes` or `1` (any case) confirm; a missing header declines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderConfirmation {
    confirmed: bool,
}

impl HeaderConfirmation {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let confirmed = headers
            .get(CONFIRM_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"))
            .unwrap_or(false);
        Self { confirmed }
    }
}

impl Confirmation for HeaderConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, confirmed = self.confirmed, "Confirmation via header");
        self.confirmed
    }
}

// ═══════════════════════════════════════════════════════════
// Responses
// ═══════════════════════════════════════════════════════════

/// Result of an action that moves the user to another screen.
#[derive(Debug, Serialize)]
pub struct NextScreen<T: Serialize> {
    pub next: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,
}

impl<T: Serialize> NextScreen<T> {
    pub fn to(next: impl Into<String>, record: Option<T>) -> Self {
        Self {
            next: next.into(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(v) = value {
            headers.insert(CONFIRM_HEADER, HeaderValue::from_static(v));
        }
        headers
    }

    #[test]
    fn header_confirmation_values() {
        assert!(HeaderConfirmation::from_headers(&headers(Some("true"))).confirm("?"));
        assert!(HeaderConfirmation::from_headers(&headers(Some("YES"))).confirm("?"));
        assert!(HeaderConfirmation::from_headers(&headers(Some("1"))).confirm("?"));
        assert!(!HeaderConfirmation::from_headers(&headers(Some("no"))).confirm("?"));
        assert!(!HeaderConfirmation::from_headers(&headers(None)).confirm("?"));
    }
}
