//! Debounced health-center search with stale-result suppression.
//!
//! Every query takes a generation ticket. A ZIP edit waits out the debounce
//! period, then the simulated load delay; at each checkpoint the query gives
//! up if a newer ticket has been issued. Results are applied under the lock
//! only while their ticket is still the latest, so an older query can never
//! overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

use crate::config::AppConfig;
use crate::generators::{generate_centers, is_complete_zip, FALLBACK_ZIP};
use crate::models::HealthCenter;

/// Centers generated for one ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResults {
    pub zip: String,
    pub centers: Vec<HealthCenter>,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Applied(MapResults),
    /// A newer query was issued before this one finished.
    Superseded,
    /// The ZIP code is not five digits; nothing was queried.
    Incomplete,
}

pub struct MapSearch {
    generation: AtomicU64,
    applied: Mutex<Option<MapResults>>,
    debounce: Duration,
    load_delay: Duration,
}

impl MapSearch {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            generation: AtomicU64::new(0),
            applied: Mutex::new(None),
            debounce: config.debounce,
            load_delay: config.map_delay,
        }
    }

    /// Results currently shown, if any query has completed.
    pub fn current(&self) -> Option<MapResults> {
        self.lock().clone()
    }

    /// Load `zip` immediately (no debounce).
    pub async fn load(&self, zip: &str) -> SearchOutcome {
        let ticket = self.take_ticket();
        self.fetch(ticket, zip).await
    }

    /// Current results, running the initial load for the default ZIP when
    /// nothing has been loaded yet. An initial load overtaken by another
    /// query shows whatever that query applied.
    pub async fn current_or_initial(&self) -> SearchOutcome {
        if let Some(results) = self.current() {
            return SearchOutcome::Applied(results);
        }
        match self.load(FALLBACK_ZIP).await {
            SearchOutcome::Superseded => self
                .current()
                .map_or(SearchOutcome::Superseded, SearchOutcome::Applied),
            outcome => outcome,
        }
    }

    /// React to an edit of the ZIP field. Any edit cancels a pending query;
    /// only a complete ZIP schedules a new one.
    pub async fn zip_edited(&self, zip: &str) -> SearchOutcome {
        let ticket = self.take_ticket();
        if !is_complete_zip(zip) {
            return SearchOutcome::Incomplete;
        }
        sleep(self.debounce).await;
        if !self.is_latest(ticket) {
            tracing::debug!(zip, ticket, "Map query superseded during debounce");
            return SearchOutcome::Superseded;
        }
        self.fetch(ticket, zip).await
    }

    async fn fetch(&self, ticket: u64, zip: &str) -> SearchOutcome {
        sleep(self.load_delay).await;
        let centers = generate_centers(zip);

        let mut applied = self.lock();
        if !self.is_latest(ticket) {
            tracing::debug!(zip, ticket, "Stale map results dropped");
            return SearchOutcome::Superseded;
        }
        let results = MapResults {
            zip: zip.to_string(),
            centers,
            generation: ticket,
        };
        *applied = Some(results.clone());
        tracing::info!(zip, count = results.centers.len(), "Map results applied");
        SearchOutcome::Applied(results)
    }

    fn take_ticket(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    fn lock(&self) -> MutexGuard<'_, Option<MapResults>> {
        self.applied.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn sleep(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
