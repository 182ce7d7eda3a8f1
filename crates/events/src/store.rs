//! In-memory store of the currently active alert per location.

use firewatch_core::{FireEvent, Location};
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// Latest active [`FireEvent`] for each location.
///
/// A location is present iff the most recent event applied for it was
/// `active`. Each operation takes the lock exactly once, so readers never
/// observe a half-applied update. Iteration follows the order in which
/// locations first became active.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared between the generator task and request handlers.
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: RwLock<IndexMap<Location, FireEvent>>,
}

impl AlertStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event: `active` upserts it under its location, `cleared`
    /// removes the location (no-op if absent).
    pub async fn apply(&self, event: FireEvent) {
        let mut alerts = self.alerts.write().await;
        if event.status.is_active() {
            alerts.insert(event.location, event);
        } else {
            alerts.shift_remove(&event.location);
        }
    }

    /// Snapshot of every active alert.
    pub async fn list_active(&self) -> Vec<FireEvent> {
        self.alerts.read().await.values().cloned().collect()
    }

    /// Active alert for a single location, if any.
    pub async fn get(&self, location: Location) -> Option<FireEvent> {
        self.alerts.read().await.get(&location).cloned()
    }

    /// Number of locations with an active alert.
    pub async fn len(&self) -> usize {
        self.alerts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.alerts.read().await.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
