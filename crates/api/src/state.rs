use std::sync::Arc;

use firewatch_events::AlertStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Active alerts, written by the event generator.
    pub alert_store: Arc<AlertStore>,
}
