//! Route definitions for the fire-alert feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::fire_alerts;
use crate::state::AppState;

/// Fire-alert routes mounted at `/fire-alerts`.
///
/// ```text
/// GET    /                  -> list_fire_alerts
/// GET    /{location}        -> get_fire_alert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fire_alerts::list_fire_alerts))
        .route("/{location}", get(fire_alerts::get_fire_alert))
}
