pub mod fire_alerts;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /fire-alerts                  list active alerts (GET)
/// /fire-alerts/{location}       active alert for one location (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/fire-alerts", fire_alerts::router())
}
