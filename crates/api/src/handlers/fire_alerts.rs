//! Handlers for the simulated fire-alert feed.
//!
//! Both endpoints are read-only views of the [`AlertStore`](firewatch_events::AlertStore);
//! the event generator is the only writer.

use axum::extract::{Path, State};
use axum::Json;
use firewatch_core::error::CoreError;
use firewatch_core::{FireEvent, Location};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/fire-alerts
///
/// Every currently active alert, one per location. The body is a bare JSON
/// array (no envelope); an empty array when nothing is burning.
pub async fn list_fire_alerts(State(state): State<AppState>) -> Json<Vec<FireEvent>> {
    Json(state.alert_store.list_active().await)
}

/// GET /api/fire-alerts/{location}
///
/// The active alert for a single location. 404 if the location has none,
/// 400 if the name is not a monitored location.
pub async fn get_fire_alert(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<FireEvent>> {
    let location: Location = location.parse()?;

    let alert = state
        .alert_store
        .get(location)
        .await
        .ok_or_else(|| CoreError::NotFound {
            entity: "Active fire alert",
            key: location.to_string(),
        })?;

    Ok(Json(alert))
}
