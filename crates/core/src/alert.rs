//! Fire-sensor event types (the wire shape served by `/api/fire-alerts`).

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::types::{Intensity, Timestamp};

/// Lowest reportable intensity.
pub const MIN_INTENSITY: Intensity = 1;

/// Highest reportable intensity.
pub const MAX_INTENSITY: Intensity = 10;

/// Whether an event raises or clears the alert at its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Fire detected; the location has an active alert.
    Active,
    /// The previous alert at this location is resolved.
    Cleared,
}

impl AlertStatus {
    pub fn is_active(self) -> bool {
        matches!(self, AlertStatus::Active)
    }
}

/// A single synthetic fire-sensor event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireEvent {
    /// `fire-<unix millis>`, unique per generated event.
    pub id: String,
    /// Facility area that reported the event.
    pub location: Location,
    /// Reading in `MIN_INTENSITY..=MAX_INTENSITY`.
    pub intensity: Intensity,
    pub status: AlertStatus,
    /// Generation time, whole seconds (serializes as `YYYY-MM-DDTHH:MM:SSZ`).
    pub timestamp: Timestamp,
}

/// Build the event identifier for a generation instant in unix milliseconds.
pub fn event_id(millis: i64) -> String {
    format!("fire-{millis}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
