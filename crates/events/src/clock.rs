//! Injectable wall-clock source.

use chrono::Utc;
use firewatch_core::types::Timestamp;

/// Source of the current UTC time.
///
/// The generator reads the clock once per tick; tests substitute a fixed or
/// scripted implementation to get reproducible identifiers and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// The host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}
