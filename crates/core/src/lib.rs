//! Firewatch domain types.
//!
//! - [`FireEvent`] -- a single synthetic fire-sensor reading.
//! - [`Location`] -- the fixed set of facility areas that report events.
//! - [`AlertStatus`] -- whether an event raises or clears an alert.
//! - [`CoreError`](error::CoreError) -- domain-level error taxonomy.

pub mod alert;
pub mod error;
pub mod location;
pub mod types;

pub use alert::{AlertStatus, FireEvent};
pub use location::Location;
