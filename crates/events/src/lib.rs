//! Firewatch event simulation and alert state.
//!
//! - [`AlertStore`] -- shared, lock-guarded map of the active alert per
//!   location. Written by the generator, read by HTTP handlers.
//! - [`EventGenerator`] -- periodic task fabricating synthetic fire events
//!   and applying them to the store.
//! - [`Clock`] -- time source injected into the generator.

pub mod clock;
pub mod generator;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use generator::{EventGenerator, DEFAULT_ACTIVE_PROBABILITY, DEFAULT_TICK_INTERVAL};
pub use store::AlertStore;
