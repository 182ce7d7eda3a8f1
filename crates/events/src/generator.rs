//! Periodic synthetic fire-event generator.
//!
//! [`EventGenerator`] fabricates one [`FireEvent`] per tick and applies it to
//! the shared [`AlertStore`]. Randomness and time are injected so tests can
//! replay exact sequences; production uses an OS-seeded [`StdRng`] and the
//! [`SystemClock`].

use std::sync::Arc;
use std::time::Duration;

use chrono::SubsecRound;
use firewatch_core::alert::{event_id, MAX_INTENSITY, MIN_INTENSITY};
use firewatch_core::{AlertStatus, FireEvent, Location};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::clock::{Clock, SystemClock};
use crate::store::AlertStore;

/// Time between generated events.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Chance that a generated event is `active` rather than `cleared`.
pub const DEFAULT_ACTIVE_PROBABILITY: f64 = 0.7;

// ---------------------------------------------------------------------------
// EventGenerator
// ---------------------------------------------------------------------------

/// Background producer of synthetic fire events.
pub struct EventGenerator<R = StdRng, C = SystemClock> {
    store: Arc<AlertStore>,
    rng: R,
    clock: C,
    active_probability: f64,
    /// Millisecond value of the last issued id; ids never repeat or go back.
    last_id_millis: Option<i64>,
}

impl EventGenerator {
    /// Generator seeded from the operating system, reading the system clock.
    pub fn new(store: Arc<AlertStore>) -> Self {
        Self::with_parts(store, StdRng::from_os_rng(), SystemClock)
    }

    /// Generator with a fixed seed, producing a reproducible feed.
    pub fn seeded(store: Arc<AlertStore>, seed: u64) -> Self {
        Self::with_parts(store, StdRng::seed_from_u64(seed), SystemClock)
    }
}

impl<R, C> EventGenerator<R, C>
where
    R: Rng + Send,
    C: Clock,
{
    /// Assemble a generator from explicit randomness and time sources.
    pub fn with_parts(store: Arc<AlertStore>, rng: R, clock: C) -> Self {
        Self {
            store,
            rng,
            clock,
            active_probability: DEFAULT_ACTIVE_PROBABILITY,
            last_id_millis: None,
        }
    }

    /// Override the `active` probability. Values are clamped to `[0, 1]`.
    pub fn with_active_probability(mut self, probability: f64) -> Self {
        self.active_probability = if probability.is_nan() {
            DEFAULT_ACTIVE_PROBABILITY
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Fabricate the next event without touching the store.
    pub fn generate(&mut self) -> FireEvent {
        let location = Location::ALL[self.rng.random_range(0..Location::COUNT)];
        let now = self.clock.now();
        let id = event_id(self.next_id_millis(now.timestamp_millis()));
        let intensity = self.rng.random_range(MIN_INTENSITY..=MAX_INTENSITY);
        let status = if self.rng.random_bool(self.active_probability) {
            AlertStatus::Active
        } else {
            AlertStatus::Cleared
        };

        FireEvent {
            id,
            location,
            intensity,
            status,
            timestamp: now.trunc_subsecs(0),
        }
    }

    /// One unit of work: generate an event and apply it to the store.
    pub async fn tick(&mut self) {
        let event = self.generate();

        tracing::info!(
            id = %event.id,
            location = %event.location,
            intensity = event.intensity,
            status = ?event.status,
            "Simulated fire event"
        );

        self.store.apply(event).await;
    }

    /// Run the generator loop.
    ///
    /// The first tick fires immediately, then once per `interval`. The loop
    /// exits when `cancel` is triggered.
    pub async fn run(mut self, interval: Duration, cancel: CancellationToken) {
        tracing::info!(interval_secs = interval.as_secs(), "Fire event simulation started");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Fire event simulation stopping");
                    break;
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }
    }

    /// Spawn [`run`](Self::run) onto the tokio runtime.
    pub fn spawn(self, interval: Duration, cancel: CancellationToken) -> tokio::task::JoinHandle<()>
    where
        R: 'static,
        C: 'static,
    {
        tokio::spawn(self.run(interval, cancel))
    }

    fn next_id_millis(&mut self, now_millis: i64) -> i64 {
        let millis = match self.last_id_millis {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_id_millis = Some(millis);
        millis
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
