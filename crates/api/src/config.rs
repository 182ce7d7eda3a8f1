use std::time::Duration;

use firewatch_events::DEFAULT_TICK_INTERVAL;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults that reproduce the stock simulation; override via
/// environment variables (or a `.env` file) when needed.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seconds between simulated fire events (default: `5`).
    pub generator_interval_secs: u64,
    /// Fixed RNG seed for a reproducible feed. `None` seeds from the OS.
    pub generator_seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default   |
    /// |---------------------------|-----------|
    /// | `HOST`                    | `0.0.0.0` |
    /// | `PORT`                    | `3001`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`      |
    /// | `GENERATOR_INTERVAL_SECS` | `5`       |
    /// | `GENERATOR_SEED`          | unset     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let generator_interval_secs: u64 = std::env::var("GENERATOR_INTERVAL_SECS")
            .map(|v| {
                v.parse()
                    .expect("GENERATOR_INTERVAL_SECS must be a valid u64")
            })
            .unwrap_or(DEFAULT_TICK_INTERVAL.as_secs());
        assert!(
            generator_interval_secs > 0,
            "GENERATOR_INTERVAL_SECS must be greater than zero"
        );

        let generator_seed: Option<u64> = std::env::var("GENERATOR_SEED").ok().map(|v| {
            v.parse()
                .expect("GENERATOR_SEED must be a valid u64")
        });

        Self {
            host,
            port,
            request_timeout_secs,
            generator_interval_secs,
            generator_seed,
        }
    }

    /// Interval between generator ticks.
    pub fn generator_interval(&self) -> Duration {
        Duration::from_secs(self.generator_interval_secs)
    }
}
