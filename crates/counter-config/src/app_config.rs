//! Application configuration
//!
//! Configuration loaded from `.counter-lander.toml`, with environment
//! overrides for the values most often tweaked while trying things out.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`CounterConfig::limit`]
pub const LIMIT_ENV: &str = "COUNTER_LANDER_LIMIT";

/// Application configuration loaded from `.counter-lander.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// Counter bound enforced by the limit middleware, in both directions
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Delay between two timer ticks, in milliseconds
    #[serde(default = "default_timer_interval_ms")]
    pub timer_interval_ms: u64,

    /// How long the UI waits for input before checking for queued actions
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_limit() -> u32 {
    3
}

fn default_timer_interval_ms() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            timer_interval_ms: default_timer_interval_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl CounterConfig {
    /// Load config from file, or use defaults; then apply env overrides
    pub fn load() -> Self {
        let config = crate::load_config_file()
            .map(|content| Self::parse_or_default(&content))
            .unwrap_or_else(|| {
                log::debug!("Using default app config");
                Self::default()
            });
        config.with_env_overrides(|key| env::var(key).ok())
    }

    fn parse_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(LIMIT_ENV) {
            match raw.trim().parse() {
                Ok(limit) => self.limit = limit,
                Err(e) => log::warn!("Ignoring {}={:?}: {}", LIMIT_ENV, raw, e),
            }
        }
        self
    }
}
