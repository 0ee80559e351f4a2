//! Session configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::DEFAULT_TICK_MS;

/// Environment variable holding the tick interval in milliseconds.
pub const TICK_MS_VAR: &str = "BLOCKFALL_TICK_MS";
/// Environment variable holding the piece RNG seed.
pub const SEED_VAR: &str = "BLOCKFALL_SEED";
/// Environment variable holding the log file path.
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub tick_period: Duration,
    /// Fixed seed for the piece sequence; random when unset.
    pub seed: Option<u32>,
    pub log_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
            log_path: default_log_path(),
        }
    }
}

impl SessionConfig {
    /// Read `BLOCKFALL_TICK_MS`, `BLOCKFALL_SEED` and `BLOCKFALL_LOG_PATH`.
    ///
    /// Missing, empty or unparsable values fall back to the defaults; a zero
    /// tick interval is treated as unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_period = value(TICK_MS_VAR)
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_TICK_MS));

        let seed = value(SEED_VAR).and_then(|s| s.parse().ok());

        let log_path = value(LOG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_log_path);

        Self {
            tick_period,
            seed,
            log_path,
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn default_log_path() -> PathBuf {
    env::temp_dir().join("blockfall.log")
}
