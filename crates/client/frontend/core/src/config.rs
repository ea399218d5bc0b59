//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub pacing: PacingConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, pacing: PacingConfig) -> Self {
        Self { messages, pacing }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOG_SIZE` - Number of game log lines kept on screen (default: 10)
    /// - `AUTO_RUN_SPEED` - Seconds to pause after each event in auto mode,
    ///   fractions allowed (default: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`FrontendConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read::<usize>(&lookup, "LOG_SIZE") {
            config.messages.capacity = capacity.max(1);
        }

        // Negative, NaN and overflowing values are rejected by `try_from_secs_f64`.
        let delay = read::<f64>(&lookup, "AUTO_RUN_SPEED")
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok());
        if let Some(delay) = delay {
            config.pacing.auto_run_delay = delay;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 10 }
    }
}

/// Render pacing for automated play.
#[derive(Clone, Debug)]
pub struct PacingConfig {
    /// Pause after each rendered event. Manual mode never pauses.
    pub auto_run_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            auto_run_delay: Duration::from_secs(1),
        }
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
