//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};
use runtime::Runtime;
use tracing::debug;

use crate::config::CliConfig;

/// Builder that assembles a session runtime from client configuration.
pub struct RuntimeBuilder {
    config: CliConfig,
}

impl RuntimeBuilder {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Pin the session seed, overriding `RANDOM_SEED`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.runtime.game_config.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        debug!(
            hive_size = self.config.game_config().hive_size(),
            event_buffer = self.config.runtime.event_buffer_size,
            command_buffer = self.config.runtime.command_buffer_size,
            "building runtime"
        );

        let runtime = Runtime::builder()
            .config(self.config.runtime.clone())
            .build()
            .context("failed to build session runtime")?;

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: CliConfig,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{BeeKind, BeeStats, GameConfig, PlayerStats};
    use runtime::RuntimeConfig;

    #[test]
    fn builds_runtime_from_config() {
        let game = GameConfig::empty_hive(PlayerStats::new(30, 0.0))
            .with_bees(BeeKind::Worker, BeeStats::new(2, 10, 1, 1));
        let config = CliConfig::new(RuntimeConfig {
            game_config: game,
            ..RuntimeConfig::default()
        });

        let setup = RuntimeBuilder::new(config).seed(99).build().unwrap();
        let snapshot = setup.runtime.snapshot();

        assert_eq!(setup.runtime.seed(), 99);
        assert_eq!(snapshot.player_health(), 30);
        assert_eq!(snapshot.hive().count(BeeKind::Worker), 2);
    }
}
