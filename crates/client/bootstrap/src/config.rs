//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::{BeeKind, BeeStats, GameConfig, PlayerStats};
use runtime::RuntimeConfig;
use strum::IntoEnumIterator;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
    /// Directory for the log file. `None` means the platform cache dir.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn new(runtime: RuntimeConfig) -> Self {
        Self {
            runtime,
            log_dir: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (missing or malformed values keep the default):
    /// - `PLAYER_HEALTH` - Starting player health (default: 100)
    /// - `PLAYER_MISS_CHANCE` - Player miss probability, clamped to [0, 1] (default: 0.1)
    /// - `BEE_MISS_CHANCE` - Miss probability shared by all bees (default: 0.2)
    /// - `{QUEEN,WORKER,DRONE}_BEE_AMOUNT` - Bees per kind (default: 1/5/25)
    /// - `{QUEEN,WORKER,DRONE}_BEE_HEALTH` - Starting health (default: 100/75/60)
    /// - `{QUEEN,WORKER,DRONE}_BEE_ATTACK_DAMAGE` - Sting damage (default: 10/5/1)
    /// - `{QUEEN,WORKER,DRONE}_BEE_DEFENSE_DAMAGE` - Damage taken per hit (default: 10/25/30)
    /// - `RANDOM_SEED` - Fixed RNG seed; 0 picks a time-based seed (default: 0)
    /// - `EVENT_BUFFER_SIZE` - Engine event channel capacity (default: 1)
    /// - `COMMAND_BUFFER_SIZE` - Engine command channel capacity (default: 1)
    /// - `BEES_LOG_DIR` - Directory for the log file (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let game = &mut config.runtime.game_config;

        // Player
        if let Some(health) = read::<i32>(&lookup, "PLAYER_HEALTH") {
            game.player.health = health;
        }
        if let Some(chance) = read_chance(&lookup, "PLAYER_MISS_CHANCE") {
            game.player.miss_chance = chance;
        }

        // Hive
        if let Some(chance) = read_chance(&lookup, "BEE_MISS_CHANCE") {
            game.bee_miss_chance = chance;
        }
        for kind in BeeKind::iter() {
            let stats = game.bees_mut(kind);
            *stats = read_bee_stats(&lookup, kind, *stats);
        }

        // Seed (0 means "pick one for me")
        game.seed = read::<u64>(&lookup, "RANDOM_SEED").filter(|seed| *seed != 0);

        // Channel configuration
        if let Some(capacity) = read::<usize>(&lookup, "EVENT_BUFFER_SIZE") {
            config.runtime.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read::<usize>(&lookup, "COMMAND_BUFFER_SIZE") {
            config.runtime.command_buffer_size = capacity.max(1);
        }

        config.log_dir = lookup("BEES_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.runtime.game_config
    }

    pub fn player(&self) -> &PlayerStats {
        &self.runtime.game_config.player
    }
}

fn env_prefix(kind: BeeKind) -> &'static str {
    match kind {
        BeeKind::Queen => "QUEEN",
        BeeKind::Worker => "WORKER",
        BeeKind::Drone => "DRONE",
    }
}

fn read_bee_stats(
    lookup: &impl Fn(&str) -> Option<String>,
    kind: BeeKind,
    defaults: BeeStats,
) -> BeeStats {
    let prefix = env_prefix(kind);
    let key = |field: &str| format!("{prefix}_BEE_{field}");

    // Amounts are unsigned, so negative values fail to parse and keep the default.
    BeeStats {
        amount: read(lookup, &key("AMOUNT")).unwrap_or(defaults.amount),
        health: read(lookup, &key("HEALTH")).unwrap_or(defaults.health),
        attack_damage: read(lookup, &key("ATTACK_DAMAGE")).unwrap_or(defaults.attack_damage),
        hit_damage: read(lookup, &key("DEFENSE_DAMAGE")).unwrap_or(defaults.hit_damage),
    }
}

fn read_chance(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
    read::<f64>(lookup, key)
        .filter(|chance| !chance.is_nan())
        .map(|chance| chance.clamp(0.0, 1.0))
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config_from(&[]);
        let game = config.game_config();

        assert_eq!(game.player.health, 100);
        assert_eq!(game.player.miss_chance, 0.1);
        assert_eq!(game.bee_miss_chance, 0.2);
        assert_eq!(*game.bees(BeeKind::Queen), GameConfig::DEFAULT_QUEEN);
        assert_eq!(*game.bees(BeeKind::Worker), GameConfig::DEFAULT_WORKER);
        assert_eq!(*game.bees(BeeKind::Drone), GameConfig::DEFAULT_DRONE);
        assert_eq!(game.seed, None);
        assert_eq!(config.runtime.event_buffer_size, 1);
        assert_eq!(config.runtime.command_buffer_size, 1);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("PLAYER_HEALTH", "50"),
            ("PLAYER_MISS_CHANCE", "0.5"),
            ("BEE_MISS_CHANCE", "0"),
            ("QUEEN_BEE_AMOUNT", "2"),
            ("WORKER_BEE_HEALTH", "40"),
            ("DRONE_BEE_ATTACK_DAMAGE", "3"),
            ("DRONE_BEE_DEFENSE_DAMAGE", "12"),
            ("RANDOM_SEED", "42"),
            ("EVENT_BUFFER_SIZE", "8"),
            ("BEES_LOG_DIR", "/tmp/bees"),
        ]);
        let game = config.game_config();

        assert_eq!(game.player.health, 50);
        assert_eq!(game.player.miss_chance, 0.5);
        assert_eq!(game.bee_miss_chance, 0.0);
        assert_eq!(game.bees(BeeKind::Queen).amount, 2);
        assert_eq!(game.bees(BeeKind::Worker).health, 40);
        assert_eq!(game.bees(BeeKind::Worker).amount, 5);
        assert_eq!(game.bees(BeeKind::Drone).attack_damage, 3);
        assert_eq!(game.bees(BeeKind::Drone).hit_damage, 12);
        assert_eq!(game.seed, Some(42));
        assert_eq!(config.runtime.event_buffer_size, 8);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/bees")));
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = config_from(&[
            ("PLAYER_HEALTH", "lots"),
            ("PLAYER_MISS_CHANCE", "NaN"),
            ("WORKER_BEE_AMOUNT", "-3"),
            ("QUEEN_BEE_HEALTH", "1.5"),
            ("RANDOM_SEED", "-1"),
        ]);
        let game = config.game_config();

        assert_eq!(game.player.health, 100);
        assert_eq!(game.player.miss_chance, 0.1);
        assert_eq!(game.bees(BeeKind::Worker).amount, 5);
        assert_eq!(game.bees(BeeKind::Queen).health, 100);
        assert_eq!(game.seed, None);
    }

    #[test]
    fn miss_chances_are_clamped() {
        let config = config_from(&[("PLAYER_MISS_CHANCE", "1.7"), ("BEE_MISS_CHANCE", "-0.4")]);
        assert_eq!(config.player().miss_chance, 1.0);
        assert_eq!(config.game_config().bee_miss_chance, 0.0);
    }

    #[test]
    fn zero_seed_means_unseeded() {
        let config = config_from(&[("RANDOM_SEED", "0")]);
        assert_eq!(config.game_config().seed, None);
    }

    #[test]
    fn zero_buffer_sizes_are_raised_to_one() {
        let config = config_from(&[("EVENT_BUFFER_SIZE", "0"), ("COMMAND_BUFFER_SIZE", "0")]);
        assert_eq!(config.runtime.event_buffer_size, 1);
        assert_eq!(config.runtime.command_buffer_size, 1);
    }
}
