//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player, the hive,
//! and turn bookkeeping. Runtime layers clone or query this state but mutate
//! it exclusively through the engine.
mod combatant;
mod hive;
mod kind;
mod turn;

pub use combatant::{Bee, Combatant, Player};
pub use hive::{Hive, StrikeFate, StrikeOutcome};
pub use kind::BeeKind;
pub use turn::TurnOwner;

use crate::config::GameConfig;
use crate::event::GameOutcome;

/// Canonical state of one game session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub hive: Hive,
    /// Who resolves the next turn.
    pub turn: TurnOwner,
    /// Successful player attacks, for end-of-game reporting.
    pub player_hits: u32,
    /// Successful bee stings, for end-of-game reporting.
    pub bee_stings: u32,
}

impl GameState {
    /// Creates a fresh state from the provided sub-components.
    pub fn new(player: Player, hive: Hive) -> Self {
        Self {
            player,
            hive,
            turn: TurnOwner::Player,
            player_hits: 0,
            bee_stings: 0,
        }
    }

    /// Spawns the player and the full hive described by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        let player = Player::new(config.player.health, config.player.miss_chance);
        Self::new(player, Hive::spawn(config))
    }

    /// True once the player is dead or the hive is empty.
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Terminal outcome, if any. Player death is checked before the hive.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.player.is_dead() {
            Some(GameOutcome::PlayerLost)
        } else if self.hive.is_empty() {
            Some(GameOutcome::PlayerWon)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BeeStats, PlayerStats};

    fn state(player_health: i32, workers: u32) -> GameState {
        let config = GameConfig::empty_hive(PlayerStats::new(player_health, 0.0))
            .with_bees(BeeKind::Worker, BeeStats::new(workers, 1, 0, 1));
        GameState::from_config(&config)
    }

    #[test]
    fn game_in_progress_is_not_finished() {
        let state = state(10, 5);
        assert!(!state.is_finished());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.turn, TurnOwner::Player);
    }

    #[test]
    fn dead_player_finishes_game() {
        let mut state = state(10, 5);
        state.player.sting(100);
        assert!(state.is_finished());
        assert_eq!(state.outcome(), Some(GameOutcome::PlayerLost));
    }

    #[test]
    fn zero_health_player_is_already_finished() {
        let state = state(0, 5);
        assert_eq!(state.outcome(), Some(GameOutcome::PlayerLost));
    }

    #[test]
    fn empty_hive_finishes_game() {
        let mut state = state(10, 5);
        state.hive.collapse();
        assert!(state.is_finished());
        assert_eq!(state.outcome(), Some(GameOutcome::PlayerWon));
    }

    #[test]
    fn player_death_is_reported_before_empty_hive() {
        let mut state = state(10, 0);
        state.player.sting(10);
        assert_eq!(state.outcome(), Some(GameOutcome::PlayerLost));
    }
}
