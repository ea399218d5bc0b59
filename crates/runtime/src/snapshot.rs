//! Read-only view of a session, published by the worker after every turn.
use game_core::{Combatant, GameOutcome, GameState, Hive, Player};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    seed: u64,
    state: GameState,
}

impl SessionSnapshot {
    pub fn new(seed: u64, state: GameState) -> Self {
        Self { seed, state }
    }

    /// Seed of the session RNG; replaying it with the same config reproduces the game.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn player_health(&self) -> i32 {
        self.state.player.health()
    }

    pub fn hive(&self) -> &Hive {
        &self.state.hive
    }

    pub fn player_hits(&self) -> u32 {
        self.state.player_hits
    }

    pub fn bee_stings(&self) -> u32 {
        self.state.bee_stings
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }
}
