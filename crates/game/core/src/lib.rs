//! Deterministic rules for the hive battle shared across clients.
//!
//! `game-core` defines the canonical rules (combatants, hive, combat rolls,
//! turn engine) and exposes pure APIs that the runtime drives from its worker
//! task. All state mutation flows through [`engine::GameEngine`], and every
//! random draw is taken from a caller-owned [`rand::Rng`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod event;
pub mod state;

pub use action::PlayerCommand;
pub use config::{BeeStats, GameConfig, PlayerStats};
pub use engine::{GameEngine, TurnError, TurnReport};
pub use event::{GameEvent, GameOutcome};
pub use state::{
    Bee, BeeKind, Combatant, GameState, Hive, Player, StrikeFate, StrikeOutcome, TurnOwner,
};
