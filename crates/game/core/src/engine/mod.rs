//! Turn resolution for the hive battle.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Each
//! call to [`GameEngine::take_turn`] resolves exactly one action for the
//! current turn owner, flips the owner, and returns the narrative events the
//! runtime forwards to front-ends.
//!
//! Terminal detection is left to the caller: the runtime loop checks
//! [`GameEngine::outcome`] once per iteration, before each turn.

mod errors;
mod report;
mod turns;

pub use errors::TurnError;
pub use report::TurnReport;

use rand::Rng;

use crate::event::GameOutcome;
use crate::state::{GameState, TurnOwner};

/// Game engine that applies turns to a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn turn(&self) -> TurnOwner {
        self.state.turn
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// Resolves one turn for the current owner, then hands the turn over.
    ///
    /// The owner is only flipped when resolution succeeds.
    pub fn take_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnReport, TurnError> {
        let report = match self.state.turn {
            TurnOwner::Player => self.take_player_turn(rng)?,
            TurnOwner::Hive => self.take_hive_turn(rng)?,
        };
        self.state.turn = self.state.turn.next();
        Ok(report)
    }
}
