//! Player commands accepted by the manual-mode command gate.
use std::str::FromStr;

use thiserror::Error;

/// Commands a player can issue when the engine waits for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Attack a random bee.
    Hit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown command '{input}'")]
pub struct UnknownCommand {
    pub input: String,
}

impl PlayerCommand {
    pub const HIT: &'static str = "hit";

    /// Parses the literal command text. Matching is exact: no trimming or
    /// case folding happens here.
    pub fn parse(input: &str) -> Option<Self> {
        (input == Self::HIT).then_some(PlayerCommand::Hit)
    }
}

impl FromStr for PlayerCommand {
    type Err = UnknownCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input).ok_or_else(|| UnknownCommand {
            input: input.to_string(),
        })
    }
}
