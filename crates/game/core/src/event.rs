//! Narrative events and terminal outcomes.
//!
//! The engine reports everything it does as [`GameEvent`]s; their `Display`
//! form is the text shown in the game log.
use std::fmt;

use crate::state::BeeKind;

/// One line of game narrative, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Manual mode is waiting for the next player command.
    AwaitingCommand,
    /// A command other than `hit` was received; nothing changed.
    InvalidCommand { input: String },
    /// The player's attack roll failed.
    Miss,
    /// The player struck a bee for its own hit damage.
    DirectHit { damage: i32, kind: BeeKind },
    /// The Queen died and every bee went with her.
    ColonyCollapsed,
    /// A non-queen bee died and left the hive.
    Killed { kind: BeeKind },
    /// A bee's sting missed the player.
    Buzzed { kind: BeeKind },
    /// A bee stung the player.
    Stung { damage: i32, kind: BeeKind },
    Defeat,
    Victory,
}

impl GameEvent {
    /// True for the single event that closes a finished game.
    pub fn is_final(&self) -> bool {
        matches!(self, GameEvent::Defeat | GameEvent::Victory)
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::AwaitingCommand => write!(f, "Type 'hit' to attack..."),
            GameEvent::InvalidCommand { input } => write!(f, "Invalid command! '{input}'"),
            GameEvent::Miss => write!(
                f,
                "❌ Miss! You just missed the hive, better luck next time!"
            ),
            GameEvent::DirectHit { damage, kind } => write!(
                f,
                "🧑 Direct Hit! You dealt {damage} damage to a {kind} Bee."
            ),
            GameEvent::ColonyCollapsed => write!(
                f,
                "🎉 The Queen Bee is dead, and the entire hive collapses!"
            ),
            GameEvent::Killed { kind } => write!(f, "💀 You killed a {kind}!"),
            GameEvent::Buzzed { kind } => write!(
                f,
                "❌ Buzz! That was close! The {kind} Bee just missed you!"
            ),
            GameEvent::Stung { damage, kind } => {
                write!(f, "🐝 Ouch! A {kind} Bee stung you for {damage} damage!")
            }
            GameEvent::Defeat => write!(f, "💀 You have been defeated by the hive!"),
            GameEvent::Victory => write!(
                f,
                "🏆 Congratulations! You've destroyed the entire hive!"
            ),
        }
    }
}

/// Terminal state of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum GameOutcome {
    PlayerWon,
    PlayerLost,
}

impl GameOutcome {
    /// The closing narrative line for this outcome.
    pub fn final_event(self) -> GameEvent {
        match self {
            GameOutcome::PlayerWon => GameEvent::Victory,
            GameOutcome::PlayerLost => GameEvent::Defeat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_text() {
        let hit = GameEvent::DirectHit {
            damage: 8,
            kind: BeeKind::Worker,
        };
        assert_eq!(
            hit.to_string(),
            "🧑 Direct Hit! You dealt 8 damage to a Worker Bee."
        );

        let sting = GameEvent::Stung {
            damage: 5,
            kind: BeeKind::Drone,
        };
        assert!(sting.to_string().contains("Ouch!"));
        assert_eq!(
            GameEvent::InvalidCommand {
                input: "jump".into()
            }
            .to_string(),
            "Invalid command! 'jump'"
        );
        assert!(
            GameEvent::ColonyCollapsed
                .to_string()
                .contains("The Queen Bee is dead, and the entire hive collapses!")
        );
    }

    #[test]
    fn outcomes_map_to_final_events() {
        assert_eq!(GameOutcome::PlayerWon.final_event(), GameEvent::Victory);
        assert_eq!(GameOutcome::PlayerLost.final_event(), GameEvent::Defeat);
        assert!(GameEvent::Victory.is_final());
        assert!(!GameEvent::Miss.is_final());
    }
}
