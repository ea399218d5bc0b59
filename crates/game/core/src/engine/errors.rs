//! Error types for turn resolution.

use crate::state::TurnOwner;

/// Errors that can occur while resolving a turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// A turn was requested with no bee left to strike or to attack with.
    #[error("{turn} turn requested against an empty hive")]
    EmptyHive { turn: TurnOwner },
}
