//! Items carried by the session event stream.
use game_core::GameEvent;

use crate::snapshot::SessionSnapshot;

/// A narrative event paired with the state it describes.
///
/// Front-ends render from `snapshot` rather than [`crate::RuntimeHandle::snapshot`]:
/// the handle always shows the newest turn, which can be ahead of the events
/// still waiting in the channel.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionEvent {
    pub event: GameEvent,
    /// State after the turn that produced `event`. Gate events carry the
    /// state at the moment the engine paused.
    pub snapshot: SessionSnapshot,
}
