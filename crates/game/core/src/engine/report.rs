use crate::event::GameEvent;
use crate::state::TurnOwner;

/// Events produced by resolving a single turn, in emission order.
///
/// A player turn yields one or two events (a miss, or a hit optionally
/// followed by a kill or collapse); a hive turn always yields one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub actor: TurnOwner,
    events: Vec<GameEvent>,
}

impl TurnReport {
    pub(crate) fn new(actor: TurnOwner) -> Self {
        Self {
            actor,
            events: Vec::with_capacity(2),
        }
    }

    pub(crate) fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

impl IntoIterator for TurnReport {
    type Item = GameEvent;
    type IntoIter = std::vec::IntoIter<GameEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
