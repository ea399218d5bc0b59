//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use game_core::GameEvent;

/// Severity level for UI messages produced from runtime events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// Input the engine refused.
    Warning,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn from_event(event: &GameEvent) -> Self {
        let level = match event {
            GameEvent::InvalidCommand { .. } => MessageLevel::Warning,
            _ => MessageLevel::Info,
        };
        Self::new(event.to_string(), level)
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Info));
    }

    pub fn push_event(&mut self, event: &GameEvent) {
        self.push(MessageEntry::from_event(event));
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }
}
