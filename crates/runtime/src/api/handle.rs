//! Cloneable façade for talking to a running session.
//!
//! [`RuntimeHandle`] hides channel plumbing: commands go to the worker over an
//! `mpsc` channel, and state queries read the latest published snapshot.
use tokio::sync::{mpsc, watch};

use game_core::Hive;

use super::errors::{Result, RuntimeError};
use crate::snapshot::SessionSnapshot;

/// Client-facing handle to interact with a running session
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<String>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<String>,
        snapshot_rx: watch::Receiver<SessionSnapshot>,
    ) -> Self {
        Self {
            command_tx,
            snapshot_rx,
        }
    }

    /// Forwards one line of player input to the engine.
    ///
    /// Commands are only consumed in manual mode, while the engine waits at the
    /// player's command gate. The input is matched verbatim.
    pub async fn send_command(&self, input: impl Into<String>) -> Result<()> {
        self.command_tx
            .send(input.into())
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Latest state published by the worker (updated after every turn).
    ///
    /// This can be ahead of events still buffered in the event channel; render
    /// each event from its own [`crate::SessionEvent::snapshot`].
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn is_finished(&self) -> bool {
        self.snapshot_rx.borrow().is_finished()
    }

    pub fn player_health(&self) -> i32 {
        self.snapshot_rx.borrow().player_health()
    }

    pub fn hive(&self) -> Hive {
        self.snapshot_rx.borrow().hive().clone()
    }
}
