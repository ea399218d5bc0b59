//! Cooperative cancellation shared between the engine loop and front-ends.
//!
//! A [`CancelScope`] is a cloneable flag backed by a `tokio::sync::watch`
//! channel. Cancelling is sticky: once set, every clone observes it and every
//! pending [`CancelScope::cancelled`] future resolves.
use std::sync::Arc;

use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct CancelScope {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelScope {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Requests shutdown. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once the scope has been cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // The sender lives as long as `self`, so this is unreachable in practice.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for CancelScope {
    fn default() -> Self {
        Self::new()
    }
}
