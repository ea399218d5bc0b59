//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and turn resolution so clients can
//! bubble them up with consistent context.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session event receiver dropped")]
    EventChannelClosed,

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Turn(#[from] game_core::TurnError),

    #[error("{name} must be at least 1")]
    InvalidBufferSize { name: &'static str },
}
