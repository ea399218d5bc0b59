//! Runtime orchestration for a hive battle session.
//!
//! This crate owns the session-scoped RNG, spawns the engine loop as a tokio
//! task, and wires up the event, command, outcome, and snapshot channels
//! front-ends talk to. Consumers build a [`Runtime`], start it in a
//! [`PlayMode`], and drive it through the returned [`RunningSession`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`cancel`] provides the cooperative shutdown signal
//! - `workers` keeps the engine loop internal to the crate
pub mod api;
pub mod cancel;
pub mod runtime;
pub mod snapshot;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle, SessionEvent};
pub use cancel::CancelScope;
pub use runtime::{
    PlayMode, Runtime, RuntimeBuilder, RuntimeConfig, RunningSession, SessionEnd, SessionTask,
};
pub use snapshot::SessionSnapshot;
