//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns the authoritative game state and RNG and runs the
//! turn loop until the game ends or the cancel scope fires.

mod session;

pub(crate) use session::{SessionWorker, WorkerChannels};
