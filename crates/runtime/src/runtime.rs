//! High-level runtime orchestrator.
//!
//! The runtime owns the session seed and initial state, wires up the
//! event/command/outcome/snapshot channels, and exposes a builder-based API
//! for clients to start and await a session.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{GameConfig, GameOutcome, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle, SessionEvent};
use crate::cancel::CancelScope;
use crate::snapshot::SessionSnapshot;
use crate::workers::{SessionWorker, WorkerChannels};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Capacity of the engine-to-front-end event channel. The engine blocks
    /// once this many events are unread.
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 1,
            command_buffer_size: 1,
        }
    }
}

/// Whether player turns wait for a typed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    #[default]
    Manual,
    Auto,
}

impl PlayMode {
    pub fn from_auto(auto: bool) -> Self {
        if auto { PlayMode::Auto } else { PlayMode::Manual }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, PlayMode::Auto)
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayMode::Manual => "manual",
            PlayMode::Auto => "auto",
        };
        write!(f, "{}", label)
    }
}

/// How a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a terminal state; the final event and outcome were delivered.
    Finished(GameOutcome),
    /// The cancel scope fired first. No final event or outcome was delivered.
    Cancelled,
}

/// A fully initialized session that has not started yet.
///
/// Design: Runtime owns the seed and the initial state. Starting it moves
/// both into a [`SessionWorker`] task; clients keep a [`RunningSession`].
pub struct Runtime {
    config: RuntimeConfig,
    seed: u64,
    state: GameState,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Effective RNG seed for this session.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// View of the freshly spawned state, before any turn has run.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.seed, self.state.clone())
    }

    /// Spawns the engine loop on the current tokio runtime.
    pub fn start(self, mode: PlayMode, cancel: CancelScope) -> RunningSession {
        let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(self.config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel::<String>(self.config.command_buffer_size);
        let (outcome_tx, outcome_rx) = oneshot::channel::<GameOutcome>();
        let (snapshot_tx, snapshot_rx) = watch::channel(self.snapshot());

        let handle = RuntimeHandle::new(command_tx, snapshot_rx);

        let channels = WorkerChannels {
            events: event_tx,
            commands: command_rx,
            outcome: outcome_tx,
            snapshot: snapshot_tx,
        };
        let worker = SessionWorker::new(self.state, self.seed, mode, channels, cancel);

        let task = SessionTask {
            worker: tokio::spawn(worker.run()),
        };

        RunningSession {
            handle,
            events: event_rx,
            outcome: outcome_rx,
            task,
        }
    }
}

/// Channels and join handle of a started session.
///
/// The fields are public so a front-end can move each part into its own task.
pub struct RunningSession {
    /// The only command sender. Dropping every clone while the engine waits
    /// for a command stops it with [`RuntimeError::CommandChannelClosed`].
    pub handle: RuntimeHandle,
    /// Narrative events in emission order, each with the state it describes.
    pub events: mpsc::Receiver<SessionEvent>,
    /// Fires once with the terminal outcome. Closed without a value on cancellation.
    pub outcome: oneshot::Receiver<GameOutcome>,
    pub task: SessionTask,
}

impl RunningSession {
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Waits for the engine loop to stop.
    pub async fn wait(self) -> Result<SessionEnd> {
        self.task.wait().await
    }
}

/// Join handle of the engine loop.
pub struct SessionTask {
    worker: JoinHandle<Result<SessionEnd>>,
}

impl SessionTask {
    pub async fn wait(self) -> Result<SessionEnd> {
        self.worker.await.map_err(RuntimeError::WorkerJoin)?
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the game rules, keeping channel sizes.
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Build the runtime
    ///
    /// A missing or zero seed is replaced with a time-based one. The effective
    /// seed is logged so the session can be replayed.
    pub fn build(self) -> Result<Runtime> {
        if self.config.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidBufferSize {
                name: "event_buffer_size",
            });
        }
        if self.config.command_buffer_size == 0 {
            return Err(RuntimeError::InvalidBufferSize {
                name: "command_buffer_size",
            });
        }

        let seed = self
            .config
            .game_config
            .seed
            .filter(|seed| *seed != 0)
            .unwrap_or_else(time_seed);
        let state = GameState::from_config(&self.config.game_config);

        info!(
            seed,
            bees = state.hive.len(),
            player_health = state.player.max_health(),
            "session initialized"
        );

        Ok(Runtime {
            config: self.config,
            seed,
            state,
        })
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(1)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_kept() {
        let runtime = Runtime::builder()
            .game_config(GameConfig::default().with_seed(7))
            .build()
            .unwrap();
        assert_eq!(runtime.seed(), 7);
        assert_eq!(runtime.snapshot().seed(), 7);
    }

    #[test]
    fn zero_seed_is_replaced() {
        let runtime = Runtime::builder()
            .game_config(GameConfig::default().with_seed(0))
            .build()
            .unwrap();
        assert_ne!(runtime.seed(), 0);
    }

    #[test]
    fn snapshot_shows_fresh_state() {
        let runtime = Runtime::builder().build().unwrap();
        let snapshot = runtime.snapshot();
        assert_eq!(snapshot.player_health(), 100);
        assert_eq!(snapshot.hive().len(), 31);
        assert!(!snapshot.is_finished());
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let config = RuntimeConfig {
            event_buffer_size: 0,
            ..RuntimeConfig::default()
        };
        assert!(matches!(
            Runtime::builder().config(config).build(),
            Err(RuntimeError::InvalidBufferSize {
                name: "event_buffer_size"
            })
        ));
    }

    #[test]
    fn play_mode_from_flag() {
        assert_eq!(PlayMode::from_auto(true), PlayMode::Auto);
        assert_eq!(PlayMode::from_auto(false), PlayMode::Manual);
        assert_eq!(PlayMode::Auto.to_string(), "auto");
    }
}
