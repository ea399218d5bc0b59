//! Session worker that owns the authoritative [`game_core::GameState`].
//!
//! Runs the turn loop: the manual-mode command gate, one
//! [`GameEngine::take_turn`] per iteration, snapshot publication, and ordered
//! event emission. Every point where the loop can suspend is raced against
//! the session's [`CancelScope`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use game_core::{
    Combatant, GameEngine, GameEvent, GameOutcome, GameState, PlayerCommand, TurnOwner,
};

use crate::api::{Result, RuntimeError, SessionEvent};
use crate::cancel::CancelScope;
use crate::runtime::{PlayMode, SessionEnd};
use crate::snapshot::SessionSnapshot;

/// Worker side of the session channels.
pub(crate) struct WorkerChannels {
    pub events: mpsc::Sender<SessionEvent>,
    pub commands: mpsc::Receiver<String>,
    pub outcome: oneshot::Sender<GameOutcome>,
    pub snapshot: watch::Sender<SessionSnapshot>,
}

/// Result of a suspension point.
enum Flow {
    Continue,
    Cancelled,
}

/// Result of the manual-mode command gate.
enum Gate {
    Proceed,
    Rejected,
    Cancelled,
}

/// Background task that plays one session to completion.
pub(crate) struct SessionWorker {
    state: GameState,
    rng: ChaCha8Rng,
    seed: u64,
    mode: PlayMode,
    events: mpsc::Sender<SessionEvent>,
    commands: mpsc::Receiver<String>,
    outcome: Option<oneshot::Sender<GameOutcome>>,
    snapshot: watch::Sender<SessionSnapshot>,
    cancel: CancelScope,
}

impl SessionWorker {
    pub fn new(
        state: GameState,
        seed: u64,
        mode: PlayMode,
        channels: WorkerChannels,
        cancel: CancelScope,
    ) -> Self {
        Self {
            state,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            mode,
            events: channels.events,
            commands: channels.commands,
            outcome: Some(channels.outcome),
            snapshot: channels.snapshot,
            cancel,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) -> Result<SessionEnd> {
        info!(
            target: "runtime::worker",
            seed = self.seed,
            mode = %self.mode,
            bees = self.state.hive.len(),
            "session started"
        );

        let end = self.drive().await;

        match &end {
            Ok(SessionEnd::Finished(outcome)) => info!(
                target: "runtime::worker",
                %outcome,
                player_hits = self.state.player_hits,
                bee_stings = self.state.bee_stings,
                "session finished"
            ),
            Ok(SessionEnd::Cancelled) => info!(target: "runtime::worker", "session cancelled"),
            Err(error) => warn!(target: "runtime::worker", %error, "session aborted"),
        }

        end
    }

    async fn drive(&mut self) -> Result<SessionEnd> {
        loop {
            if self.cancel.is_cancelled() {
                return Ok(SessionEnd::Cancelled);
            }
            if let Some(outcome) = self.state.outcome() {
                return self.finish(outcome).await;
            }

            if self.state.turn == TurnOwner::Player && !self.mode.is_auto() {
                match self.await_command().await? {
                    Gate::Proceed => {}
                    Gate::Rejected => continue,
                    Gate::Cancelled => return Ok(SessionEnd::Cancelled),
                }
            }

            let report = GameEngine::new(&mut self.state).take_turn(&mut self.rng)?;
            debug!(
                target: "runtime::worker",
                actor = %report.actor,
                events = report.events().len(),
                player_health = self.state.player.health(),
                bees = self.state.hive.len(),
                "turn resolved"
            );
            self.publish_snapshot();

            for event in report {
                if let Flow::Cancelled = self.emit(event).await? {
                    return Ok(SessionEnd::Cancelled);
                }
            }
        }
    }

    /// Emits the closing event, then signals the outcome.
    async fn finish(&mut self, outcome: GameOutcome) -> Result<SessionEnd> {
        if let Flow::Cancelled = self.emit(outcome.final_event()).await? {
            return Ok(SessionEnd::Cancelled);
        }

        if let Some(outcome_tx) = self.outcome.take() {
            if outcome_tx.send(outcome).is_err() {
                debug!(target: "runtime::worker", "outcome receiver dropped");
            }
        }

        Ok(SessionEnd::Finished(outcome))
    }

    /// Prompts for and consumes one command. Only `hit` lets the turn proceed.
    async fn await_command(&mut self) -> Result<Gate> {
        if let Flow::Cancelled = self.emit(GameEvent::AwaitingCommand).await? {
            return Ok(Gate::Cancelled);
        }

        let received = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Ok(Gate::Cancelled),
            received = self.commands.recv() => received,
        };
        let Some(input) = received else {
            warn!(target: "runtime::worker", "command senders dropped while awaiting input");
            return Err(RuntimeError::CommandChannelClosed);
        };

        match input.parse::<PlayerCommand>() {
            Ok(PlayerCommand::Hit) => Ok(Gate::Proceed),
            Err(rejected) => {
                debug!(target: "runtime::worker", input = %rejected.input, "rejected command");
                let flow = self
                    .emit(GameEvent::InvalidCommand {
                        input: rejected.input,
                    })
                    .await?;
                Ok(match flow {
                    Flow::Continue => Gate::Rejected,
                    Flow::Cancelled => Gate::Cancelled,
                })
            }
        }
    }

    /// Sends one event with the current state, waiting for buffer space unless
    /// the session is cancelled first.
    async fn emit(&mut self, event: GameEvent) -> Result<Flow> {
        let event = SessionEvent {
            event,
            snapshot: self.current_snapshot(),
        };
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Ok(Flow::Cancelled),
            sent = self.events.send(event) => match sent {
                Ok(()) => Ok(Flow::Continue),
                Err(_) => {
                    warn!(target: "runtime::worker", "event receiver dropped");
                    Err(RuntimeError::EventChannelClosed)
                }
            },
        }
    }

    fn current_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.seed, self.state.clone())
    }

    fn publish_snapshot(&self) {
        self.snapshot.send_replace(self.current_snapshot());
    }
}
