//! Glue code tying the session runtime, console input and terminal screens together.
use std::io::{self, Stdout, Write};

use anyhow::Result;
use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use client_frontend_core::{Frontend, FrontendConfig, GameOverSummary, MessageLog, StatusFrame};
use runtime::{
    CancelScope, PlayMode, Runtime, RunningSession, RuntimeHandle, SessionEnd, SessionEvent,
    SessionSnapshot,
};

use crate::console::ConsoleInput;
use crate::prompt;
use crate::render::Screen;

/// Line-oriented terminal frontend.
///
/// Asks for the player's name and play mode, then renders the status header
/// and the rolling game log after every event until the session ends.
pub struct CliFrontend<W: Write + Send = Stdout> {
    config: FrontendConfig,
    console: Option<ConsoleInput>,
    screen: Screen<W>,
}

impl CliFrontend<Stdout> {
    /// Frontend bound to the process terminal.
    pub fn new(config: FrontendConfig) -> Self {
        Self {
            config,
            console: None,
            screen: Screen::new(io::stdout()),
        }
    }
}

impl<W: Write + Send> CliFrontend<W> {
    /// Frontend reading from `console` and writing plain text (no terminal
    /// control sequences) to `out`.
    pub fn with_io(config: FrontendConfig, console: ConsoleInput, out: W) -> Self {
        Self {
            config,
            console: Some(console),
            screen: Screen::plain(out),
        }
    }

    pub fn into_writer(self) -> W {
        self.screen.into_inner()
    }

    async fn play(
        &mut self,
        name: &str,
        mode: PlayMode,
        initial: &SessionSnapshot,
        session: &mut RunningSession,
        cancel: &CancelScope,
    ) -> Result<()> {
        let mut log = MessageLog::new(self.config.messages.capacity);
        let delay = self.config.pacing.auto_run_delay;

        let frame = StatusFrame::from_snapshot(initial);
        self.screen.interface(name, &frame, &log)?;

        while let Some(SessionEvent { event, snapshot }) = session.events.recv().await {
            debug!(?event, "rendering event");
            log.push_event(&event);

            let frame = StatusFrame::from_snapshot(&snapshot);
            self.screen.interface(name, &frame, &log)?;

            if mode.is_auto() && !delay.is_zero() && !event.is_final() {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {}
                    _ = tokio::time::sleep(delay) => {}
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send> Frontend for CliFrontend<W> {
    async fn run(&mut self, runtime: Runtime) -> Result<()> {
        let mut console = self.console.take().unwrap_or_else(ConsoleInput::stdin);

        self.screen.banner()?;
        let name = prompt::ask_player_name(self.screen.writer(), &mut console).await?;
        let mode = prompt::ask_play_mode(self.screen.writer(), &mut console).await?;

        info!(player = %name, %mode, seed = runtime.seed(), "Starting session");

        let cancel = CancelScope::new();
        let done = CancelScope::new();
        let interrupt = tokio::spawn(watch_interrupt(cancel.clone(), done.clone()));

        let initial = runtime.snapshot();
        let mut session = runtime.start(mode, cancel.clone());
        let handle = session.handle();

        let (producer, mut console) = match mode {
            PlayMode::Manual => {
                let producer: JoinHandle<ConsoleInput> = tokio::spawn(forward_commands(
                    console,
                    handle.clone(),
                    cancel.clone(),
                    done.clone(),
                ));
                (Some(producer), None)
            }
            PlayMode::Auto => (None, Some(console)),
        };

        let played = self
            .play(&name, mode, &initial, &mut session, &cancel)
            .await;
        if played.is_err() {
            cancel.cancel();
        }

        done.cancel();
        if let Some(producer) = producer {
            console = Some(producer.await?);
        }
        interrupt.await?;

        let end = session.wait().await?;
        played?;

        match end {
            SessionEnd::Finished(result) => {
                info!(outcome = %result, "Session finished");

                let summary = GameOverSummary::from_snapshot(&handle.snapshot());
                self.screen.game_over(&name, &summary)?;

                if let Some(console) = console.as_mut() {
                    tokio::select! {
                        _ = console.next_line() => {}
                        _ = tokio::signal::ctrl_c() => {}
                    }
                }
                writeln!(self.screen.writer())?;
            }
            SessionEnd::Cancelled => {
                info!("Session cancelled");
                self.screen.interrupted()?;
            }
        }

        Ok(())
    }
}

/// Cancels the session on Ctrl-C until `done` fires.
async fn watch_interrupt(cancel: CancelScope, done: CancelScope) {
    tokio::select! {
        biased;
        _ = done.cancelled() => {}
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                info!("Interrupt received");
                cancel.cancel();
            }
            Err(error) => warn!(%error, "failed to listen for Ctrl-C"),
        },
    }
}

/// Forwards console lines to the engine until `stop` fires.
///
/// Closed input can never produce another command, so it cancels the session.
/// Returns the console so it can be read again after the game.
async fn forward_commands(
    mut console: ConsoleInput,
    handle: RuntimeHandle,
    cancel: CancelScope,
    stop: CancelScope,
) -> ConsoleInput {
    loop {
        let line = tokio::select! {
            biased;
            _ = stop.cancelled() => break,
            line = console.next_line() => line,
        };

        let Some(line) = line else {
            info!("Console input closed, cancelling session");
            cancel.cancel();
            break;
        };

        let sent = tokio::select! {
            biased;
            _ = stop.cancelled() => break,
            sent = handle.send_command(line) => sent,
        };
        if let Err(error) = sent {
            debug!(%error, "command not delivered");
            break;
        }
    }
    console
}
