//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Runtime;

/// Frontend abstraction for UI layers.
///
/// A frontend receives a built but not yet started [`Runtime`]. It decides the
/// play mode (usually by asking the player), starts the session, then:
/// - Renders every event from the session's event stream
/// - Forwards player commands in manual mode
/// - Cancels the session on interrupt
///
/// # Implementations
///
/// - `CliFrontend`: line-oriented terminal UI (crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::{CancelScope, PlayMode, Runtime};
/// use anyhow::Result;
///
/// struct LogFrontend;
///
/// #[async_trait]
/// impl Frontend for LogFrontend {
///     async fn run(&mut self, runtime: Runtime) -> Result<()> {
///         let mut session = runtime.start(PlayMode::Auto, CancelScope::new());
///
///         while let Some(item) = session.events.recv().await {
///             println!("{} (health {})", item.event, item.snapshot.player_health());
///         }
///
///         session.wait().await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until the session ends or is interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal I/O or runtime error.
    async fn run(&mut self, runtime: Runtime) -> Result<()>;
}
