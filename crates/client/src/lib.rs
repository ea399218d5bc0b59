//! Top-level client wiring the session runtime to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Game rules, engine loop, event emission)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The runtime is built by `client-bootstrap` from environment configuration,
//! the frontend is chosen by cargo feature, and both are injected through
//! [`ClientBuilder`].

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an unstarted runtime and a frontend
/// 2. `Client::run()` hands the runtime to the frontend, which starts the
///    session once the player has chosen a play mode
/// 3. `run` returns when the frontend is done with the session
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns whatever fatal error the frontend reports, including a failed
    /// engine loop.
    pub async fn run(self) -> Result<()> {
        let seed = self.runtime.seed();
        tracing::info!(seed, "Client starting");

        let mut frontend = self.frontend;
        let result = frontend.run(self.runtime).await;

        match &result {
            Ok(()) => tracing::info!("Client finished"),
            Err(error) => tracing::error!("Client failed: {error:#}"),
        }
        result
    }
}
