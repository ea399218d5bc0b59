//! Bees in the Trap client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (game rules and engine loop) via RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Fast auto play with a fixed seed
//! AUTO_RUN_SPEED=0.1 RANDOM_SEED=42 cargo run -p beesinthetrap-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use beesinthetrap_client::Client;
    use client_bootstrap::{CliConfig, RuntimeBuilder};
    use client_frontend_cli::{CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let cli_config = CliConfig::from_env();
    let frontend_config = FrontendConfig::from_env();

    // 2. Setup logging (the guard flushes the log file on exit)
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting Bees in the Trap");
    tracing::info!(
        player_health = cli_config.player().health,
        hive_size = cli_config.game_config().hive_size(),
        "Game configuration loaded"
    );
    tracing::debug!(?frontend_config, "Frontend configuration loaded");

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new(cli_config).build()?;
    tracing::info!(seed = setup.runtime.seed(), "Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
