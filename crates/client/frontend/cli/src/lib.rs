//! Terminal frontend for Bees in the Trap.
//!
//! This crate provides a line-oriented terminal interface for the game. It
//! implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a built [`runtime::Runtime`] and starts it after the prompts
//! - Renders every session event and pauses between them in auto mode
//! - Forwards console lines as commands in manual mode
//! - Cancels the session on Ctrl-C

mod app;
mod console;
mod prompt;
mod render;

pub mod logging;

pub use app::CliFrontend;
pub use console::ConsoleInput;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
