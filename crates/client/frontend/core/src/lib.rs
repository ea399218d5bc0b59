//! Cross-frontend primitives for presenting the game.
//!
//! Houses the front-end trait, message logging, configuration, and
//! view-model types that the CLI and any future client can reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, PacingConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{BeeGroup, GameOverSummary, HiveSummary, StatusFrame};
