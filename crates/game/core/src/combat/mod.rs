//! Combat rolls.
//!
//! Pure functions over a caller-owned random stream. Every roll consumes
//! exactly one draw, so the order in which the engine calls them is part of
//! the replay contract under a fixed seed.
//!
//! # Core Functions
//!
//! - `roll_hit`: one uniform draw against a miss chance
//! - `pick_target`: one uniform index draw over the live hive

mod hit;

pub use hit::{draw_unit, pick_target, roll_hit};
