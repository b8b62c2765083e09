//! Core round logic for Wack-A-Mole
//!
//! This module contains the game rules without any I/O, timing or rendering.
//! Timing lives in [`crate::session`], which calls into the engine on each tick.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Screen, WhackOutcome};
pub use config::GameConfig;
pub use engine::{ClockTick, GameEngine};
pub use state::{RoundPhase, RoundState};
