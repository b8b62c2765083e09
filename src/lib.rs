//! Wack-A-Mole - a timed whack-a-mole game for the terminal
//!
//! This library provides:
//! - Core round rules: countdown, mole placement, scoring (game module)
//! - High score persistence (score module)
//! - The two round timers driving a shared board (session module)
//! - Terminal front end (input, render and modes modules)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
pub mod session;
pub mod telemetry;
