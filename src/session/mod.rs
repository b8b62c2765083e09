//! Timed play on top of the game engine
//!
//! A [`GameSession`] runs the countdown and the mole as two tokio tasks that
//! share one board. Starting, restarting or abandoning a round flips a watched
//! round gate, which is what stops the tasks of the previous round.

pub mod game_session;
mod ticker;

pub use game_session::{GameSession, Snapshot};
