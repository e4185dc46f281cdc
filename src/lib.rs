//! # guessing-game
//!
//! An interactive number-guessing game. Each round the player picks a range
//! and an attempt budget, then guesses a hidden number with "too high" /
//! "too low" feedback until they hit it or run out of attempts.
//!
//! ## Input policy
//!
//! - **Setup input** (range, budget): bad values are replaced by defaults with
//!   a one-line notice. Never re-prompted.
//! - **Guesses**: bad values are rejected and re-prompted until valid.
//!
//! ## Modules
//!
//! - `core`: configuration, round state, seeded RNG
//! - `setup`: range and attempt budget selectors
//! - `play`: guess reader, evaluator, round state machine, session loop
//! - `console`: the line-oriented I/O seam
//! - `messages`: every line the game prints

pub mod console;
pub mod core;
pub mod error;
pub mod messages;
pub mod play;
pub mod setup;

// Re-export commonly used types
pub use crate::console::{Console, Terminal};
pub use crate::core::{GameConfig, GameDefaults, GameRng, RoundPhase, RoundState, SessionConfig};
pub use crate::error::{Error, Result};
pub use crate::play::{Round, RoundOutcome, Session, SessionSummary, Verdict};
