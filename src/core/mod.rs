//! Core game types: configuration, round state, RNG, input parsing.

pub mod config;
pub mod parse;
pub mod rng;
pub mod state;

pub use config::{GameConfig, GameDefaults, SessionConfig};
pub use parse::{parse_int, ParsedInt};
pub use rng::GameRng;
pub use state::{RoundPhase, RoundState};
