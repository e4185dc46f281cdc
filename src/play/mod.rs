//! Gameplay: reading guesses, judging them, rounds and sessions.

pub mod evaluator;
pub mod reader;
pub mod round;
pub mod session;

pub use evaluator::{evaluate_guess, Verdict};
pub use reader::{parse_guess, read_guess, GuessInput};
pub use round::{Round, RoundOutcome};
pub use session::{wants_another_round, Session, SessionSummary};
