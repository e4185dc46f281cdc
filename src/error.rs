//! Error types for the guessing game.

use thiserror::Error;

/// Errors that end a round or a session.
///
/// Bad player input is never an error: setup input falls back to defaults and
/// guesses are re-prompted. Only the console itself can fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a value was read")]
    InputClosed,

    #[error("gave up after {limit} invalid guesses in a row")]
    TooManyInvalidGuesses { limit: u32 },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
