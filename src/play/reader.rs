//! Guess input: re-prompt until an in-range integer arrives.

use log::trace;

use crate::console::Console;
use crate::core::{parse_int, GameConfig, ParsedInt};
use crate::error::{Error, Result};
use crate::messages;

/// A single typed guess, classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessInput {
    Valid(i64),
    NotInteger,
    OutOfRange(i64),
}

/// Classify one line of guess input against the round's range.
///
/// An integer too big for `i64` is always out of range, carried clamped.
pub fn parse_guess(raw: &str, config: &GameConfig) -> GuessInput {
    match parse_int(raw) {
        ParsedInt::Fits(n) if config.contains(n) => GuessInput::Valid(n),
        ParsedInt::Fits(n) | ParsedInt::Overflow { saturated: n } => GuessInput::OutOfRange(n),
        ParsedInt::NotInteger => GuessInput::NotInteger,
    }
}

/// Read guesses until one is a valid in-range integer.
///
/// With `retry_limit: None` this loops for as long as input keeps coming.
/// With `Some(limit)`, `limit` invalid entries in a row end the round with
/// `Error::TooManyInvalidGuesses`.
pub fn read_guess(
    console: &mut impl Console,
    config: &GameConfig,
    retry_limit: Option<u32>,
) -> Result<i64> {
    let (minimum, maximum) = (config.minimum(), config.maximum());
    let prompt = messages::guess_prompt(minimum, maximum);
    let mut rejected = 0u32;

    loop {
        let raw = console.ask(&prompt)?;
        let complaint = match parse_guess(&raw, config) {
            GuessInput::Valid(n) => return Ok(n),
            GuessInput::NotInteger => messages::guess_not_integer(minimum, maximum),
            GuessInput::OutOfRange(_) => messages::guess_out_of_range(minimum, maximum),
        };
        trace!("rejected guess input {raw:?}");
        console.say(&complaint)?;

        rejected += 1;
        if let Some(limit) = retry_limit {
            if rejected >= limit {
                return Err(Error::TooManyInvalidGuesses { limit });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use std::io::Cursor;

    fn config() -> GameConfig {
        GameConfig::new(1, 10, 3)
    }

    #[test]
    fn test_parse_guess() {
        let config = config();
        assert_eq!(parse_guess("5", &config), GuessInput::Valid(5));
        assert_eq!(parse_guess(" 10 ", &config), GuessInput::Valid(10));
        assert_eq!(parse_guess("1", &config), GuessInput::Valid(1));
        assert_eq!(parse_guess("0", &config), GuessInput::OutOfRange(0));
        assert_eq!(parse_guess("11", &config), GuessInput::OutOfRange(11));
        assert_eq!(parse_guess("", &config), GuessInput::NotInteger);
        assert_eq!(parse_guess("five", &config), GuessInput::NotInteger);
        assert_eq!(
            parse_guess("-99999999999999999999", &config),
            GuessInput::OutOfRange(i64::MIN)
        );
    }

    #[test]
    fn test_oversized_guess_is_out_of_range() {
        let mut term = Terminal::new(Cursor::new("123456789012345678901234\n5\n"), Vec::new());
        assert_eq!(read_guess(&mut term, &config(), None).unwrap(), 5);

        let out = String::from_utf8(term.into_output()).unwrap();
        assert!(out.contains("Please enter a number between 1 and 10.\n"));
        assert!(!out.contains("Invalid input."));
    }

    #[test]
    fn test_oversized_guess_never_matches_max_bound() {
        let config = GameConfig::new(0, i64::MAX, 3);
        assert_eq!(
            parse_guess("9223372036854775808", &config),
            GuessInput::OutOfRange(i64::MAX)
        );
        assert_eq!(
            parse_guess("9223372036854775807", &config),
            GuessInput::Valid(i64::MAX)
        );
    }

    #[test]
    fn test_read_guess_retries() {
        let mut term = Terminal::new(Cursor::new("abc\n42\n\n7\n"), Vec::new());
        assert_eq!(read_guess(&mut term, &config(), None).unwrap(), 7);

        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out.matches("Choose a number (1-10): ").count(), 4);
        assert_eq!(
            out.matches("Invalid input. Please enter an integer between 1 and 10.")
                .count(),
            2
        );
        assert_eq!(out.matches("Please enter a number between 1 and 10.").count(), 1);
    }

    #[test]
    fn test_read_guess_retry_limit() {
        let mut term = Terminal::new(Cursor::new("x\ny\n5\n"), Vec::new());
        let err = read_guess(&mut term, &config(), Some(2)).unwrap_err();
        assert!(matches!(err, Error::TooManyInvalidGuesses { limit: 2 }));
    }

    #[test]
    fn test_read_guess_limit_resets_per_call() {
        let mut term = Terminal::new(Cursor::new("x\n5\nx\n6\n"), Vec::new());
        assert_eq!(read_guess(&mut term, &config(), Some(2)).unwrap(), 5);
        assert_eq!(read_guess(&mut term, &config(), Some(2)).unwrap(), 6);
    }

    #[test]
    fn test_read_guess_input_closed() {
        let mut term = Terminal::new(Cursor::new("oops\n"), Vec::new());
        assert!(matches!(
            read_guess(&mut term, &config(), None),
            Err(Error::InputClosed)
        ));
    }
}
