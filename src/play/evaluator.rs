//! Guess evaluation and directional feedback.

use crate::console::Console;
use crate::error::Result;
use crate::messages;

/// How a guess compares to the winning number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooHigh { close: bool },
    TooLow { close: bool },
}

impl Verdict {
    /// Compare `guess` with `winning`. A miss is `close` when it is within
    /// `close_threshold` of the winning number.
    #[must_use]
    pub fn judge(guess: i64, winning: i64, close_threshold: u64) -> Self {
        let close = guess.abs_diff(winning) <= close_threshold;
        match guess.cmp(&winning) {
            std::cmp::Ordering::Greater => Verdict::TooHigh { close },
            std::cmp::Ordering::Less => Verdict::TooLow { close },
            std::cmp::Ordering::Equal => Verdict::Correct,
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }

    /// Lines to print for this verdict. Empty for a correct guess; the win
    /// message is the round's job.
    #[must_use]
    pub fn feedback(self) -> Vec<&'static str> {
        let (direction, close) = match self {
            Verdict::Correct => return Vec::new(),
            Verdict::TooHigh { close } => (messages::TOO_HIGH, close),
            Verdict::TooLow { close } => (messages::TOO_LOW, close),
        };
        if close {
            vec![direction, messages::VERY_CLOSE]
        } else {
            vec![direction]
        }
    }
}

/// Print feedback for `guess` and report whether it was the winning number.
pub fn evaluate_guess(
    console: &mut impl Console,
    guess: i64,
    winning: i64,
    close_threshold: u64,
) -> Result<bool> {
    let verdict = Verdict::judge(guess, winning, close_threshold);
    for line in verdict.feedback() {
        console.say(line)?;
    }
    Ok(verdict.is_correct())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use std::io::Cursor;

    #[test]
    fn test_judge() {
        assert_eq!(Verdict::judge(50, 50, 5), Verdict::Correct);
        assert_eq!(Verdict::judge(90, 50, 5), Verdict::TooHigh { close: false });
        assert_eq!(Verdict::judge(10, 50, 5), Verdict::TooLow { close: false });
        assert_eq!(Verdict::judge(55, 50, 5), Verdict::TooHigh { close: true });
        assert_eq!(Verdict::judge(45, 50, 5), Verdict::TooLow { close: true });
        assert_eq!(Verdict::judge(56, 50, 5), Verdict::TooHigh { close: false });
        assert_eq!(Verdict::judge(44, 50, 5), Verdict::TooLow { close: false });
    }

    #[test]
    fn test_judge_extremes() {
        assert_eq!(
            Verdict::judge(i64::MAX, i64::MIN, 5),
            Verdict::TooHigh { close: false }
        );
    }

    #[test]
    fn test_feedback() {
        assert!(Verdict::Correct.feedback().is_empty());
        assert_eq!(Verdict::TooHigh { close: false }.feedback(), vec!["Too high!"]);
        assert_eq!(
            Verdict::TooLow { close: true }.feedback(),
            vec!["Too low!", "You're very close!"]
        );
    }

    #[test]
    fn test_evaluate_guess_output() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert!(!evaluate_guess(&mut term, 48, 50, 5).unwrap());
        assert!(evaluate_guess(&mut term, 50, 50, 5).unwrap());

        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out, "Too low!\nYou're very close!\n");
    }
}
