//! Per-round state.

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the next guess.
    AwaitingGuess,
    /// The winning number was guessed.
    Won,
    /// The attempt budget ran out.
    Exhausted,
}

impl RoundPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundPhase::AwaitingGuess)
    }
}

/// Mutable state of one round: the hidden number and how many guesses
/// have been accepted so far.
#[derive(Clone, Debug)]
pub struct RoundState {
    winning_number: i64,
    guess_count: u32,
    phase: RoundPhase,
}

impl RoundState {
    /// Start a round around an already drawn winning number.
    #[must_use]
    pub fn new(winning_number: i64) -> Self {
        Self {
            winning_number,
            guess_count: 0,
            phase: RoundPhase::AwaitingGuess,
        }
    }

    #[must_use]
    pub fn winning_number(&self) -> i64 {
        self.winning_number
    }

    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Count one accepted guess and move to the next phase.
    ///
    /// Returns the new phase. Does nothing once the round is over.
    pub fn record_guess(&mut self, correct: bool, max_guesses: u32) -> RoundPhase {
        if self.phase.is_terminal() {
            return self.phase;
        }

        self.guess_count += 1;
        self.phase = if correct {
            RoundPhase::Won
        } else if self.guess_count >= max_guesses {
            RoundPhase::Exhausted
        } else {
            RoundPhase::AwaitingGuess
        };
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let state = RoundState::new(50);
        assert_eq!(state.winning_number(), 50);
        assert_eq!(state.guess_count(), 0);
        assert_eq!(state.phase(), RoundPhase::AwaitingGuess);
    }

    #[test]
    fn test_win() {
        let mut state = RoundState::new(50);
        assert_eq!(state.record_guess(false, 3), RoundPhase::AwaitingGuess);
        assert_eq!(state.record_guess(true, 3), RoundPhase::Won);
        assert_eq!(state.guess_count(), 2);
    }

    #[test]
    fn test_win_on_last_guess() {
        let mut state = RoundState::new(50);
        state.record_guess(false, 2);
        assert_eq!(state.record_guess(true, 2), RoundPhase::Won);
    }

    #[test]
    fn test_exhausted() {
        let mut state = RoundState::new(50);
        assert_eq!(state.record_guess(false, 1), RoundPhase::Exhausted);
        assert!(state.phase().is_terminal());
    }

    #[test]
    fn test_terminal_is_sticky() {
        let mut state = RoundState::new(50);
        state.record_guess(true, 3);
        assert_eq!(state.record_guess(false, 3), RoundPhase::Won);
        assert_eq!(state.guess_count(), 1);
    }
}
