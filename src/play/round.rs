//! One round: set up, take guesses until a win or the budget runs out.
//!
//! ## Phases
//!
//! - `AwaitingGuess` → `Won`: the guess matches
//! - `AwaitingGuess` → `AwaitingGuess`: a miss with attempts left
//! - `AwaitingGuess` → `Exhausted`: a miss on the last attempt
//!
//! Every miss prints the running guess count and the attempts left, including
//! the last one, before the winning number is revealed.

use log::{debug, info};

use super::evaluator::evaluate_guess;
use super::reader::read_guess;
use crate::console::Console;
use crate::core::{GameConfig, GameDefaults, GameRng, RoundPhase, RoundState, SessionConfig};
use crate::error::Result;
use crate::messages;
use crate::setup::{select_budget, select_range};

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { guesses: u32 },
    Exhausted { winning_number: i64 },
}

/// A round ready to be played.
#[derive(Clone, Debug)]
pub struct Round {
    config: GameConfig,
    state: RoundState,
    close_threshold: u64,
    retry_limit: Option<u32>,
}

impl Round {
    /// Create a round with a known winning number.
    ///
    /// Starts with the default closeness distance and no retry limit.
    ///
    /// # Panics
    ///
    /// Panics if `winning_number` is outside the configured range.
    pub fn new(config: GameConfig, winning_number: i64) -> Self {
        assert!(
            config.contains(winning_number),
            "Winning number must be inside the range"
        );

        Self {
            config,
            state: RoundState::new(winning_number),
            close_threshold: GameDefaults::default().close_threshold,
            retry_limit: None,
        }
    }

    /// Set the distance within which a miss is called "very close".
    #[must_use]
    pub fn with_close_threshold(mut self, threshold: u64) -> Self {
        self.close_threshold = threshold;
        self
    }

    /// Bound the number of consecutive invalid guess entries.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is `Some(0)`.
    #[must_use]
    pub fn with_retry_limit(mut self, limit: Option<u32>) -> Self {
        assert!(limit != Some(0), "Retry limit must be positive");
        self.retry_limit = limit;
        self
    }

    /// Ask the player for the range and budget, draw the winning number and
    /// print the introduction.
    ///
    /// The draw happens between the range and budget prompts. An invalid
    /// session config is reported before anything is asked.
    pub fn setup(
        console: &mut impl Console,
        rng: &mut GameRng,
        session: &SessionConfig,
    ) -> Result<Self> {
        session.validate()?;
        let defaults = &session.defaults;

        let (minimum, maximum) = select_range(console, defaults)?;
        let winning_number = rng.draw(minimum, maximum);
        let max_guesses = select_budget(console, defaults.max_guesses)?;

        let config = GameConfig::new(minimum, maximum, max_guesses);
        debug!("round set up: {minimum}..={maximum}, {max_guesses} guesses");

        for line in messages::introduction(minimum, maximum, max_guesses) {
            console.say(&line)?;
        }

        Ok(Self::new(config, winning_number)
            .with_close_threshold(defaults.close_threshold)
            .with_retry_limit(session.guess_retry_limit))
    }

    /// The round's range and budget.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Winning number and guesses taken so far.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Take guesses until the round ends.
    pub fn play(mut self, console: &mut impl Console) -> Result<RoundOutcome> {
        let max_guesses = self.config.max_guesses();
        let winning_number = self.state.winning_number();

        loop {
            let guess = read_guess(console, &self.config, self.retry_limit)?;
            let correct = evaluate_guess(console, guess, winning_number, self.close_threshold)?;
            let phase = self.state.record_guess(correct, max_guesses);
            let guess_count = self.state.guess_count();
            debug!("guess {guess_count}/{max_guesses}: {guess} -> {phase:?}");

            if phase == RoundPhase::Won {
                console.say(&messages::winning(guess_count, winning_number))?;
                info!("round won in {guess_count} guesses");
                return Ok(RoundOutcome::Won {
                    guesses: guess_count,
                });
            }

            console.say(&messages::guesses_so_far(guess_count))?;
            console.say(&messages::remaining_attempts(guess_count, max_guesses))?;

            if phase == RoundPhase::Exhausted {
                console.say(&messages::reveal(winning_number))?;
                info!("round lost, winning number was {winning_number}");
                return Ok(RoundOutcome::Exhausted { winning_number });
            }
        }
    }
}
