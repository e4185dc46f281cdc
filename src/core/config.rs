//! Game configuration types.
//!
//! - `GameDefaults`: fallback values used when setup input is missing or bad
//! - `SessionConfig`: defaults plus seed and retry policy for a whole session
//! - `GameConfig`: the validated settings of a single round

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fallback values substituted for missing or invalid setup input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefaults {
    /// Lower bound used when the player gives none (default: 1).
    pub minimum: i64,

    /// Upper bound used when the player gives none (default: 100).
    pub maximum: i64,

    /// Attempt budget used when the player gives none (default: 3).
    pub max_guesses: u32,

    /// A wrong guess within this distance of the winning number gets a
    /// "very close" hint (default: 5).
    pub close_threshold: u64,
}

impl Default for GameDefaults {
    fn default() -> Self {
        Self {
            minimum: 1,
            maximum: 100,
            max_guesses: 3,
            close_threshold: 5,
        }
    }
}

impl GameDefaults {
    /// Set the default range.
    #[must_use]
    pub fn with_range(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Set the default attempt budget.
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: u32) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Set the closeness hint distance.
    #[must_use]
    pub fn with_close_threshold(mut self, threshold: u64) -> Self {
        self.close_threshold = threshold;
        self
    }

    /// Check that the defaults can themselves form a round.
    pub fn validate(&self) -> Result<()> {
        if self.minimum >= self.maximum {
            return Err(Error::InvalidConfig {
                reason: format!(
                    "minimum {} must be less than maximum {}",
                    self.minimum, self.maximum
                ),
            });
        }
        if self.max_guesses == 0 {
            return Err(Error::InvalidConfig {
                reason: "max_guesses must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for a whole session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fallback values for round setup.
    pub defaults: GameDefaults,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Consecutive invalid guesses tolerated before giving up.
    /// `None` re-prompts forever, which is what an interactive terminal wants.
    pub guess_retry_limit: Option<u32>,
}

impl SessionConfig {
    /// Set the fallback values for round setup.
    #[must_use]
    pub fn with_defaults(mut self, defaults: GameDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Fix the RNG seed so the session's draws can be replayed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Give up on a round after `limit` invalid guesses in a row.
    #[must_use]
    pub fn with_guess_retry_limit(mut self, limit: u32) -> Self {
        self.guess_retry_limit = Some(limit);
        self
    }

    /// Check the defaults and the retry limit.
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;
        if self.guess_retry_limit == Some(0) {
            return Err(Error::InvalidConfig {
                reason: "guess_retry_limit must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Validated settings of one round. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    minimum: i64,
    maximum: i64,
    max_guesses: u32,
}

impl GameConfig {
    /// Create a round configuration.
    ///
    /// # Panics
    ///
    /// Panics if `minimum >= maximum` or `max_guesses == 0`. The selectors
    /// never produce such values.
    pub fn new(minimum: i64, maximum: i64, max_guesses: u32) -> Self {
        assert!(minimum < maximum, "Minimum must be less than maximum");
        assert!(max_guesses > 0, "Must allow at least 1 guess");

        Self {
            minimum,
            maximum,
            max_guesses,
        }
    }

    /// Lowest allowed guess.
    #[must_use]
    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Highest allowed guess.
    #[must_use]
    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    /// Attempt budget for the round.
    #[must_use]
    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    /// Is `n` inside the inclusive range?
    #[must_use]
    pub fn contains(&self, n: i64) -> bool {
        (self.minimum..=self.maximum).contains(&n)
    }
}
