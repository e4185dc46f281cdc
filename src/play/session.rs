//! Session: play rounds until the player declines another.

use log::info;

use super::round::{Round, RoundOutcome};
use crate::console::Console;
use crate::core::{GameRng, SessionConfig};
use crate::error::{Error, Result};
use crate::messages;

/// Is this reply to the play-again prompt a yes?
#[must_use]
pub fn wants_another_round(reply: &str) -> bool {
    reply.trim().eq_ignore_ascii_case("y")
}

/// Totals for a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
}

/// Drives rounds over one console.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    rng: GameRng,
}

impl Session {
    /// Create a session. Seeds from OS entropy unless the config has a seed.
    ///
    /// Fails with `Error::InvalidConfig` if the defaults cannot form a round
    /// or the guess retry limit is zero.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("session seed: {}", rng.seed());
        Ok(Self { config, rng })
    }

    /// Seed of the session's RNG, for replaying it.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Play one full round.
    pub fn play_round(&mut self, console: &mut impl Console) -> Result<RoundOutcome> {
        Round::setup(console, &mut self.rng, &self.config)?.play(console)
    }

    /// Play rounds until the player answers anything but "y", then say
    /// goodbye. Closed input at the play-again prompt counts as a no.
    pub fn run(&mut self, console: &mut impl Console) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let outcome = self.play_round(console)?;
            summary.rounds += 1;
            if matches!(outcome, RoundOutcome::Won { .. }) {
                summary.wins += 1;
            }

            let again = match console.ask(messages::PLAY_AGAIN_PROMPT) {
                Ok(reply) => wants_another_round(&reply),
                Err(Error::InputClosed) => false,
                Err(e) => return Err(e),
            };
            if !again {
                break;
            }
        }

        console.say(messages::FAREWELL)?;
        info!("session over: {} rounds, {} won", summary.rounds, summary.wins);
        Ok(summary)
    }
}
