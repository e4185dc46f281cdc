//! Deterministic random number generation for winning-number draws.
//!
//! ```
//! use guessing_game::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same draws.
//! assert_eq!(a.draw(1, 100), b.draw(1, 100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG. Uses ChaCha8 so a logged seed replays a whole session.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw uniformly from `minimum..=maximum`.
    ///
    /// # Panics
    ///
    /// Panics if `minimum > maximum`.
    pub fn draw(&mut self, minimum: i64, maximum: i64) -> i64 {
        self.inner.gen_range(minimum..=maximum)
    }
}
