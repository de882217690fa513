//! Secret word selection
//!
//! Drawing the secret is the one source of randomness in the game, so it is
//! injected as a capability: sessions depend on a `SecretPicker`, and tests
//! substitute a deterministic one without touching the game logic.

use crate::core::Word;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

/// Capability to draw a secret word from a list
pub trait SecretPicker {
    /// Pick one word, or `None` if the list is empty
    fn pick(&mut self, words: &[Word]) -> Option<Word>;
}

/// Uniform random selection
#[derive(Debug, Default)]
pub struct RandomPicker {
    rng: ThreadRng,
}

impl RandomPicker {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl SecretPicker for RandomPicker {
    fn pick(&mut self, words: &[Word]) -> Option<Word> {
        words.choose(&mut self.rng).cloned()
    }
}
