//! Wordle feedback generation
//!
//! Feedback classifies each guess position as Correct (right letter, right
//! spot), Present (letter elsewhere in the secret) or Absent. Duplicate
//! letters are handled with a two-pass frequency-accounting algorithm so a
//! guess never claims more copies of a letter than the secret holds.

use super::{LetterCounts, Word};

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    /// Letter matches the secret at the same position
    Correct,
    /// Letter exists elsewhere in the secret with remaining count > 0
    Present,
    /// Letter not in the secret, or all its occurrences already claimed
    Absent,
}

/// Per-position feedback for one guess
///
/// Immutable once produced. One `Feedback` is generated per submitted guess,
/// in guess order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; 5]);

impl Feedback {
    /// All positions correct (winning guess)
    pub const ALL_CORRECT: Self = Self([LetterResult::Correct; 5]);

    /// Generate feedback for `guess` against `secret`
    ///
    /// Both arguments are `Word`s, so the length-5 precondition holds by
    /// construction.
    ///
    /// # Algorithm
    /// 1. Seed a `LetterCounts` from the secret.
    /// 2. First pass: mark exact matches Correct and consume their letters.
    ///    The pass runs to completion before any Present/Absent decision, so
    ///    every exact match is registered against the original counts.
    /// 3. Second pass, left to right: for each position not already Correct,
    ///    consume the guessed letter from the remaining pool; mark Present on
    ///    success, Absent on exhaustion.
    ///
    /// The left-to-right order of the second pass gives excess duplicate
    /// letters in the guess a leftmost-first claim on the secret's remaining
    /// occurrences.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterResult, Word};
    ///
    /// let secret = Word::new("speed").unwrap();
    /// let guess = Word::new("abide").unwrap();
    /// let feedback = Feedback::generate(&secret, &guess);
    ///
    /// use LetterResult::{Absent, Present};
    /// assert_eq!(
    ///     feedback.results(),
    ///     &[Absent, Absent, Absent, Present, Present]
    /// );
    /// ```
    #[must_use]
    pub fn generate(secret: &Word, guess: &Word) -> Self {
        let mut results = [LetterResult::Absent; 5];
        let mut available = LetterCounts::from_word(secret);

        // First pass: exact matches
        // Allow: index needed to access guess[i], secret[i], and set results[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                results[i] = LetterResult::Correct;
                available.consume(guess.chars()[i]);
            }
        }

        // Second pass: presence matches from the remaining pool
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if results[i] != LetterResult::Correct && available.consume(guess.chars()[i]) {
                results[i] = LetterResult::Present;
            }
        }

        Self(results)
    }

    /// Per-position classifications in guess order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; 5] {
        &self.0
    }

    /// Iterate over the classifications in guess order
    pub fn iter(&self) -> impl Iterator<Item = LetterResult> + '_ {
        self.0.iter().copied()
    }

    /// Check whether every position is Correct (winning feedback)
    #[inline]
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0 == [LetterResult::Correct; 5]
    }
}

impl IntoIterator for &Feedback {
    type Item = LetterResult;
    type IntoIter = std::array::IntoIter<LetterResult, 5>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
