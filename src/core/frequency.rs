//! Letter frequency accounting
//!
//! A `LetterCounts` tracks how many yet-unmatched occurrences of each letter
//! remain in the secret while feedback for one guess is being computed. It is
//! seeded fresh from the secret for every guess and never shared between
//! guesses.

use super::Word;
use rustc_hash::FxHashMap;

/// Remaining-available count per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<u8, u8>);

impl LetterCounts {
    /// Count the occurrences of each letter in a word
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterCounts, Word};
    ///
    /// let counts = LetterCounts::from_word(&Word::new("speed").unwrap());
    /// assert_eq!(counts.count(b'e'), 2);
    /// assert_eq!(counts.count(b's'), 1);
    /// assert_eq!(counts.count(b'z'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut counts = FxHashMap::default();
        for &ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Remaining count for a letter (0 if the letter never occurred)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Consume one occurrence of a letter if any remain
    ///
    /// Returns `true` and decrements the count when an occurrence was
    /// available, `false` otherwise.
    pub fn consume(&mut self, letter: u8) -> bool {
        match self.0.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_all_unique() {
        let counts = LetterCounts::from_word(&Word::new("fiber").unwrap());
        for &letter in b"fiber" {
            assert_eq!(counts.count(letter), 1);
        }
        assert_eq!(counts.count(b'z'), 0);
    }

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::from_word(&Word::new("speed").unwrap());
        assert_eq!(counts.count(b's'), 1);
        assert_eq!(counts.count(b'p'), 1);
        assert_eq!(counts.count(b'e'), 2);
        assert_eq!(counts.count(b'd'), 1);
    }

    #[test]
    fn counts_all_same_letter() {
        let counts = LetterCounts::from_word(&Word::new("aaaaa").unwrap());
        assert_eq!(counts.count(b'a'), 5);
    }

    #[test]
    fn consume_decrements_until_exhausted() {
        let mut counts = LetterCounts::from_word(&Word::new("speed").unwrap());

        assert!(counts.consume(b'e'));
        assert_eq!(counts.count(b'e'), 1);
        assert!(counts.consume(b'e'));
        assert_eq!(counts.count(b'e'), 0);

        // Exhausted: further consumption fails and the count stays at zero
        assert!(!counts.consume(b'e'));
        assert_eq!(counts.count(b'e'), 0);
    }

    #[test]
    fn consume_missing_letter() {
        let mut counts = LetterCounts::from_word(&Word::new("fiber").unwrap());
        assert!(!counts.consume(b'z'));
    }
}
