//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult, Word};
use colored::Colorize;

/// Format feedback as an emoji block row
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    let mut result = String::with_capacity(20); // 4 bytes per emoji
    for letter_result in feedback {
        result.push(match letter_result {
            LetterResult::Correct => '🟩',
            LetterResult::Present => '🟨',
            LetterResult::Absent => '⬜',
        });
    }
    result
}

/// Format a guess as colored letter tiles
///
/// Each uppercase letter is rendered on a background matching its
/// classification: green for Correct, yellow for Present, gray for Absent.
#[must_use]
pub fn guess_row(word: &Word, feedback: &Feedback) -> String {
    let mut row = String::new();
    for (&ch, letter_result) in word.chars().iter().zip(feedback) {
        let tile = format!(" {} ", ch.to_ascii_uppercase() as char);
        let colored_tile = match letter_result {
            LetterResult::Correct => tile.black().on_green(),
            LetterResult::Present => tile.black().on_yellow(),
            LetterResult::Absent => tile.white().on_bright_black(),
        };
        row.push_str(&colored_tile.to_string());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn emoji_all_correct() {
        let secret = word("fiber");
        let feedback = Feedback::generate(&secret, &secret);
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_all_absent() {
        let feedback = Feedback::generate(&word("abcde"), &word("fghij"));
        assert_eq!(feedback_to_emoji(&feedback), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_mixed() {
        // SPEED vs ABIDE: three absent, then two present
        let feedback = Feedback::generate(&word("speed"), &word("abide"));
        assert_eq!(feedback_to_emoji(&feedback), "⬜⬜⬜🟨🟨");
    }

    #[test]
    fn guess_row_contains_uppercase_letters() {
        let secret = word("fiber");
        let feedback = Feedback::generate(&secret, &word("movie"));
        let row = guess_row(&word("movie"), &feedback);

        for ch in ['M', 'O', 'V', 'I', 'E'] {
            assert!(row.contains(ch), "row missing letter {ch}");
        }
    }
}
