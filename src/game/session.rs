//! Game session state machine
//!
//! A `GameSession` drives repeated guesses against one secret word until the
//! guess is correct or the attempt limit is reached. Rejected submissions
//! (malformed words, guesses after the game ended) leave the session
//! untouched; accepted guesses append a `Turn` to the history and advance the
//! state machine.

use super::SecretPicker;
use crate::core::{Feedback, Word, WordError};
use std::fmt;

/// Current state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The session accepts guesses
    AwaitingGuess,
    /// A guess matched the secret; terminal
    Won,
    /// The attempt limit was reached without a match; terminal
    Lost,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    guess: Word,
    feedback: Feedback,
}

impl Turn {
    /// The guessed word
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    /// The per-position feedback for the guess
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The raw input does not form a valid 5-letter word; re-prompt
    InvalidWord(WordError),
    /// The session is already won or lost
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(err) => write!(f, "Invalid guess: {err}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            Self::GameOver => None,
        }
    }
}

/// Error creating a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The supplied word list holds no words to draw a secret from
    EmptyWordList,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for SessionError {}

/// A single game against one secret word
#[derive(Debug)]
pub struct GameSession {
    secret: Word,
    max_attempts: usize,
    turns: Vec<Turn>,
    state: GameState,
}

impl GameSession {
    /// Start a session with a secret drawn from `words` by `picker`
    ///
    /// # Errors
    /// Returns `SessionError::EmptyWordList` if the list holds no words. An
    /// empty list is a defect in the surrounding setup, surfaced loudly
    /// rather than deferred.
    pub fn new(
        words: &[Word],
        max_attempts: usize,
        picker: &mut dyn SecretPicker,
    ) -> Result<Self, SessionError> {
        let secret = picker.pick(words).ok_or(SessionError::EmptyWordList)?;
        Ok(Self::with_secret(secret, max_attempts))
    }

    /// Start a session against a known secret
    ///
    /// Used by front-ends that draw the secret themselves and by tests that
    /// need a deterministic game.
    #[must_use]
    pub fn with_secret(secret: Word, max_attempts: usize) -> Self {
        Self {
            secret,
            max_attempts,
            turns: Vec::new(),
            state: GameState::AwaitingGuess,
        }
    }

    /// Submit one guess
    ///
    /// On acceptance, appends the turn to the history and transitions the
    /// state machine: all-Correct feedback wins; reaching the attempt limit
    /// loses; otherwise the session keeps awaiting guesses.
    ///
    /// # Errors
    /// - `GuessError::GameOver` if the session is already won or lost.
    /// - `GuessError::InvalidWord` if `raw` is not a valid 5-letter word.
    ///
    /// Rejections mutate nothing: no attempt is consumed and the history is
    /// unchanged.
    pub fn submit_guess(&mut self, raw: &str) -> Result<&Turn, GuessError> {
        if self.state != GameState::AwaitingGuess {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(raw).map_err(GuessError::InvalidWord)?;
        let feedback = Feedback::generate(&self.secret, &guess);

        self.turns.push(Turn { guess, feedback });

        if feedback.is_all_correct() {
            self.state = GameState::Won;
        } else if self.turns.len() >= self.max_attempts {
            self.state = GameState::Lost;
        }

        Ok(self.turns.last().expect("turn just pushed"))
    }

    /// Current state of the session
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Whether the session is in a terminal state
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::AwaitingGuess
    }

    /// The secret word
    ///
    /// Front-ends reveal it after the game ends.
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Accepted turns so far, in submission order
    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of attempts consumed
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.turns.len()
    }

    /// Attempt limit for this session
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Attempts still available
    #[inline]
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.turns.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SecretPicker;

    fn session(secret: &str, max_attempts: usize) -> GameSession {
        GameSession::with_secret(Word::new(secret).unwrap(), max_attempts)
    }

    /// Always picks the word at a fixed index
    struct FixedPicker(usize);

    impl SecretPicker for FixedPicker {
        fn pick(&mut self, words: &[Word]) -> Option<Word> {
            words.get(self.0).cloned()
        }
    }

    #[test]
    fn win_on_first_guess() {
        let mut game = session("fiber", 5);
        let turn = game.submit_guess("fiber").unwrap();

        assert!(turn.feedback().is_all_correct());
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn win_on_later_guess() {
        let mut game = session("fiber", 5);
        game.submit_guess("movie").unwrap();
        game.submit_guess("party").unwrap();
        game.submit_guess("fiber").unwrap();

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.attempts(), 3);
        assert_eq!(game.attempts_left(), 2);
    }

    #[test]
    fn loss_after_max_attempts() {
        let mut game = session("movie", 5);
        for _ in 0..4 {
            game.submit_guess("party").unwrap();
            assert_eq!(game.state(), GameState::AwaitingGuess);
        }

        game.submit_guess("party").unwrap();
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.attempts(), 5);

        // No sixth guess accepted
        assert_eq!(game.submit_guess("movie"), Err(GuessError::GameOver));
        assert_eq!(game.attempts(), 5);
    }

    #[test]
    fn no_guesses_after_win() {
        let mut game = session("fiber", 5);
        game.submit_guess("fiber").unwrap();

        assert_eq!(game.submit_guess("movie"), Err(GuessError::GameOver));
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn rejected_submissions_mutate_nothing() {
        let mut game = session("fiber", 5);
        game.submit_guess("movie").unwrap();

        for bad in ["shrt", "toolong", "", "mov1e"] {
            assert!(matches!(
                game.submit_guess(bad),
                Err(GuessError::InvalidWord(_))
            ));
        }

        assert_eq!(game.attempts(), 1);
        assert_eq!(game.turns().len(), 1);
        assert_eq!(game.state(), GameState::AwaitingGuess);
    }

    #[test]
    fn history_records_guesses_in_order() {
        let mut game = session("fiber", 5);
        game.submit_guess("movie").unwrap();
        game.submit_guess("party").unwrap();

        let guesses: Vec<&str> = game.turns().iter().map(|t| t.guess().text()).collect();
        assert_eq!(guesses, ["movie", "party"]);
    }

    #[test]
    fn new_draws_secret_via_picker() {
        let words = [
            Word::new("fiber").unwrap(),
            Word::new("movie").unwrap(),
            Word::new("party").unwrap(),
        ];

        let mut picker = FixedPicker(1);
        let game = GameSession::new(&words, 5, &mut picker).unwrap();
        assert_eq!(game.secret().text(), "movie");
        assert_eq!(game.state(), GameState::AwaitingGuess);
    }

    #[test]
    fn new_rejects_empty_word_list() {
        let mut picker = FixedPicker(0);
        let result = GameSession::new(&[], 5, &mut picker);
        assert_eq!(result.unwrap_err(), SessionError::EmptyWordList);
    }
}
