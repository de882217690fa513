//! Wordle Game
//!
//! A Wordle-style word-guessing game: guess the secret 5-letter word and get
//! per-letter feedback (Correct / Present / Absent) with proper handling of
//! duplicate letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//! use wordle_game::game::{GameSession, GameState};
//!
//! // Evaluate a single guess
//! let secret = Word::new("fiber").unwrap();
//! let guess = Word::new("movie").unwrap();
//! let feedback = Feedback::generate(&secret, &guess);
//! assert!(!feedback.is_all_correct());
//!
//! // Or drive a full game
//! let mut game = GameSession::with_secret(secret, 5);
//! game.submit_guess("fiber").unwrap();
//! assert_eq!(game.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
