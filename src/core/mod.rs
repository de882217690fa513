//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero I/O: validated
//! words, letter frequency accounting, and feedback generation. All types
//! here are pure, testable, and have clear mathematical properties.

mod feedback;
mod frequency;
mod word;

pub use feedback::{Feedback, LetterResult};
pub use frequency::LetterCounts;
pub use word::{Word, WordError};
