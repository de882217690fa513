//! Terminal output formatting
//!
//! Rendering of feedback for the plain CLI mode. The game core emits only
//! classifications; everything visual lives here.

pub mod formatters;

pub use formatters::{feedback_to_emoji, guess_row};
