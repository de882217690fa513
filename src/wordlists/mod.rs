//! Word lists for the game
//!
//! Provides the embedded built-in word list plus a loader for custom files.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};
