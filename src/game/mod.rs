//! Game session and secret selection

mod picker;
mod session;

pub use picker::{RandomPicker, SecretPicker};
pub use session::{GameSession, GameState, GuessError, SessionError, Turn};
