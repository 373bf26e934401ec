//! The guessing-game engine
//!
//! [`GameSession`] owns the state of one game and uses the matcher to turn
//! free text into countries.

mod error;
pub mod matcher;
mod session;

pub use error::GameError;
pub use matcher::{Excluded, SUGGESTION_LIMIT, filter, resolve_guess};
pub use session::{Feedback, GameSession, GuessOutcome, SessionState};
