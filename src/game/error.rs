//! Errors raised by the game session

use thiserror::Error;

/// Precondition violations of [`GameSession`](super::GameSession) lifecycle calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot pick a target from an empty roster")]
    EmptyRoster,

    #[error("the game has already been started")]
    AlreadyStarted,

    #[error("the game has not been started yet")]
    NotStarted,

    #[error("official name `{0}` appears more than once in the roster")]
    DuplicateCountry(String),

    #[error("no country with official name `{0}` in the roster")]
    UnknownTarget(String),
}
