//! Error types for score and session operations.

use super::player::PlayerId;

/// Error returned by operations that address a player or a game.
///
/// Registry edits and deletes never fail; an unknown id there is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// The id is not a participant of the current game.
    #[display("{} is not part of the current game", _0)]
    PlayerNotInGame(PlayerId),

    /// No game has been created yet.
    #[display("No game has been started")]
    NoActiveGame,

    /// A score amount that is not a non-negative integer.
    #[display("Invalid score amount: {:?}", _0)]
    InvalidAmount(String),
}

impl std::error::Error for ScoreError {}

/// Result alias for fallible scorekeeping operations.
pub type ScoreResult<T> = Result<T, ScoreError>;
