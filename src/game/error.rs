//! Typed validation failures for the game core.

use derive_more::{Display, Error};

/// A rejected request.
///
/// Every failure is a validation rejection, never fatal: the session is
/// left untouched and the rejection is reported only to the originating
/// client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The requesting side does not hold the turn.
    #[display("Not your turn!")]
    OutOfTurn,
    /// The character tag is absent from the requesting side's roster.
    #[display("Character does not exist!")]
    UnknownCharacter,
    /// The direction label is not part of the movement vocabulary.
    #[display("Unrecognized direction!")]
    InvalidDirection,
    /// The target coordinate lies outside the board.
    #[display("Move is out of bounds!")]
    OutOfBounds,
    /// The side label names neither side.
    #[display("Invalid side!")]
    InvalidSide,
}

impl GameError {
    /// Stable machine-readable kind for the wire protocol.
    pub fn kind(&self) -> &'static str {
        match self {
            GameError::OutOfTurn => "OUT_OF_TURN",
            GameError::UnknownCharacter => "UNKNOWN_CHARACTER",
            GameError::InvalidDirection => "INVALID_DIRECTION",
            GameError::OutOfBounds => "OUT_OF_BOUNDS",
            GameError::InvalidSide => "INVALID_SIDE",
        }
    }
}
