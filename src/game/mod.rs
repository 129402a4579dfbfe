//! Authoritative game core: movement, combat, board projection, turn state.

mod board;
mod direction;
mod error;
mod session;
mod types;

pub use board::Board;
pub use direction::Direction;
pub use error::GameError;
pub use session::{GameSession, MoveRecord, Phase};
pub use types::{BOARD_SIZE, Coord, Roster, Side};
