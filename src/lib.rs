//! Grid Skirmish library - turn-based 5x5 board game coordinator.
//!
//! # Architecture
//!
//! - **Game core**: authoritative state machine owning the board
//!   projection, both rosters, turn alternation, combat resolution, and
//!   the move history
//! - **Protocol**: typed JSON messages exchanged over the WebSocket
//! - **Server**: axum transport fanning accepted state out to every
//!   connected player and spectator
//! - **Replay**: append-only recordings of move histories by identifier
//!
//! # Example
//!
//! ```
//! use grid_skirmish::{GameSession, Side};
//!
//! let mut session = GameSession::new();
//! session.initialize(Side::A, &["P".to_string()]);
//! session.initialize(Side::B, &["P".to_string()]);
//! session.submit_move(Side::A, "P", "RIGHT").expect("legal move");
//! assert_eq!(session.turn(), &Side::B);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod game;
pub mod protocol;
pub mod replay;
pub mod server;

pub use game::{BOARD_SIZE, Board, Coord, Direction, GameError, GameSession, MoveRecord, Phase, Roster, Side};
pub use protocol::{ClientMessage, ServerMessage};
pub use replay::ReplayStore;
pub use server::AppState;
