//! Wire protocol for the WebSocket transport.
//!
//! Messages are externally tagged JSON with an uppercase `type` field.
//! Side and direction labels arrive as plain strings and are parsed at
//! this boundary into their domain types.

use crate::game::{GameError, GameSession, MoveRecord};
use serde::{Deserialize, Serialize};

/// Messages sent by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    /// Claim a side and initialize its roster.
    Init {
        /// Side label ("A" or "B").
        player: String,
        /// Character tags, assigned starting rows in order.
        characters: Vec<String>,
    },
    /// Submit a move for the named character.
    Move {
        /// Side label ("A" or "B").
        player: String,
        /// Character tag.
        character: String,
        /// Direction label (e.g. "UP", "FL").
        direction: String,
    },
    /// Relay a chat message to all participants.
    Chat {
        /// Free-text message body.
        message: String,
    },
    /// Join as a spectator and receive the current state.
    Spectate,
    /// Request a stored replay by identifier.
    Replay {
        /// Opaque game identifier.
        #[serde(rename = "gameId")]
        game_id: String,
    },
    /// Capture the current move history under an identifier.
    SaveReplay {
        /// Opaque game identifier.
        #[serde(rename = "gameId")]
        game_id: String,
    },
}

/// Messages sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    /// Full authoritative state, broadcast after every accepted mutation
    /// and sent directly to joining spectators.
    State {
        /// Snapshot of the game session.
        #[serde(rename = "gameState")]
        game_state: GameSession,
    },
    /// Full chat log, broadcast after every chat message.
    Chat {
        /// All chat messages in arrival order.
        #[serde(rename = "chatMessages")]
        chat_messages: Vec<String>,
    },
    /// A stored replay.
    Replay {
        /// Recorded moves in insertion order.
        replay: Vec<MoveRecord>,
    },
    /// A rejection, sent only to the originating client.
    Error {
        /// Machine-readable failure kind.
        kind: String,
        /// Human-readable message.
        message: String,
    },
}

impl ServerMessage {
    /// Builds an error reply from a core rejection.
    pub fn rejection(err: GameError) -> Self {
        ServerMessage::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
