//! The authoritative game-state machine.
//!
//! `GameSession` owns turn order, both rosters, the derived board
//! projection, and the move history. Exactly one instance exists for the
//! process lifetime; the transport holds it behind a lock and routes all
//! requests through it, so every operation here is a pure, synchronous
//! state transition with no interleaving.

use super::board::Board;
use super::direction::Direction;
use super::error::GameError;
use super::types::{BOARD_SIZE, Coord, Roster, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Starting rows available per side; extra roster tags are ignored.
const STARTING_ROWS: usize = 4;

/// Lifecycle phase of the session.
///
/// There is no terminal phase: the game continues until the process
/// stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for both sides to initialize their rosters.
    AwaitingInit,
    /// Both sides initialized; moves alternate indefinitely.
    InProgress,
}

/// One accepted move, appended to the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that moved.
    pub side: Side,
    /// Tag of the character that moved.
    pub character: String,
    /// Direction the character moved in.
    pub direction: Direction,
    /// Coordinate the character ended on.
    pub coord: Coord,
}

/// The single authoritative game session.
///
/// A rejected request leaves every field untouched, including the turn;
/// validation fully precedes any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSession {
    /// Side that may move next. Flips after every accepted move.
    turn: Side,
    /// Side A's characters (tag -> coordinate).
    side_a: Roster,
    /// Side B's characters (tag -> coordinate).
    side_b: Roster,
    /// Derived occupancy projection, recomputed after every mutation.
    board: Board,
    /// Accepted moves in insertion order. Append-only.
    history: Vec<MoveRecord>,
    /// Lifecycle phase.
    phase: Phase,
}

impl GameSession {
    /// Creates an empty session awaiting both rosters. Side A moves first.
    #[instrument]
    pub fn new() -> Self {
        info!("creating game session");
        Self {
            turn: Side::A,
            side_a: Roster::new(),
            side_b: Roster::new(),
            board: Board::default(),
            history: Vec::new(),
            phase: Phase::AwaitingInit,
        }
    }

    /// Initializes a side's roster from a tag list.
    ///
    /// Each tag is assigned a starting coordinate from the fixed layout:
    /// side A in column 0, side B in column 4, tags in order down rows
    /// 0-3. Tags beyond the fourth have no starting row and are dropped.
    ///
    /// Any prior roster for the side is replaced unconditionally, even
    /// mid-game. The session enters `InProgress` once both sides hold a
    /// non-empty roster.
    #[instrument(skip(self, tags), fields(count = tags.len()))]
    pub fn initialize(&mut self, side: Side, tags: &[String]) {
        if tags.len() > STARTING_ROWS {
            warn!(
                dropped = tags.len() - STARTING_ROWS,
                "roster larger than starting layout, extra tags ignored"
            );
        }

        let column = match side {
            Side::A => 0,
            Side::B => (BOARD_SIZE - 1) as i8,
        };
        let roster: Roster = tags
            .iter()
            .take(STARTING_ROWS)
            .enumerate()
            .map(|(row, tag)| (tag.clone(), Coord::new(row as i8, column)))
            .collect();

        info!(%side, characters = roster.len(), "side initialized");
        *self.roster_mut(side) = roster;
        self.board = Board::project(&self.side_a, &self.side_b);

        if self.phase == Phase::AwaitingInit
            && !self.side_a.is_empty()
            && !self.side_b.is_empty()
        {
            self.phase = Phase::InProgress;
            info!("both sides initialized, game in progress");
        }
    }

    /// Validates and applies one move.
    ///
    /// Validation order: turn ownership, character existence, direction
    /// vocabulary, target bounds. Only after all four pass does the move
    /// apply: combat resolution at the target, coordinate mutation, board
    /// reprojection, turn flip, history append.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn submit_move(
        &mut self,
        side: Side,
        character: &str,
        direction: &str,
    ) -> Result<(), GameError> {
        if side != self.turn {
            warn!(%side, "move submitted out of turn");
            return Err(GameError::OutOfTurn);
        }

        let current = *self
            .roster(side)
            .get(character)
            .ok_or(GameError::UnknownCharacter)?;

        let direction = Direction::from_label(direction).ok_or(GameError::InvalidDirection)?;

        let target = current.step(direction);
        if !target.in_bounds() {
            warn!(to = %target, "move target out of bounds");
            return Err(GameError::OutOfBounds);
        }

        // Validation complete; everything below applies unconditionally.
        self.resolve_combat(side, target);
        self.roster_mut(side).insert(character.to_string(), target);
        self.board = Board::project(&self.side_a, &self.side_b);
        self.turn = self.turn.opponent();
        self.history.push(MoveRecord {
            side,
            character: character.to_string(),
            direction,
            coord: target,
        });

        info!(%side, character, %direction, to = %target, "move accepted");
        Ok(())
    }

    /// Returns a serializable copy of the full session for broadcast and
    /// late-joining spectators.
    pub fn snapshot(&self) -> GameSession {
        self.clone()
    }

    /// Removes the opposing character occupying `target`, if any.
    ///
    /// At most one opposing character can occupy a square, so the first
    /// match wins. An empty target is a no-op. A friendly occupant is not
    /// touched and does not block the move.
    fn resolve_combat(&mut self, mover: Side, target: Coord) {
        let enemy = self.roster_mut(mover.opponent());
        let captured = enemy
            .iter()
            .find(|(_, coord)| **coord == target)
            .map(|(tag, _)| tag.clone());
        if let Some(tag) = captured {
            enemy.remove(&tag);
            info!(captured = %tag, side = %mover.opponent(), at = %target, "character captured");
        }
    }

    fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
