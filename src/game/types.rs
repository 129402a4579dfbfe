//! Core domain types: sides, coordinates, rosters.

use super::direction::Direction;
use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 5;

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// Side A (moves first).
    A,
    /// Side B (moves second).
    B,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Wire label for this side.
    pub fn label(&self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Side {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Side::A),
            "B" => Ok(Side::B),
            _ => Err(GameError::InvalidSide),
        }
    }
}

/// A board coordinate. In-bounds coordinates have both components in
/// `[0, BOARD_SIZE)`; out-of-bounds values exist transiently as move
/// targets awaiting validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: i8,
    /// Column index, 0 at the left.
    pub col: i8,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Checks that both components lie within the board.
    pub fn in_bounds(&self) -> bool {
        let range = 0..BOARD_SIZE as i8;
        range.contains(&self.row) && range.contains(&self.col)
    }

    /// Applies a direction's displacement. Performs no bounds checking;
    /// the caller validates the result.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One side's characters: tag -> current coordinate.
///
/// Tags are unique within a side; the same tag may exist on both sides
/// (mirrored roles).
pub type Roster = BTreeMap<String, Coord>;
