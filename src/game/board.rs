//! Derived occupancy projection of the board.

use super::types::{BOARD_SIZE, Coord, Roster, Side};
use serde::{Deserialize, Serialize};

/// A 5x5 grid of occupancy labels, derived from the two rosters.
///
/// Each cell is either empty or a `<side>-<tag>` label such as `"A-P"`.
/// The projection carries no state of its own: it is recomputed from
/// scratch after every roster mutation and can never drift from the
/// rosters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<String>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Recomputes the projection by iterating both rosters and writing
    /// each character's label at its coordinate. Pure and idempotent.
    pub fn project(side_a: &Roster, side_b: &Roster) -> Self {
        let mut cells: [[Option<String>; BOARD_SIZE]; BOARD_SIZE] = Default::default();
        for (side, roster) in [(Side::A, side_a), (Side::B, side_b)] {
            for (tag, coord) in roster {
                cells[coord.row as usize][coord.col as usize] = Some(format!("{side}-{tag}"));
            }
        }
        Self { cells }
    }

    /// Returns the label at the given in-bounds coordinate, if occupied.
    pub fn get(&self, coord: Coord) -> Option<&str> {
        self.cells
            .get(coord.row as usize)?
            .get(coord.col as usize)?
            .as_deref()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[[Option<String>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}
