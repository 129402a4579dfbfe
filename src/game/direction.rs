//! Movement vocabulary: orthogonal steps and knight-like leaps.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A named movement direction.
///
/// The four orthogonal variants move one square. The remaining eight are
/// knight-like leaps: two squares in one axis and one in the other, named
/// by their dominant axis (F/B for row, L/R for column).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// One square up.
    #[serde(rename = "UP")]
    Up,
    /// One square down.
    #[serde(rename = "DOWN")]
    Down,
    /// One square left.
    #[serde(rename = "LEFT")]
    Left,
    /// One square right.
    #[serde(rename = "RIGHT")]
    Right,
    /// Two up, one left.
    #[serde(rename = "FL")]
    FrontLeft,
    /// Two up, one right.
    #[serde(rename = "FR")]
    FrontRight,
    /// Two down, one left.
    #[serde(rename = "BL")]
    BackLeft,
    /// Two down, one right.
    #[serde(rename = "BR")]
    BackRight,
    /// One down, two right.
    #[serde(rename = "RF")]
    RightFront,
    /// One down, two left.
    #[serde(rename = "RB")]
    RightBack,
    /// One up, two right.
    #[serde(rename = "LF")]
    LeftFront,
    /// One up, two left.
    #[serde(rename = "LB")]
    LeftBack,
}

impl Direction {
    /// Wire label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::FrontLeft => "FL",
            Direction::FrontRight => "FR",
            Direction::BackLeft => "BL",
            Direction::BackRight => "BR",
            Direction::RightFront => "RF",
            Direction::RightBack => "RB",
            Direction::LeftFront => "LF",
            Direction::LeftBack => "LB",
        }
    }

    /// Parses a wire label. Returns `None` for anything outside the
    /// movement vocabulary.
    pub fn from_label(s: &str) -> Option<Self> {
        Direction::iter().find(|d| d.label() == s)
    }

    /// The (row, col) displacement this direction applies.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::FrontLeft => (-2, -1),
            Direction::FrontRight => (-2, 1),
            Direction::BackLeft => (2, -1),
            Direction::BackRight => (2, 1),
            Direction::RightFront => (1, 2),
            Direction::RightBack => (1, -2),
            Direction::LeftFront => (-1, 2),
            Direction::LeftBack => (-1, -2),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
