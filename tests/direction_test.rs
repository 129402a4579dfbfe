//! Tests for the movement resolver: the full direction table.

use grid_skirmish::{Coord, Direction};
use strum::IntoEnumIterator;

/// Every direction label and its (row, col) displacement.
const TABLE: [(&str, (i8, i8)); 12] = [
    ("UP", (-1, 0)),
    ("DOWN", (1, 0)),
    ("LEFT", (0, -1)),
    ("RIGHT", (0, 1)),
    ("FL", (-2, -1)),
    ("FR", (-2, 1)),
    ("BL", (2, -1)),
    ("BR", (2, 1)),
    ("RF", (1, 2)),
    ("RB", (1, -2)),
    ("LF", (-1, 2)),
    ("LB", (-1, -2)),
];

#[test]
fn test_displacement_table() {
    for (label, delta) in TABLE {
        let direction = Direction::from_label(label).expect("known label");
        assert_eq!(direction.delta(), delta, "delta for {label}");
        assert_eq!(direction.label(), label);
    }
}

#[test]
fn test_table_is_exhaustive() {
    assert_eq!(Direction::iter().count(), TABLE.len());
}

#[test]
fn test_unknown_labels_rejected() {
    for label in ["", "up", "DIAGONAL", "UPUP", "RIGHT "] {
        assert!(Direction::from_label(label).is_none(), "label {label:?}");
    }
}

#[test]
fn test_step_applies_delta_without_bounds_check() {
    let origin = Coord::new(0, 0);
    let stepped = origin.step(Direction::Up);
    // The resolver performs no bounds checking; the caller validates.
    assert_eq!(stepped, Coord::new(-1, 0));
    assert!(!stepped.in_bounds());

    let stepped = Coord::new(2, 2).step(Direction::RightFront);
    assert_eq!(stepped, Coord::new(3, 4));
    assert!(stepped.in_bounds());
}

#[test]
fn test_serde_uses_wire_labels() {
    for direction in Direction::iter() {
        let json = serde_json::to_string(&direction).expect("serialize");
        assert_eq!(json, format!("\"{}\"", direction.label()));
    }
}
