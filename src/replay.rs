//! Replay storage keyed by opaque game identifier.
//!
//! The store consumes the session's read-only history; the game core is
//! not coupled to how recordings are kept or looked up.

use crate::game::MoveRecord;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// In-memory store of recorded games.
#[derive(Debug, Default)]
pub struct ReplayStore {
    recordings: HashMap<String, Vec<MoveRecord>>,
}

impl ReplayStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures a history snapshot under the given id, replacing any
    /// prior recording with the same id.
    #[instrument(skip(self, history), fields(moves = history.len()))]
    pub fn save(&mut self, game_id: &str, history: &[MoveRecord]) {
        info!(game_id, "saving replay");
        self.recordings.insert(game_id.to_string(), history.to_vec());
    }

    /// Looks up a recording by id.
    #[instrument(skip(self))]
    pub fn get(&self, game_id: &str) -> Option<&[MoveRecord]> {
        let recording = self.recordings.get(game_id).map(Vec::as_slice);
        if recording.is_none() {
            debug!(game_id, "replay not found");
        }
        recording
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, Direction, Side};

    fn record(side: Side, tag: &str) -> MoveRecord {
        MoveRecord {
            side,
            character: tag.to_string(),
            direction: Direction::Right,
            coord: Coord::new(0, 1),
        }
    }

    #[test]
    fn save_and_get_preserve_order() {
        let mut store = ReplayStore::new();
        let history = vec![record(Side::A, "P"), record(Side::B, "H1")];
        store.save("game-1", &history);

        let replay = store.get("game-1").expect("saved replay");
        assert_eq!(replay, history.as_slice());
    }

    #[test]
    fn unknown_id_is_a_miss() {
        let store = ReplayStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn save_replaces_prior_recording() {
        let mut store = ReplayStore::new();
        store.save("game-1", &[record(Side::A, "P")]);
        store.save("game-1", &[]);
        assert_eq!(store.get("game-1"), Some(&[][..]));
    }
}
