//! Renderable view handed to the presentation layer.
//!
//! The snapshot carries everything needed after a transition: grid
//! contents, per-player counts, timer display, and the terminal banner.
//! It is plain serde data; `to_bytes`/`from_bytes` give embeddings a
//! compact byte form for shipping the view across an FFI or worker
//! boundary.

use serde::{Deserialize, Serialize};

use crate::core::player::{Player, PlayerId};
use crate::core::resource::ResourceNode;
use crate::core::state::{GameState, Phase};

/// Full renderable view of a game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Both players, by seat.
    pub players: [Player; 2],

    /// The three resource nodes, in kind order.
    pub nodes: Vec<ResourceNode>,

    /// The seat whose turn it is.
    pub current: PlayerId,

    /// Remaining time in milliseconds.
    pub remaining_ms: u64,

    /// In progress or over.
    pub phase: Phase,
}

impl Snapshot {
    /// Capture a view of `state`.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let nodes = crate::core::resource::ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| state.nodes.get(&kind).cloned())
            .collect();

        Self {
            players: state.players.clone(),
            nodes,
            current: state.current,
            remaining_ms: state.remaining_ms,
            phase: state.phase.clone(),
        }
    }

    /// Whole seconds left, for the timer display.
    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms / 1_000
    }

    /// Display name of the winner, if the game ended with one.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match &self.phase {
            Phase::Over(outcome) => outcome
                .winner()
                .map(|id| self.players[id.index()].name.as_str()),
            Phase::InProgress => None,
        }
    }

    /// Display name of the loser, if the game ended with one.
    #[must_use]
    pub fn loser_name(&self) -> Option<&str> {
        match &self.phase {
            Phase::Over(outcome) => outcome
                .loser()
                .map(|id| self.players[id.index()].name.as_str()),
            Phase::InProgress => None,
        }
    }

    /// Serialize to a compact byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from [`Snapshot::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::player::Portrait;
    use crate::session::{GameSession, PlayerProfile};

    fn session() -> GameSession {
        GameSession::new(
            GameConfig::scarcity(),
            [
                PlayerProfile::new("Ada", Portrait::new("ada.png")),
                PlayerProfile::new("Ben", Portrait::new("ben.png")),
            ],
            42,
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let session = session();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.players[0].name, "Ada");
        assert_eq!(snapshot.nodes.len(), 3);
        assert_eq!(snapshot.current, PlayerId::new(0));
        assert_eq!(snapshot.remaining_secs(), 120);
        assert_eq!(snapshot.phase, Phase::InProgress);
        assert!(snapshot.winner_name().is_none());
        assert!(snapshot.loser_name().is_none());
    }

    #[test]
    fn test_snapshot_bytes_round_trip() {
        let snapshot = session().snapshot();

        let bytes = snapshot.to_bytes().unwrap();
        let back = Snapshot::from_bytes(&bytes).unwrap();

        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = session().snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, back);
    }
}
