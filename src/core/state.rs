//! Authoritative in-memory game state.
//!
//! ## GameState
//!
//! Everything the rules touch: both players, the three resource nodes, the
//! acting seat, the countdown, the phase, and the turn history. The state
//! is cloned per transition; the history uses an `im` persistent vector so
//! those clones stay cheap as games grow.
//!
//! ## Phase
//!
//! Two phases, `InProgress` and `Over`. `Over` is absorbing: once an
//! outcome is recorded, no transition leaves it and no further turns are
//! processed.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::grid::{Coord, Direction};
use super::player::{Player, PlayerId};
use super::resource::{ResourceKind, ResourceNode};
use super::rng::GameRng;

/// Why the game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player gathered the goal amount of every kind (Homestead).
    GoalReached { winner: PlayerId },

    /// A player's supply of some kind ran out (Scarcity).
    SupplyExhausted { loser: PlayerId, kind: ResourceKind },

    /// A player used up the move cap without reaching the goal (Homestead).
    MoveCapReached { loser: PlayerId },

    /// The clock ran out; the higher total supply wins, ties to seat 0.
    TimeExpired { winner: PlayerId },
}

impl Outcome {
    /// The winning seat, where the outcome names one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::GoalReached { winner } | Outcome::TimeExpired { winner } => Some(*winner),
            Outcome::SupplyExhausted { .. } | Outcome::MoveCapReached { .. } => None,
        }
    }

    /// The losing seat, where the outcome names one.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        match self {
            Outcome::SupplyExhausted { loser, .. } | Outcome::MoveCapReached { loser } => {
                Some(*loser)
            }
            Outcome::GoalReached { .. } | Outcome::TimeExpired { .. } => None,
        }
    }
}

/// Whether the game is still being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Over(Outcome),
}

impl Phase {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Over(_))
    }
}

/// One applied move, kept for replay and debugging.
///
/// Rejected moves (Homestead collection before the wood unlock) are not
/// recorded - they never happened as far as the state is concerned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The seat that moved.
    pub player: PlayerId,

    /// Requested direction.
    pub direction: Direction,

    /// Position before the move.
    pub from: Coord,

    /// Position after the move (equal to `from` when clamped at an edge).
    pub to: Coord,

    /// What was collected, if anything.
    pub collected: Option<ResourceKind>,
}

/// The authoritative game state.
///
/// Invariants, maintained by the engine:
/// - `current` is always a valid seat.
/// - `remaining_ms` never goes negative (saturating decrements).
/// - Exactly one of in-progress / over holds at any time, and `Over` is
///   never left once entered.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Exactly two players, indexed by seat.
    pub players: [Player; 2],

    /// One node per resource kind.
    pub nodes: FxHashMap<ResourceKind, ResourceNode>,

    /// The seat whose turn it is.
    pub current: PlayerId,

    /// Remaining time in milliseconds, clamped at zero.
    pub remaining_ms: u64,

    /// In progress or over.
    pub phase: Phase,

    /// Applied moves, oldest first.
    pub history: Vector<TurnRecord>,

    /// Placement randomness.
    pub rng: GameRng,
}

impl GameState {
    /// Get a player by seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a mutable player by seat.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The recorded outcome, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Over(outcome) => Some(outcome),
            Phase::InProgress => None,
        }
    }

    /// Display name of the winner, for the terminal banner.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.outcome()
            .and_then(Outcome::winner)
            .map(|id| self.player(id).name.as_str())
    }

    /// Display name of the loser, for the terminal banner.
    #[must_use]
    pub fn loser_name(&self) -> Option<&str> {
        self.outcome()
            .and_then(Outcome::loser)
            .map(|id| self.player(id).name.as_str())
    }

    /// The kind of the node sitting on `coord`, if any.
    #[must_use]
    pub fn node_at(&self, coord: Coord) -> Option<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| self.nodes.get(kind).map(|n| n.position) == Some(coord))
    }

    /// Positions currently occupied by players.
    #[must_use]
    pub fn occupied_cells(&self) -> [Coord; 2] {
        [self.players[0].position, self.players[1].position]
    }
}
