//! Player identity and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe index for the two seats. The game always has exactly two
//! players; `PlayerId::other` flips between them.
//!
//! ## Player
//!
//! Identity (name, portrait) plus everything the rules touch each turn:
//! position, supply counts, and the move counter.

use serde::{Deserialize, Serialize};

use super::grid::Coord;
use super::resource::ResourceKind;

/// Player identifier: seat 0 or seat 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. Must be 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Opaque handle to a player's portrait image.
///
/// The engine never interprets it - capture (file upload, camera snapshot)
/// and rendering belong to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portrait(String);

impl Portrait {
    /// Wrap a portrait source reference.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The raw source reference.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.0
    }

    /// Whether the handle carries anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// A player: identity, position, gathered supplies, and move counter.
///
/// Created at setup, mutated each turn by the engine, never destroyed
/// mid-game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable seat identifier.
    pub id: PlayerId,

    /// Display name (validated non-empty at the setup boundary).
    pub name: String,

    /// Portrait handle, irrelevant to the rules.
    pub portrait: Portrait,

    /// Current grid position.
    pub position: Coord,

    /// Food supply.
    pub food: u32,

    /// Water supply.
    pub water: u32,

    /// Wood supply.
    pub wood: u32,

    /// Applied moves this game. Drives the Homestead move cap.
    pub moves: u32,
}

impl Player {
    /// Create a player with `starting_supply` of each kind.
    #[must_use]
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        portrait: Portrait,
        position: Coord,
        starting_supply: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            portrait,
            position,
            food: starting_supply,
            water: starting_supply,
            wood: starting_supply,
            moves: 0,
        }
    }

    /// Supply count for one resource kind.
    #[must_use]
    pub fn supply(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Water => self.water,
            ResourceKind::Wood => self.wood,
        }
    }

    /// Mutable supply count for one resource kind.
    pub fn supply_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Food => &mut self.food,
            ResourceKind::Water => &mut self.water,
            ResourceKind::Wood => &mut self.wood,
        }
    }

    /// food + water + wood: the timeout scoring total.
    #[must_use]
    pub fn total_supply(&self) -> u32 {
        self.food + self.water + self.wood
    }
}
