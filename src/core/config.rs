//! Game configuration.
//!
//! The two rulesets share one configuration type; `GameConfig::scarcity`
//! and `GameConfig::homestead` supply the canonical defaults and the
//! builder-style `with_*` methods tune individual knobs for tests or
//! embeddings that want a different board.

use serde::{Deserialize, Serialize};

/// Which rule variant is in force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ruleset {
    /// Finite nodes that deplete and stop respawning. Players start
    /// supplied; a supply count reaching zero ends the game.
    Scarcity,
    /// Infinite nodes. Wood gates food and water collection; reaching the
    /// goal wins and exhausting the move cap loses.
    Homestead,
}

/// Complete engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule variant.
    pub ruleset: Ruleset,

    /// Side length of the square grid.
    pub grid_size: u8,

    /// Total game duration in milliseconds.
    pub duration_ms: u64,

    /// Clock tick interval in milliseconds.
    pub tick_ms: u64,

    /// Per-kind supply each player starts with.
    pub starting_supply: u32,

    /// Units per node under Scarcity (ignored by Homestead).
    pub node_stock: u32,

    /// Per-kind count that wins under Homestead.
    pub goal: u32,

    /// Wood required before food or water can be gathered (Homestead).
    pub wood_unlock: u32,

    /// Applied moves after which a Homestead player loses.
    pub move_cap: u32,

    /// Rejection-sampling attempts before placement falls back to an
    /// exhaustive free-cell scan.
    pub placement_retries: u32,
}

impl GameConfig {
    /// Scarcity defaults: 8x8 board, two minutes, one-second ticks, nodes
    /// stocked with 3, players starting with 5 of each kind.
    #[must_use]
    pub fn scarcity() -> Self {
        Self {
            ruleset: Ruleset::Scarcity,
            grid_size: 8,
            duration_ms: 120_000,
            tick_ms: 1_000,
            starting_supply: 5,
            node_stock: 3,
            goal: 5,
            wood_unlock: 5,
            move_cap: 25,
            placement_retries: 32,
        }
    }

    /// Homestead defaults: players start empty, goal and wood unlock at 5,
    /// move cap 25.
    #[must_use]
    pub fn homestead() -> Self {
        Self {
            ruleset: Ruleset::Homestead,
            starting_supply: 0,
            ..Self::scarcity()
        }
    }

    /// Set the grid side length.
    ///
    /// The board must hold both players plus at least one free cell.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: u8) -> Self {
        assert!(grid_size >= 2, "Grid must hold both players and a free cell");
        self.grid_size = grid_size;
        self
    }

    /// Set the total game duration.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the clock tick interval.
    #[must_use]
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        assert!(tick_ms > 0, "Tick interval must be positive");
        self.tick_ms = tick_ms;
        self
    }

    /// Set the per-kind starting supply.
    #[must_use]
    pub fn with_starting_supply(mut self, starting_supply: u32) -> Self {
        self.starting_supply = starting_supply;
        self
    }

    /// Set the per-node stock used under Scarcity.
    #[must_use]
    pub fn with_node_stock(mut self, node_stock: u32) -> Self {
        self.node_stock = node_stock;
        self
    }

    /// Set the per-kind winning count and wood unlock together.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        assert!(goal > 0, "Goal must be positive");
        self.goal = goal;
        self.wood_unlock = goal;
        self
    }

    /// Set the Homestead move cap.
    #[must_use]
    pub fn with_move_cap(mut self, move_cap: u32) -> Self {
        assert!(move_cap > 0, "Move cap must be positive");
        self.move_cap = move_cap;
        self
    }
}
