//! # gridforage
//!
//! A deterministic engine for a two-player, turn-based grid survival game.
//! Players alternate directional moves on a square grid, gather food, water,
//! and wood from roaming resource nodes, and the game ends by timer expiry,
//! move-limit, resource-goal completion, or resource depletion depending on
//! the active ruleset.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, no input handling, no I/O.
//!    A presentation layer drives the engine with directional inputs and
//!    clock ticks, and renders the snapshot returned after each transition.
//!
//! 2. **Immutable-Per-Transition**: Every transition takes the old state by
//!    reference and returns a fresh one. Nothing mutates in place across a
//!    turn boundary, so the rules are unit-testable without a UI harness.
//!
//! 3. **Deterministic**: Resource placement is the only randomness, drawn
//!    from a seeded stream. Same seed, same game.
//!
//! ## Rulesets
//!
//! - **Scarcity**: finite resource nodes that deplete and stop respawning;
//!   players start supplied and lose when any count runs out.
//! - **Homestead**: infinite nodes; wood gates food and water collection;
//!   first to the goal wins, exhausting the move cap loses.
//!
//! ## Modules
//!
//! - `core`: coordinates, players, resources, state, RNG, configuration
//! - `engine`: the turn engine and resource placement
//! - `session`: the serialized update path, setup validation, snapshots

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction,
    PlayerId, Player, Portrait,
    ResourceKind, Stock, ResourceNode,
    Ruleset, GameConfig,
    GameRng, GameRngState,
    GameState, Phase, Outcome, TurnRecord,
};

pub use crate::engine::{TurnEngine, Transition, GameEvent};

pub use crate::session::{GameSession, Command, PlayerProfile, SetupError, Snapshot};
