//! Core engine types: grid coordinates, players, resources, state, RNG,
//! configuration.
//!
//! Everything here is plain data plus invariant-preserving accessors. The
//! rules that transform one state into the next live in `engine`.

pub mod grid;
pub mod player;
pub mod resource;
pub mod rng;
pub mod config;
pub mod state;

pub use grid::{Coord, Direction};
pub use player::{PlayerId, Player, Portrait};
pub use resource::{ResourceKind, Stock, ResourceNode};
pub use rng::{GameRng, GameRngState};
pub use config::{Ruleset, GameConfig};
pub use state::{GameState, Phase, Outcome, TurnRecord};
