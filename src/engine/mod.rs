//! The rules engine: movement resolution, resource collection, and
//! end-condition evaluation.
//!
//! `TurnEngine` is pure: each transition takes the current state by
//! reference and returns a fresh state plus the events the presentation
//! layer should surface. The engine never performs I/O; placement draws
//! are the only randomness and come from the RNG carried in the state.

pub mod placement;
pub mod turn;

pub use turn::{TurnEngine, Transition, GameEvent};
