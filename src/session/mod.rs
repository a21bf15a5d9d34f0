//! The serialized update path and the setup boundary.
//!
//! ## GameSession
//!
//! Owns the engine and the current state. Every mutation - directional
//! input or clock tick - flows through [`GameSession::apply`] as a
//! [`Command`]. `&mut self` plus the single command funnel is the
//! serialization discipline: a tick can never interleave with a move
//! inside one transition, and nothing is lost between "decrement timer"
//! and "apply move". A driver embedding the session on multiple threads
//! wraps it in its own mutex and gets the same guarantee.
//!
//! ## Setup boundary
//!
//! No `GameState` exists until both [`PlayerProfile`]s pass validation:
//! a missing name or portrait is a [`SetupError`] and the caller keeps
//! prompting.
//!
//! ## Teardown
//!
//! The tick source belongs to the driver. [`GameSession::is_over`] tells
//! it when to cancel; ticks delivered after the end are absorbed, so a
//! late timer callback cannot corrupt a finished game.

pub mod snapshot;

use smallvec::SmallVec;

use crate::core::config::GameConfig;
use crate::core::grid::{Coord, Direction};
use crate::core::player::{Player, PlayerId, Portrait};
use crate::core::state::GameState;
use crate::engine::turn::{GameEvent, TurnEngine};

pub use snapshot::Snapshot;

/// Raw setup input for one player, as collected by the presentation
/// layer's form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    pub name: String,
    pub portrait: Portrait,
}

impl PlayerProfile {
    /// Create a profile. Validation happens at session creation.
    pub fn new(name: impl Into<String>, portrait: Portrait) -> Self {
        Self {
            name: name.into(),
            portrait,
        }
    }
}

/// Why setup was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The named seat has an empty display name.
    EmptyName(PlayerId),
    /// The named seat has no portrait source.
    MissingPortrait(PlayerId),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::EmptyName(id) => write!(f, "{} has no name", id),
            SetupError::MissingPortrait(id) => write!(f, "{} has no portrait", id),
        }
    }
}

impl std::error::Error for SetupError {}

/// A command on the single serialized update path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A directional input from the acting player.
    Move(Direction),
    /// One clock tick from the driver's timer.
    Tick,
}

/// One running game: engine plus current state, mutated only through
/// [`GameSession::apply`].
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: TurnEngine,
    state: GameState,
}

impl GameSession {
    /// Validate both profiles and start a game.
    ///
    /// Players open in opposite corners: seat 0 at the origin, seat 1 at
    /// the far corner.
    pub fn new(
        config: GameConfig,
        profiles: [PlayerProfile; 2],
        seed: u64,
    ) -> Result<Self, SetupError> {
        for (i, profile) in profiles.iter().enumerate() {
            let id = PlayerId::new(i as u8);
            if profile.name.trim().is_empty() {
                return Err(SetupError::EmptyName(id));
            }
            if profile.portrait.is_empty() {
                return Err(SetupError::MissingPortrait(id));
            }
        }

        let far = config.grid_size - 1;
        let starting_supply = config.starting_supply;
        let [p0, p1] = profiles;
        let players = [
            Player::new(
                PlayerId::new(0),
                p0.name,
                p0.portrait,
                Coord::new(0, 0),
                starting_supply,
            ),
            Player::new(
                PlayerId::new(1),
                p1.name,
                p1.portrait,
                Coord::new(far, far),
                starting_supply,
            ),
        ];

        let engine = TurnEngine::new(config);
        let state = engine.new_game(players, seed);

        Ok(Self { engine, state })
    }

    /// Apply one command and return the events it surfaced.
    ///
    /// This is the only mutation point; the stored state is replaced by
    /// the transition's result as one atomic unit.
    pub fn apply(&mut self, command: Command) -> SmallVec<[GameEvent; 2]> {
        let transition = match command {
            Command::Move(direction) => self.engine.apply_move(&self.state, direction),
            Command::Tick => self.engine.apply_tick(&self.state),
        };
        self.state = transition.state;
        transition.events
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Whether the game has ended. The driver cancels its tick source
    /// when this turns true.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Full renderable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state)
    }
}
