//! The turn engine.
//!
//! One directional input resolves into a full turn: movement (clamped at
//! the grid edge), optional collection, end-condition evaluation, and -
//! when the game continues - turn-ownership advance. The clock tick is a
//! separate transition with its own end condition.
//!
//! Both transitions are no-ops on a finished game: `Phase::Over` is
//! absorbing and the returned state is identical to the input.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{GameConfig, Ruleset};
use crate::core::grid::{Coord, Direction};
use crate::core::player::{Player, PlayerId};
use crate::core::resource::{ResourceKind, ResourceNode, Stock};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Outcome, Phase, TurnRecord};
use crate::engine::placement;

/// An event the presentation layer should surface after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The acting player picked up one unit.
    Collected {
        player: PlayerId,
        kind: ResourceKind,
        /// The player's count of `kind` after the pickup.
        count: u32,
    },

    /// Food or water was attempted before the wood unlock (Homestead).
    /// The whole move was rejected and the turn did not advance.
    CollectDenied {
        player: PlayerId,
        kind: ResourceKind,
        /// Wood still missing before the unlock.
        wood_needed: u32,
    },

    /// The game just ended.
    GameOver(Outcome),
}

/// A completed transition: the next state plus surfaced events.
///
/// Usually zero or one event; two when a pickup ends the game.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub events: SmallVec<[GameEvent; 2]>,
}

impl Transition {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            events: SmallVec::new(),
        }
    }
}

/// Pure rules engine over [`GameState`].
///
/// Holds the configuration; all game data lives in the state it is handed.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: GameConfig,
}

impl TurnEngine {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the opening state: full clock, seat 0 to act, one node of
    /// each kind placed per the ruleset's placement rule.
    #[must_use]
    pub fn new_game(&self, players: [Player; 2], seed: u64) -> GameState {
        debug_assert_eq!(players[0].id, PlayerId::new(0));
        debug_assert_eq!(players[1].id, PlayerId::new(1));

        let mut rng = GameRng::new(seed);
        let occupied = [players[0].position, players[1].position];
        let stock = match self.config.ruleset {
            Ruleset::Scarcity => Stock::Finite(self.config.node_stock),
            Ruleset::Homestead => Stock::Infinite,
        };

        let mut nodes = FxHashMap::default();
        for kind in ResourceKind::ALL {
            let position = placement::spawn_position(&self.config, &mut rng, &occupied);
            nodes.insert(kind, ResourceNode::new(kind, stock, position));
        }

        GameState {
            players,
            nodes,
            current: PlayerId::new(0),
            remaining_ms: self.config.duration_ms,
            phase: Phase::InProgress,
            history: Vector::new(),
            rng,
        }
    }

    /// Resolve one directional input into a full turn.
    ///
    /// Movement is clamped at the boundary (a clamped move still consumes
    /// the turn). Under Homestead, stepping onto food or water before the
    /// wood unlock rejects the whole move: the returned state is identical
    /// to the input and the turn does not advance.
    #[must_use]
    pub fn apply_move(&self, state: &GameState, direction: Direction) -> Transition {
        if state.is_over() {
            return Transition::unchanged(state);
        }

        let acting = state.current;
        let from = state.player(acting).position;
        let to = from.step(direction, self.config.grid_size);

        // The unlock gate is checked before anything is touched: a denied
        // pickup must leave the state exactly as it was.
        if let Some(denied) = self.denied_collection(state, acting, to) {
            let mut events = SmallVec::new();
            events.push(denied);
            return Transition {
                state: state.clone(),
                events,
            };
        }

        let mut next = state.clone();
        let mut events = SmallVec::new();

        next.player_mut(acting).position = to;
        let collected = self.resolve_collection(&mut next, acting, to, &mut events);
        next.player_mut(acting).moves += 1;

        next.history.push_back(TurnRecord {
            player: acting,
            direction,
            from,
            to,
            collected,
        });

        if let Some(outcome) = self.turn_outcome(&next, acting) {
            next.phase = Phase::Over(outcome.clone());
            events.push(GameEvent::GameOver(outcome));
        } else {
            next.current = acting.other();
        }

        Transition { state: next, events }
    }

    /// Advance the countdown by one tick interval.
    ///
    /// At zero the game ends with [`Outcome::TimeExpired`]: the higher
    /// total supply wins, ties going to seat 0. Evaluated independently of
    /// moves, and a no-op once the game is over.
    #[must_use]
    pub fn apply_tick(&self, state: &GameState) -> Transition {
        if state.is_over() {
            return Transition::unchanged(state);
        }

        let mut next = state.clone();
        let mut events = SmallVec::new();

        next.remaining_ms = next.remaining_ms.saturating_sub(self.config.tick_ms);
        if next.remaining_ms == 0 {
            let outcome = Outcome::TimeExpired {
                winner: self.timeout_winner(&next),
            };
            next.phase = Phase::Over(outcome.clone());
            events.push(GameEvent::GameOver(outcome));
        }

        Transition { state: next, events }
    }

    /// The Homestead unlock gate: food or water on the destination cell
    /// while wood is still below the threshold.
    fn denied_collection(
        &self,
        state: &GameState,
        acting: PlayerId,
        destination: Coord,
    ) -> Option<GameEvent> {
        if self.config.ruleset != Ruleset::Homestead {
            return None;
        }

        let kind = state.node_at(destination)?;
        if kind == ResourceKind::Wood {
            return None;
        }
        if !state.nodes[&kind].stock.available() {
            return None;
        }

        let wood = state.player(acting).wood;
        if wood >= self.config.wood_unlock {
            return None;
        }

        Some(GameEvent::CollectDenied {
            player: acting,
            kind,
            wood_needed: self.config.wood_unlock - wood,
        })
    }

    /// Collection after movement: take one unit if the destination holds a
    /// node with available stock, credit the player, relocate the node.
    fn resolve_collection(
        &self,
        state: &mut GameState,
        acting: PlayerId,
        at: Coord,
        events: &mut SmallVec<[GameEvent; 2]>,
    ) -> Option<ResourceKind> {
        let kind = state.node_at(at)?;

        if self.config.ruleset == Ruleset::Homestead {
            // Counts cap out: wood at the unlock, food and water at the
            // goal. Walking over a capped node is an ordinary no-op and
            // the turn proceeds.
            let cap = match kind {
                ResourceKind::Wood => self.config.wood_unlock,
                ResourceKind::Food | ResourceKind::Water => self.config.goal,
            };
            if state.player(acting).supply(kind) >= cap {
                return None;
            }
        }

        let node = state.nodes.get_mut(&kind)?;
        if !node.take() {
            // Exhausted Scarcity node: stays in place, yields nothing.
            return None;
        }

        *state.player_mut(acting).supply_mut(kind) += 1;
        let count = state.player(acting).supply(kind);

        let occupied = state.occupied_cells();
        let position = placement::spawn_position(&self.config, &mut state.rng, &occupied);
        if let Some(node) = state.nodes.get_mut(&kind) {
            node.position = position;
        }

        events.push(GameEvent::Collected {
            player: acting,
            kind,
            count,
        });
        Some(kind)
    }

    /// End conditions checked after movement and collection, in precedence
    /// order: goal completion, supply exhaustion, move cap. Timer expiry
    /// is evaluated on ticks, not here.
    fn turn_outcome(&self, state: &GameState, acting: PlayerId) -> Option<Outcome> {
        let player = state.player(acting);

        match self.config.ruleset {
            Ruleset::Homestead => {
                let goal_met = ResourceKind::ALL
                    .into_iter()
                    .all(|kind| player.supply(kind) >= self.config.goal);
                if goal_met {
                    return Some(Outcome::GoalReached { winner: acting });
                }
                if player.moves >= self.config.move_cap {
                    return Some(Outcome::MoveCapReached { loser: acting });
                }
                None
            }
            Ruleset::Scarcity => ResourceKind::ALL
                .into_iter()
                .find(|&kind| player.supply(kind) == 0)
                .map(|kind| Outcome::SupplyExhausted {
                    loser: acting,
                    kind,
                }),
        }
    }

    /// Timeout resolution: strictly-greater comparison keeps seat 0 on a
    /// tie (ties break by player order).
    fn timeout_winner(&self, state: &GameState) -> PlayerId {
        if state.players[1].total_supply() > state.players[0].total_supply() {
            PlayerId::new(1)
        } else {
            PlayerId::new(0)
        }
    }
}
