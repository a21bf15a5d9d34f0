//! Resource placement.
//!
//! Scarcity samples x and y independently over the whole grid and accepts
//! whatever comes out, including a cell a player stands on. Homestead
//! guarantees a node never lands on a player: rejection sampling with a
//! bounded retry budget, then an exhaustive free-cell scan so crowded or
//! tiny grids cannot spin forever.

use crate::core::config::{GameConfig, Ruleset};
use crate::core::grid::Coord;
use crate::core::rng::GameRng;

/// Produce a position for a resource node.
///
/// `occupied` holds the cells the node must avoid under Homestead. On a
/// grid with no free cell at all (smaller than players + 1, a documented
/// edge case) the last sampled candidate is returned as-is.
#[must_use]
pub fn spawn_position(config: &GameConfig, rng: &mut GameRng, occupied: &[Coord]) -> Coord {
    match config.ruleset {
        Ruleset::Scarcity => random_cell(rng, config.grid_size),
        Ruleset::Homestead => spawn_avoiding(config, rng, occupied),
    }
}

fn random_cell(rng: &mut GameRng, grid_size: u8) -> Coord {
    Coord::new(rng.gen_axis(grid_size), rng.gen_axis(grid_size))
}

fn spawn_avoiding(config: &GameConfig, rng: &mut GameRng, occupied: &[Coord]) -> Coord {
    let mut candidate = random_cell(rng, config.grid_size);
    for _ in 0..config.placement_retries {
        if !occupied.contains(&candidate) {
            return candidate;
        }
        candidate = random_cell(rng, config.grid_size);
    }

    // Retry budget exhausted: scan every cell and pick a free one at
    // random, which terminates on any grid.
    let mut free = Vec::new();
    for y in 0..config.grid_size {
        for x in 0..config.grid_size {
            let cell = Coord::new(x, y);
            if !occupied.contains(&cell) {
                free.push(cell);
            }
        }
    }

    if free.is_empty() {
        candidate
    } else {
        free[rng.gen_index(free.len())]
    }
}
