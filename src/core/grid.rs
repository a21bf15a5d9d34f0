//! Grid coordinates and movement directions.
//!
//! The board is a square grid of side `grid_size`. Coordinates are only
//! ever produced clamped, so a stored `Coord` is always in range for the
//! game it belongs to.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the square grid.
///
/// `x` grows rightward, `y` grows downward. Both axes live in
/// `[0, grid_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Move one cell in `direction`, clamped at the grid boundary.
    ///
    /// Moving against an edge leaves that axis unchanged - it is a no-op
    /// for the axis, not an error.
    #[must_use]
    pub fn step(self, direction: Direction, grid_size: u8) -> Self {
        let max = grid_size.saturating_sub(1);
        match direction {
            Direction::Up => Self { y: self.y.saturating_sub(1), ..self },
            Direction::Down => Self { y: self.y.saturating_add(1).min(max), ..self },
            Direction::Left => Self { x: self.x.saturating_sub(1), ..self },
            Direction::Right => Self { x: self.x.saturating_add(1).min(max), ..self },
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A directional input, as delivered by the presentation layer.
///
/// These four signals are the only runtime inputs that affect the game,
/// besides the clock tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interior() {
        let c = Coord::new(3, 3);

        assert_eq!(c.step(Direction::Up, 8), Coord::new(3, 2));
        assert_eq!(c.step(Direction::Down, 8), Coord::new(3, 4));
        assert_eq!(c.step(Direction::Left, 8), Coord::new(2, 3));
        assert_eq!(c.step(Direction::Right, 8), Coord::new(4, 3));
    }

    #[test]
    fn test_step_clamps_at_origin() {
        let c = Coord::new(0, 0);

        assert_eq!(c.step(Direction::Up, 8), c);
        assert_eq!(c.step(Direction::Left, 8), c);
    }

    #[test]
    fn test_step_clamps_at_far_corner() {
        let c = Coord::new(7, 7);

        assert_eq!(c.step(Direction::Down, 8), c);
        assert_eq!(c.step(Direction::Right, 8), c);
    }

    #[test]
    fn test_step_clamp_only_affects_one_axis() {
        // Against the top edge, horizontal movement still works.
        let c = Coord::new(4, 0);
        assert_eq!(c.step(Direction::Right, 8), Coord::new(5, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(2, 5)), "(2, 5)");
        assert_eq!(format!("{}", Direction::Up), "up");
    }

    #[test]
    fn test_serialization() {
        let c = Coord::new(1, 2);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
