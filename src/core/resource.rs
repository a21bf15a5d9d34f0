//! Resource kinds and the nodes that carry them.
//!
//! Exactly one node of each kind is on the grid at all times. A node is
//! repositioned whenever a unit is taken from it; under Scarcity it also
//! depletes and eventually stops yielding.

use serde::{Deserialize, Serialize};

use super::grid::Coord;

/// The three gatherable resource kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Food,
    Water,
    Wood,
}

impl ResourceKind {
    /// All kinds, in a fixed order.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Food,
        ResourceKind::Water,
        ResourceKind::Wood,
    ];
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Food => "food",
            ResourceKind::Water => "water",
            ResourceKind::Wood => "wood",
        };
        write!(f, "{}", name)
    }
}

/// Remaining stock on a node.
///
/// Scarcity nodes carry `Finite` stock and run dry; Homestead nodes are
/// `Infinite` and always respawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stock {
    Finite(u32),
    Infinite,
}

impl Stock {
    /// Whether at least one unit can still be taken.
    #[must_use]
    pub fn available(self) -> bool {
        match self {
            Stock::Finite(n) => n > 0,
            Stock::Infinite => true,
        }
    }
}

/// A resource node on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub kind: ResourceKind,
    pub stock: Stock,
    pub position: Coord,
}

impl ResourceNode {
    /// Create a new node.
    #[must_use]
    pub fn new(kind: ResourceKind, stock: Stock, position: Coord) -> Self {
        Self {
            kind,
            stock,
            position,
        }
    }

    /// Take one unit from the node.
    ///
    /// Returns false (and changes nothing) if the node is exhausted.
    pub fn take(&mut self) -> bool {
        match &mut self.stock {
            Stock::Infinite => true,
            Stock::Finite(0) => false,
            Stock::Finite(n) => {
                *n -= 1;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_available() {
        assert!(Stock::Infinite.available());
        assert!(Stock::Finite(1).available());
        assert!(!Stock::Finite(0).available());
    }

    #[test]
    fn test_take_depletes_finite_stock() {
        let mut node = ResourceNode::new(ResourceKind::Food, Stock::Finite(2), Coord::new(0, 0));

        assert!(node.take());
        assert!(node.take());
        assert_eq!(node.stock, Stock::Finite(0));

        // Exhausted node yields nothing and stays at zero.
        assert!(!node.take());
        assert_eq!(node.stock, Stock::Finite(0));
    }

    #[test]
    fn test_take_infinite_never_depletes() {
        let mut node = ResourceNode::new(ResourceKind::Wood, Stock::Infinite, Coord::new(3, 3));

        for _ in 0..100 {
            assert!(node.take());
        }
        assert_eq!(node.stock, Stock::Infinite);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", ResourceKind::Water), "water");
        assert_eq!(ResourceKind::ALL.len(), 3);
    }
}
