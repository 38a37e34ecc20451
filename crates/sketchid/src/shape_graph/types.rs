//! Data types for the shape graph and cycle search.
//!
//! Kept small and explicit to make `build` and `dfs` easy to read.

use nalgebra::Vector2;

use crate::stroke::Segment;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegId(pub usize);

/// Point↔segment adjacency over the split segment set. Segments keep their
/// input order; nodes are representative endpoints in first-seen order.
#[derive(Clone, Debug)]
pub struct ShapeGraph {
    pub nodes: Vec<Vector2<f64>>,
    pub segments: Vec<Segment>,
    /// Resolved `(begin, end)` node per segment.
    pub endpoints: Vec<(NodeId, NodeId)>,
    /// Segment ids incident to each node.
    pub adj: Vec<Vec<SegId>>,
}

impl ShapeGraph {
    /// The node on the far side of `seg` as seen from `from`.
    #[inline]
    pub fn other_node(&self, seg: SegId, from: NodeId) -> NodeId {
        let (b, e) = self.endpoints[seg.0];
        if b == from {
            e
        } else {
            b
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Edge expansions allowed per start candidate before the search gives
    /// up on that start.
    pub max_steps: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

/// A closed run of segments chaining back to its anchor point, after the
/// collinear merge pass.
#[derive(Clone, Debug)]
pub struct ClosedShape {
    pub anchor: Vector2<f64>,
    pub segments: Vec<Segment>,
}
