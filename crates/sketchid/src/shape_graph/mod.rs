//! Closed-shape reconstruction over the split segment set.
//!
//! Purpose
//! - Register every segment under both endpoints in a tolerance-aware point
//!   table, search for the first closed cycle from each candidate start,
//!   collapse rotation duplicates, and merge adjacent near-collinear straight
//!   edges within each cycle.
//!
//! Why this design
//! - Endpoint identity is tolerance-based; hashing raw floats puts
//!   tolerance-equal points in different buckets near cell boundaries. The
//!   grid-bucketed `PointTable` scans neighboring cells on lookup, so equal
//!   points always resolve to one node.
//! - The search is an explicit-stack DFS with a step budget: backtracking
//!   recursion over a dense segment graph is combinatorial in the worst case,
//!   and a budget turns that into a skipped start instead of a hang.

mod build;
mod dfs;
mod merge;
mod types;

pub use build::{build_graph, PointTable};
pub use dfs::find_cycles;
pub use merge::merge_collinear;
pub use types::{ClosedShape, NodeId, SearchCfg, SegId, ShapeGraph};

use crate::geom::GeomCfg;
use crate::stroke::Segment;

/// Build the adjacency graph, find and deduplicate cycles, and merge
/// collinear runs: the full shape-builder stage.
pub fn build_shapes(
    segments: &[Segment],
    geom: &GeomCfg,
    search: &SearchCfg,
    slope_tol: f64,
) -> Vec<ClosedShape> {
    let graph = build_graph(segments, geom);
    find_cycles(&graph, search)
        .into_iter()
        .map(|(start, path)| {
            let cycle: Vec<Segment> = path
                .iter()
                .map(|sid| graph.segments[sid.0].clone())
                .collect();
            ClosedShape {
                anchor: graph.nodes[start.0],
                segments: merge_collinear(&cycle, slope_tol, geom),
            }
        })
        .collect()
}
