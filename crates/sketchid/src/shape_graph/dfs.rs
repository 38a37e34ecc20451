//! Budgeted depth-first cycle search with rotation deduplication.

use tracing::warn;

use crate::error::IdentifyError;

use super::types::{NodeId, SearchCfg, SegId, ShapeGraph};

/// First-found closed cycle from every candidate start node, deduplicated by
/// segment set. Starts are scanned in node order and edges in registration
/// order, so the result is deterministic. A start whose search exhausts the
/// budget is skipped.
pub fn find_cycles(graph: &ShapeGraph, cfg: &SearchCfg) -> Vec<(NodeId, Vec<SegId>)> {
    let mut results: Vec<(NodeId, Vec<SegId>)> = Vec::new();
    for start in 0..graph.nodes.len() {
        match first_cycle_from(graph, NodeId(start), cfg) {
            Ok(Some(path)) => {
                if !is_duplicate(&results, &path) {
                    results.push((NodeId(start), path));
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!(start, error = %err, "cycle search failed, skipping start");
            }
        }
    }
    results
}

struct Frame {
    node: NodeId,
    next_edge: usize,
}

/// Explicit-stack DFS over unused segments; a segment may not repeat within
/// one path. Backtracking unmarks the segment that led into the abandoned
/// node. Returns the first path that re-reaches `start` with >= 1 edge.
fn first_cycle_from(
    graph: &ShapeGraph,
    start: NodeId,
    cfg: &SearchCfg,
) -> Result<Option<Vec<SegId>>, IdentifyError> {
    let mut used = vec![false; graph.segments.len()];
    let mut path: Vec<SegId> = Vec::new();
    let mut stack = vec![Frame {
        node: start,
        next_edge: 0,
    }];
    let mut steps = 0usize;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let Some(&sid) = graph.adj[node.0].get(frame.next_edge) else {
            stack.pop();
            if let Some(sid) = path.pop() {
                used[sid.0] = false;
            }
            continue;
        };
        frame.next_edge += 1;
        if used[sid.0] {
            continue;
        }
        steps += 1;
        if steps > cfg.max_steps {
            return Err(IdentifyError::AmbiguousCycle);
        }
        let next = graph.other_node(sid, node);
        used[sid.0] = true;
        path.push(sid);
        if next == start {
            return Ok(Some(path));
        }
        stack.push(Frame {
            node: next,
            next_edge: 0,
        });
    }
    Ok(None)
}

/// A cycle already recorded with the same segment set (any rotation) is a
/// duplicate.
fn is_duplicate(results: &[(NodeId, Vec<SegId>)], path: &[SegId]) -> bool {
    let key = sorted_ids(path);
    results.iter().any(|(_, p)| sorted_ids(p) == key)
}

fn sorted_ids(path: &[SegId]) -> Vec<usize> {
    let mut ids: Vec<usize> = path.iter().map(|s| s.0).collect();
    ids.sort_unstable();
    ids
}
