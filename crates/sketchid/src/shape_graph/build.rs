//! Graph construction: tolerance-aware point resolution and adjacency.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::geom::{points_coincide, GeomCfg};
use crate::stroke::Segment;

use super::types::{NodeId, SegId, ShapeGraph};

/// Grid-bucketed point table at the coincidence tolerance scale.
///
/// Cells are `eps` wide, so any point within tolerance of a stored point lies
/// in the same or a neighboring cell; `find` scans the 3x3 neighborhood.
/// This keeps lookups correct for tolerance-equal points straddling a cell
/// boundary, which a plain coordinate hash gets wrong.
pub struct PointTable {
    eps: f64,
    buckets: HashMap<(i64, i64), Vec<usize>>,
    points: Vec<Vector2<f64>>,
}

impl PointTable {
    pub fn new(eps: f64) -> Self {
        Self {
            eps: eps.max(f64::MIN_POSITIVE),
            buckets: HashMap::new(),
            points: Vec::new(),
        }
    }

    #[inline]
    fn key(&self, p: Vector2<f64>) -> (i64, i64) {
        ((p.x / self.eps).floor() as i64, (p.y / self.eps).floor() as i64)
    }

    /// Node holding a point within tolerance of `p`, if any.
    pub fn find(&self, p: Vector2<f64>) -> Option<NodeId> {
        let (kx, ky) = self.key(p);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(ids) = self.buckets.get(&(kx + dx, ky + dy)) else {
                    continue;
                };
                for &i in ids {
                    if points_coincide(self.points[i], p, self.eps) {
                        return Some(NodeId(i));
                    }
                }
            }
        }
        None
    }

    /// Find the node for `p`, inserting a new one if none is within
    /// tolerance. The first-seen coordinate stays the representative.
    pub fn resolve(&mut self, p: Vector2<f64>) -> NodeId {
        if let Some(id) = self.find(p) {
            return id;
        }
        let id = NodeId(self.points.len());
        let key = self.key(p);
        self.points.push(p);
        self.buckets.entry(key).or_default().push(id.0);
        id
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn into_points(self) -> Vec<Vector2<f64>> {
        self.points
    }
}

/// Register every segment under both of its endpoints.
pub fn build_graph(segments: &[Segment], cfg: &GeomCfg) -> ShapeGraph {
    let mut table = PointTable::new(cfg.eps_point);
    let mut endpoints = Vec::with_capacity(segments.len());
    for seg in segments {
        let b = table.resolve(seg.begin);
        let e = table.resolve(seg.end);
        endpoints.push((b, e));
    }
    let mut adj: Vec<Vec<SegId>> = vec![Vec::new(); table.len()];
    for (i, &(b, e)) in endpoints.iter().enumerate() {
        adj[b.0].push(SegId(i));
        if e != b {
            adj[e.0].push(SegId(i));
        }
    }
    ShapeGraph {
        nodes: table.into_points(),
        segments: segments.to_vec(),
        endpoints,
        adj,
    }
}
