//! Pairwise intersection re-splitting across all extended segments.
//!
//! Purpose
//! - After extension, every stroke's segments are tested against every other
//!   stroke's; wherever one polyline truly crosses another, the crossed
//!   segment is split at the intersection point. Fragments re-enter the work
//!   queue until no further splits occur, then zero-length artifacts and pure
//!   extension overshoot are discarded.
//!
//! Why this design
//! - Interrupters stay fixed at the original extended set: a fragment is a
//!   geometric subset of its parent, so testing fragments against the
//!   originals finds the same crossings without quadratic blowup over
//!   fragments. Fragments carry their parent's source index, so a segment is
//!   never tested against itself or its own siblings.

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::geom::{points_coincide, segment_intersect, GeomCfg};
use crate::stroke::Segment;

/// Split every segment at its true crossings with the others, to a fixed
/// point, and filter degenerate and overshoot fragments. Deterministic: scan
/// order follows input order throughout.
pub fn split_at_intersections(segments: Vec<Segment>, cfg: &GeomCfg) -> Vec<Segment> {
    let interrupters = segments.clone();
    let mut work: VecDeque<(usize, Segment)> = segments.into_iter().enumerate().collect();
    let mut result = Vec::new();

    while let Some((src, seg)) = work.pop_front() {
        match first_crossing(&seg, src, &interrupters, cfg) {
            Some(hit) => {
                let (head, tail) = split_segment(&seg, &hit);
                work.push_back((src, head));
                work.push_back((src, tail));
            }
            None => result.push(seg),
        }
    }

    result.retain(|s| !is_degenerate(s, cfg) && !is_overshoot(s, cfg));
    result
}

struct Crossing {
    /// Index of the consecutive point pair of the target that was crossed.
    pair: usize,
    at: Vector2<f64>,
}

/// First crossing of `seg` with any interrupter, walking the target's point
/// pairs in order against each interrupter's. A hit at the target's own
/// current endpoints does not count, which is also what makes the fixed-point
/// iteration terminate.
fn first_crossing(
    seg: &Segment,
    src: usize,
    interrupters: &[Segment],
    cfg: &GeomCfg,
) -> Option<Crossing> {
    for (j, other) in interrupters.iter().enumerate() {
        if j == src {
            continue;
        }
        for (pair, w1) in seg.points.windows(2).enumerate() {
            for w2 in other.points.windows(2) {
                let Some(at) = segment_intersect(w1[0], w1[1], w2[0], w2[1], cfg) else {
                    continue;
                };
                if points_coincide(at, seg.begin, cfg.eps_point)
                    || points_coincide(at, seg.end, cfg.eps_point)
                {
                    continue;
                }
                return Some(Crossing { pair, at });
            }
        }
    }
    None
}

/// Split at the crossing; both fragments share the intersection point and
/// inherit the parent's pre-extension bounds unchanged. Fragments are
/// unclassified.
fn split_segment(seg: &Segment, crossing: &Crossing) -> (Segment, Segment) {
    let mut head = seg.points[..=crossing.pair].to_vec();
    head.push(crossing.at);
    let mut tail = vec![crossing.at];
    tail.extend_from_slice(&seg.points[crossing.pair + 1..]);
    (
        Segment {
            begin: seg.begin,
            end: crossing.at,
            old_begin: seg.old_begin,
            old_end: seg.old_end,
            points: head,
            kind: None,
        },
        Segment {
            begin: crossing.at,
            end: seg.end,
            old_begin: seg.old_begin,
            old_end: seg.old_end,
            points: tail,
            kind: None,
        },
    )
}

/// Zero-length two-point artifact.
fn is_degenerate(seg: &Segment, cfg: &GeomCfg) -> bool {
    seg.points.len() <= 2 && points_coincide(seg.begin, seg.end, cfg.eps_point)
}

/// A fragment lying entirely beyond the pre-extension span on either side is
/// extension overshoot, not stroke. Both endpoints are projected onto the
/// old chord; past the far end or before the near end means gone. The
/// boundary gets `eps_point` of positional slack: intersections that land on
/// an old endpoint arrive with float error on either side of it.
fn is_overshoot(seg: &Segment, cfg: &GeomCfg) -> bool {
    let chord = seg.old_end - seg.old_begin;
    let len2 = chord.norm_squared();
    if len2 <= cfg.eps_point * cfg.eps_point {
        return false;
    }
    let slack = cfg.eps_point / len2.sqrt();
    let t0 = chord.dot(&(seg.begin - seg.old_begin)) / len2;
    let t1 = chord.dot(&(seg.end - seg.old_begin)) / len2;
    (t0 >= 1.0 - slack && t1 >= 1.0 - slack) || (t0 <= slack && t1 <= slack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Envelope;
    use crate::stroke::{extend, ExtendCfg, ShapeKind};

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    fn straight(points: Vec<Vector2<f64>>) -> Segment {
        Segment {
            kind: Some(ShapeKind::Straight),
            ..Segment::from_points(points)
        }
    }

    #[test]
    fn crossing_strokes_split_once_each() {
        let cfg = GeomCfg::default();
        let env = Envelope {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 10.0,
            y_max: 10.0,
        };
        let ecfg = ExtendCfg::default();
        let a = extend(straight(vec![v(0.0, 0.0), v(10.0, 10.0)]), &env, &ecfg, &cfg).unwrap();
        let b = extend(straight(vec![v(0.0, 10.0), v(10.0, 0.0)]), &env, &ecfg, &cfg).unwrap();

        let result = split_at_intersections(vec![a, b], &cfg);
        // Each diagonal split at the center; no fragment is pure overshoot.
        assert_eq!(result.len(), 4);
        for seg in &result {
            assert!(
                points_coincide(seg.begin, v(5.0, 5.0), cfg.eps_point)
                    || points_coincide(seg.end, v(5.0, 5.0), cfg.eps_point)
            );
        }
    }

    #[test]
    fn overshoot_fragments_are_dropped() {
        let cfg = GeomCfg::default();
        // Horizontal chord extended past both ends, crossed by a vertical
        // chord exactly at its old end.
        let mut a = straight(vec![v(-1.0, 0.0), v(11.0, 0.0)]);
        a.old_begin = v(0.0, 0.0);
        a.old_end = v(10.0, 0.0);
        let b = straight(vec![v(10.0, -5.0), v(10.0, 5.0)]);

        let result = split_at_intersections(vec![a, b], &cfg);
        // The piece of `a` beyond x=10 lies past its old span and is gone;
        // the rest survives, as do the two halves of `b`.
        assert_eq!(result.len(), 3);
        assert!(result
            .iter()
            .all(|s| !(s.begin.x >= 10.0 - cfg.eps_point && s.end.x > 10.0)));
    }

    #[test]
    fn zero_length_fragments_are_dropped() {
        let cfg = GeomCfg::default();
        let tiny = straight(vec![v(0.0, 0.0), v(0.00005, 0.0)]);
        assert!(is_degenerate(&tiny, &cfg));
        let fine = straight(vec![v(0.0, 0.0), v(1.0, 0.0)]);
        assert!(!is_degenerate(&fine, &cfg));
    }

    #[test]
    fn non_crossing_segments_pass_through() {
        let cfg = GeomCfg::default();
        let a = straight(vec![v(0.0, 0.0), v(10.0, 0.0)]);
        let b = straight(vec![v(0.0, 5.0), v(10.0, 5.0)]);
        let result = split_at_intersections(vec![a, b], &cfg);
        assert_eq!(result.len(), 2);
        // Classification survives on unsplit segments.
        assert!(result.iter().all(|s| s.kind == Some(ShapeKind::Straight)));
    }

    #[test]
    fn curve_polyline_is_split_where_a_chord_crosses_it() {
        let cfg = GeomCfg::default();
        // A shallow vee crossed by a vertical chord through its left arm.
        let vee = Segment {
            kind: Some(ShapeKind::Curve),
            ..Segment::from_points(vec![v(0.0, 2.0), v(4.0, 0.0), v(8.0, 2.0)])
        };
        let post = straight(vec![v(2.0, -1.0), v(2.0, 4.0)]);
        let result = split_at_intersections(vec![vee, post], &cfg);
        // Vee splits at (2,1); the post splits there too.
        assert_eq!(result.len(), 4);
        assert!(result
            .iter()
            .filter(|s| points_coincide(s.begin, v(2.0, 1.0), cfg.eps_point)
                || points_coincide(s.end, v(2.0, 1.0), cfg.eps_point))
            .count()
            == 4);
        // The vee's right arm keeps its interior vertex.
        assert!(result.iter().any(|s| s.points.len() == 3));
    }
}
