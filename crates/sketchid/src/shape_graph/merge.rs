//! Collinear merge pass over a closed cycle.

use nalgebra::Vector2;

use crate::geom::{points_coincide, slopes_agree, GeomCfg};
use crate::stroke::{Segment, ShapeKind};

/// Walk the cycle in order and collapse adjacent non-curve segments whose
/// chord slopes agree into single straight edges spanning their non-shared
/// endpoints. A curve is never merged and always starts a fresh run;
/// unclassified intersection fragments merge like straights.
pub fn merge_collinear(cycle: &[Segment], slope_tol: f64, geom: &GeomCfg) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut iter = cycle.iter();
    let Some(first) = iter.next() else {
        return out;
    };
    let mut run = first.clone();
    for next in iter {
        if run.is_curve() || next.is_curve() || !slopes_agree(run.slope(), next.slope(), slope_tol)
        {
            out.push(run);
            run = next.clone();
            continue;
        }
        run = merge_pair(&run, next, geom);
    }
    out.push(run);
    out
}

/// One straight edge spanning the two non-shared endpoints. The cycle
/// guarantees the pair is adjacent, so exactly one endpoint of each is
/// shared.
fn merge_pair(a: &Segment, b: &Segment, geom: &GeomCfg) -> Segment {
    let begin = outer_endpoint(a, b, geom.eps_point);
    let end = outer_endpoint(b, a, geom.eps_point);
    Segment {
        begin,
        end,
        old_begin: begin,
        old_end: end,
        points: vec![begin, end],
        kind: Some(ShapeKind::Straight),
    }
}

/// The endpoint of `a` that is not shared with `b`.
fn outer_endpoint(a: &Segment, b: &Segment, eps: f64) -> Vector2<f64> {
    if points_coincide(a.begin, b.begin, eps) || points_coincide(a.begin, b.end, eps) {
        a.end
    } else {
        a.begin
    }
}
