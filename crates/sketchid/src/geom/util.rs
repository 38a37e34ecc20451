//! Pure geometric helpers: angles, slopes, chord intersection.

use nalgebra::Vector2;

use super::types::GeomCfg;

/// Coordinate-wise tolerance equality; the pipeline's only notion of point
/// identity. Never wrapped in a float `Eq` impl.
#[inline]
pub fn points_coincide(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

/// Angle in degrees at `current`, between the vectors towards `before` and
/// `next`, in `[0, 180]`. NaN when either arm has zero length; callers must
/// not treat NaN as a corner.
pub fn angle_deg(before: Vector2<f64>, current: Vector2<f64>, next: Vector2<f64>) -> f64 {
    let u = before - current;
    let v = next - current;
    let cos = u.dot(&v) / (u.norm() * v.norm());
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Chord slope with an infinite sentinel for vertical chords. Both the
/// classifier and the merge pass compare slopes through `slopes_agree`, which
/// folds the sentinel back via reciprocals.
#[inline]
pub fn chord_slope(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    if a.x == b.x {
        f64::INFINITY
    } else {
        (a.y - b.y) / (a.x - b.x)
    }
}

/// Dual spread test on absolute slopes: near-horizontal pairs agree by raw
/// difference, near-vertical pairs by reciprocal difference. Slope is not
/// scale-symmetric near vertical, so neither test alone is unbiased.
pub fn slopes_agree(s1: f64, s2: f64, tol: f64) -> bool {
    let a = s1.abs();
    let b = s2.abs();
    (a - b).abs() < tol || (1.0 / a - 1.0 / b).abs() < tol
}

/// Intersection of the chords `(p1,p2)` and `(p3,p4)` via the 2x2 linear
/// system. None when the determinant is below `eps_det` (parallel/collinear;
/// no collinear-overlap detection) or when the solution falls outside either
/// chord's inclusive bounding box.
pub fn segment_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
    cfg: &GeomCfg,
) -> Option<Vector2<f64>> {
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if d.abs() <= cfg.eps_det {
        return None;
    }
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;
    let px = (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / d;
    let py = (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / d;
    if px < p1.x.min(p2.x) || px > p1.x.max(p2.x) || px < p3.x.min(p4.x) || px > p3.x.max(p4.x) {
        return None;
    }
    if py < p1.y.min(p2.y) || py > p1.y.max(p2.y) || py < p3.y.min(p4.y) || py > p3.y.max(p4.y) {
        return None;
    }
    Some(Vector2::new(px, py))
}
