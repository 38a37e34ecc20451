//! Straight-vs-curve decision from sampled local slopes.

use nalgebra::Vector2;

use crate::error::IdentifyError;
use crate::geom::chord_slope;

use super::types::{Segment, ShapeKind};

/// Classifier configuration. `slope_tol` is shared with the merge pass in
/// `shape_graph`: both answer "do these slopes describe the same line".
#[derive(Clone, Copy, Debug)]
pub struct ClassifyCfg {
    pub slope_tol: f64,
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self { slope_tol: 1.0 }
    }
}

const SAMPLES: usize = 5;

/// Decide straight vs curve for `segment`, returning it with `kind` set.
pub fn classify(segment: Segment, cfg: &ClassifyCfg) -> Result<Segment, IdentifyError> {
    let kind = decide(&segment.points, cfg)?;
    Ok(Segment {
        kind: Some(kind),
        ..segment
    })
}

/// Sample five interior points at even intervals (the endpoints may be
/// imprecise after smoothing), take the four consecutive chord slopes, and
/// compare the min/max absolute slopes: a small spread in either the raw
/// slopes or their reciprocals means straight. The reciprocal leg keeps
/// near-vertical strokes from always reading as curves.
fn decide(points: &[Vector2<f64>], cfg: &ClassifyCfg) -> Result<ShapeKind, IdentifyError> {
    let total = points.len();
    if total < 2 {
        return Err(IdentifyError::InsufficientPoints {
            needed: 2,
            got: total,
        });
    }
    let interval = (total - 2) / (SAMPLES - 1);
    let mut min_abs = f64::INFINITY;
    let mut max_abs = 0.0f64;
    let mut prev: Option<Vector2<f64>> = None;
    for i in 0..SAMPLES {
        let idx = (1 + i * interval).min(total - 2);
        let p = points[idx];
        if let Some(q) = prev {
            let s = chord_slope(q, p).abs();
            min_abs = min_abs.min(s);
            max_abs = max_abs.max(s);
        }
        prev = Some(p);
    }
    let straight =
        max_abs - min_abs < cfg.slope_tol || 1.0 / min_abs - 1.0 / max_abs < cfg.slope_tol;
    Ok(if straight {
        ShapeKind::Straight
    } else {
        ShapeKind::Curve
    })
}
