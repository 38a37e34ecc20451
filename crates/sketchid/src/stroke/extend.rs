//! Directional extension of classified segments.

use nalgebra::Vector2;

use crate::error::IdentifyError;
use crate::geom::{Envelope, GeomCfg};

use super::types::Segment;

/// Which envelope dimension sizes the extension length. Both policies occur
/// in the wild; the longer side is the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvelopeBasis {
    LongerSide,
    ShorterSide,
}

/// Extension configuration.
#[derive(Clone, Copy, Debug)]
pub struct ExtendCfg {
    /// Extension length as a fraction of the chosen envelope dimension.
    pub fraction: f64,
    pub basis: EnvelopeBasis,
}

impl Default for ExtendCfg {
    fn default() -> Self {
        Self {
            fraction: 0.1,
            basis: EnvelopeBasis::LongerSide,
        }
    }
}

/// Push the segment's endpoints outward by a fraction of the full point
/// cloud's envelope, so sketch undershoot still produces true intersections.
///
/// A straight segment (or any segment with <= 3 points) collapses to its two
/// pushed-out chord endpoints. A curve keeps its interior: each end is pushed
/// outward along the local end tangent and the new endpoint is inserted.
/// The pre-extension endpoints are preserved as `old_begin` / `old_end`.
pub fn extend(
    segment: Segment,
    cloud: &Envelope,
    cfg: &ExtendCfg,
    geom: &GeomCfg,
) -> Result<Segment, IdentifyError> {
    let side = match cfg.basis {
        EnvelopeBasis::LongerSide => cloud.longer_side(),
        EnvelopeBasis::ShorterSide => cloud.shorter_side(),
    };
    let length = side * cfg.fraction;

    if segment.is_curve() && segment.points.len() > 3 {
        let n = segment.points.len();
        let (new_begin, _) = push_out(segment.points[0], segment.points[1], length, geom)?;
        let (_, new_end) = push_out(segment.points[n - 2], segment.points[n - 1], length, geom)?;
        let mut points = segment.points;
        points.insert(0, new_begin);
        points.push(new_end);
        Ok(Segment {
            begin: new_begin,
            end: new_end,
            old_begin: segment.begin,
            old_end: segment.end,
            points,
            kind: segment.kind,
        })
    } else {
        let (new_begin, new_end) = push_out(segment.begin, segment.end, length, geom)?;
        Ok(Segment {
            begin: new_begin,
            end: new_end,
            old_begin: segment.begin,
            old_end: segment.end,
            points: vec![new_begin, new_end],
            kind: segment.kind,
        })
    }
}

/// Both ends of the chord `(b, e)` pushed outward along its unit vector.
fn push_out(
    b: Vector2<f64>,
    e: Vector2<f64>,
    length: f64,
    geom: &GeomCfg,
) -> Result<(Vector2<f64>, Vector2<f64>), IdentifyError> {
    let dir = e - b;
    let norm = dir.norm();
    if norm <= geom.eps_point {
        return Err(IdentifyError::DegenerateVector);
    }
    let u = dir / norm;
    Ok((b - u * length, e + u * length))
}
