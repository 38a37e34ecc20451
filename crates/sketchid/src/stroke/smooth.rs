//! Windowed perpendicular-deviation simplification of a raw stroke.

use nalgebra::Vector2;

use crate::error::IdentifyError;

/// Smoothing configuration.
#[derive(Clone, Copy, Debug)]
pub struct SmoothCfg {
    /// Window length in points; each scan looks this far ahead.
    pub window: usize,
    /// Deviation threshold in pixels; multiplied by the caller's
    /// distance-per-pixel scale to get the threshold in domain units.
    pub deviation_pixels: f64,
}

impl Default for SmoothCfg {
    fn default() -> Self {
        Self {
            window: 5,
            deviation_pixels: 2.0,
        }
    }
}

/// Reduce `points` to its structural points in one left-to-right pass.
///
/// Each window spans from its start point to the point `window` ahead. If any
/// intermediate point strays further than the threshold from that chord, the
/// first such point becomes the next window start (the other intermediates are
/// dropped); otherwise the whole window collapses to its start and the scan
/// resumes at the last intermediate. The trailing remainder shorter than a
/// window contributes only the final input point.
pub fn smooth(
    points: &[Vector2<f64>],
    pixel_distance: f64,
    cfg: &SmoothCfg,
) -> Result<Vec<Vector2<f64>>, IdentifyError> {
    if points.len() < cfg.window + 1 {
        return Err(IdentifyError::InsufficientPoints {
            needed: cfg.window + 1,
            got: points.len(),
        });
    }
    let threshold = cfg.deviation_pixels * pixel_distance;
    let mut result = Vec::new();
    let mut begin = 0usize;
    while begin + cfg.window < points.len() {
        let end = begin + cfg.window;
        let begin_point = points[begin];
        result.push(begin_point);

        let chord = points[end] - begin_point;
        let chord_len = chord.norm();
        let mut deviated = None;
        for (i, p) in points.iter().enumerate().take(end).skip(begin + 1) {
            let v = *p - begin_point;
            let proj = chord.dot(&v) / chord_len;
            // Perpendicular distance via the projection; a degenerate chord
            // yields NaN which max() folds back to zero.
            let dist = (v.norm_squared() - proj * proj).max(0.0).sqrt();
            if dist > threshold {
                deviated = Some(i);
                break;
            }
        }
        begin = match deviated {
            Some(i) => i,
            None => end - 1,
        };
    }
    result.push(points[points.len() - 1]);
    Ok(result)
}
