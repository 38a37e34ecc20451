//! Corner detection: cut a smoothed stroke into segments at sharp turns.

use nalgebra::Vector2;

use crate::geom::angle_deg;

use super::types::Segment;

/// Splitter configuration.
#[derive(Clone, Copy, Debug)]
pub struct SplitCfg {
    /// Interior angles below this count as a corner.
    pub corner_angle_deg: f64,
    /// A cut only closes a segment carrying more than this many points;
    /// shorter runs fold into the next segment.
    pub min_run: usize,
    /// First/last segments with at most this many points are dropped as
    /// stylus hooks. Zero disables hook removal.
    pub hook_max_points: usize,
    /// Hook removal requires the smoothed stroke to exceed this many points...
    pub hook_min_total: usize,
    /// ...and at least one segment to exceed this many points.
    pub hook_min_longest: usize,
}

impl Default for SplitCfg {
    fn default() -> Self {
        Self {
            corner_angle_deg: 120.0,
            min_run: 4,
            hook_max_points: 4,
            hook_min_total: 15,
            hook_min_longest: 10,
        }
    }
}

/// Cut `points` at corners into an ordered list of segments covering the
/// whole sequence. Adjacent segments share their boundary point. A sequence
/// without interior breaks yields exactly one segment.
pub fn split(points: &[Vector2<f64>], cfg: &SplitCfg) -> Vec<Segment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut result = Vec::new();
    let mut begin = 0usize;
    for i in 1..n - 1 {
        let mut corner = angle_deg(points[i - 1], points[i], points[i + 1]) < cfg.corner_angle_deg;
        if !corner && i + 2 < n {
            // The smoother may have eaten the true corner vertex; looking one
            // point further recovers those. NaN angles are never corners.
            corner = angle_deg(points[i - 1], points[i], points[i + 2]) < cfg.corner_angle_deg;
        }
        if corner && i + 1 - begin > cfg.min_run {
            result.push(Segment::from_points(points[begin..=i].to_vec()));
            begin = i;
        }
    }
    result.push(Segment::from_points(points[begin..].to_vec()));

    trim_hooks(&mut result, n, cfg);
    result
}

/// Drop spuriously short first/last segments: on a long stroke with at least
/// one substantial segment, a tiny end segment is a stylus artifact, not a
/// stroke.
fn trim_hooks(result: &mut Vec<Segment>, total_points: usize, cfg: &SplitCfg) {
    if cfg.hook_max_points == 0
        || result.len() < 2
        || total_points <= cfg.hook_min_total
        || !result
            .iter()
            .any(|s| s.points.len() > cfg.hook_min_longest)
    {
        return;
    }
    if result
        .first()
        .is_some_and(|s| s.points.len() <= cfg.hook_max_points)
    {
        result.remove(0);
    }
    if result
        .last()
        .is_some_and(|s| s.points.len() <= cfg.hook_max_points)
    {
        result.pop();
    }
}
