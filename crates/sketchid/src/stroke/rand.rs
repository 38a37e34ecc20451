//! Deterministic synthetic sketch strokes (jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, reproducible sampler for noisy stroke traces used by
//!   benches and property tests: oversampled lines with perpendicular jitter,
//!   polygon outlines drawn edge by edge, and circular arcs.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Stroke sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct JitterCfg {
    /// Sample count per stroke, endpoints included.
    pub points_per_stroke: usize,
    /// Uniform perpendicular jitter amplitude applied to interior points;
    /// endpoints stay exact.
    pub jitter: f64,
}

impl Default for JitterCfg {
    fn default() -> Self {
        Self {
            points_per_stroke: 24,
            jitter: 0.25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Oversampled stroke from `from` to `to` with perpendicular jitter on the
/// interior points.
pub fn draw_line_stroke(
    from: Vector2<f64>,
    to: Vector2<f64>,
    cfg: JitterCfg,
    tok: ReplayToken,
) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.points_per_stroke.max(2);
    let dir = to - from;
    let normal = perpendicular_unit(dir);
    (0..n)
        .map(|k| {
            let t = k as f64 / (n - 1) as f64;
            let base = from + dir * t;
            if k == 0 || k == n - 1 {
                base
            } else {
                let u = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.jitter;
                base + normal * u
            }
        })
        .collect()
}

/// One jittered stroke per polygon edge, corners exact, in drawing order.
pub fn draw_polygon_strokes(
    corners: &[Vector2<f64>],
    cfg: JitterCfg,
    tok: ReplayToken,
) -> Vec<Vec<Vector2<f64>>> {
    (0..corners.len())
        .map(|k| {
            let from = corners[k];
            let to = corners[(k + 1) % corners.len()];
            let edge_tok = ReplayToken {
                seed: tok.seed,
                index: tok.index.wrapping_add(k as u64 + 1),
            };
            draw_line_stroke(from, to, cfg, edge_tok)
        })
        .collect()
}

/// Oversampled circular arc with radial jitter on the interior points.
/// Angles are in degrees, counterclockwise from the positive x axis.
pub fn draw_arc_stroke(
    center: Vector2<f64>,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    cfg: JitterCfg,
    tok: ReplayToken,
) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.points_per_stroke.max(2);
    (0..n)
        .map(|k| {
            let t = k as f64 / (n - 1) as f64;
            let theta = (start_deg + (end_deg - start_deg) * t).to_radians();
            let r = if k == 0 || k == n - 1 {
                radius
            } else {
                radius + (rng.gen::<f64>() * 2.0 - 1.0) * cfg.jitter
            };
            center + Vector2::new(theta.cos(), theta.sin()) * r
        })
        .collect()
}

#[inline]
fn perpendicular_unit(dir: Vector2<f64>) -> Vector2<f64> {
    let norm = dir.norm();
    if norm <= f64::EPSILON {
        return Vector2::new(0.0, 0.0);
    }
    Vector2::new(-dir.y, dir.x) / norm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = JitterCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_line_stroke(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0), cfg, tok);
        let b = draw_line_stroke(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0), cfg, tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), cfg.points_per_stroke);
        assert_eq!(a[0], Vector2::new(0.0, 0.0));
        assert_eq!(a[a.len() - 1], Vector2::new(10.0, 0.0));
    }

    #[test]
    fn jitter_stays_bounded() {
        let cfg = JitterCfg {
            points_per_stroke: 50,
            jitter: 0.3,
        };
        let tok = ReplayToken { seed: 1, index: 9 };
        let stroke = draw_line_stroke(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0), cfg, tok);
        for p in &stroke {
            assert!(p.y.abs() <= 0.3 + 1e-12);
        }
    }

    #[test]
    fn polygon_strokes_share_corners() {
        let corners = [
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ];
        let strokes = draw_polygon_strokes(&corners, JitterCfg::default(), ReplayToken {
            seed: 3,
            index: 0,
        });
        assert_eq!(strokes.len(), 4);
        for (k, stroke) in strokes.iter().enumerate() {
            assert_eq!(stroke[0], corners[k]);
            assert_eq!(stroke[stroke.len() - 1], corners[(k + 1) % 4]);
        }
    }
}
