//! Tolerance configuration and the axis-aligned envelope.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
///
/// `eps_point` is the point-coincidence tolerance in domain units; it also
/// sizes the grid cells of the point table in `shape_graph`. `eps_det` is the
/// determinant cutoff below which two chord directions count as parallel.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_point: f64,
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_point: 1e-4,
            eps_det: 1e-12,
        }
    }
}

/// Axis-aligned bounding box of a point set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Envelope {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Envelope {
    /// Envelope of `points`; all-zero when the set is empty.
    pub fn from_points(points: &[Vector2<f64>]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let mut env = Self {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
        };
        for p in &points[1..] {
            env.x_min = env.x_min.min(p.x);
            env.y_min = env.y_min.min(p.y);
            env.x_max = env.x_max.max(p.x);
            env.y_max = env.y_max.max(p.y);
        }
        env
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn longer_side(&self) -> f64 {
        self.width().max(self.height())
    }

    #[inline]
    pub fn shorter_side(&self) -> f64 {
        self.width().min(self.height())
    }
}
