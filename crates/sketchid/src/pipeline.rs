//! End-to-end driver: strokes in, closed shapes out.
//!
//! Stage order is strict: every stroke is smoothed, split, classified, and
//! extended before the intersector sees the pooled segment set, and the shape
//! builder only runs on the fully split set. Recoverable stage errors skip
//! the affected stroke or segment and the run continues.

use nalgebra::Vector2;
use tracing::{debug, warn};

use crate::geom::{Envelope, GeomCfg};
use crate::intersect::split_at_intersections;
use crate::shape_graph::{build_shapes, ClosedShape, SearchCfg};
use crate::stroke::{
    classify, extend, smooth, split, ClassifyCfg, ExtendCfg, Segment, SmoothCfg, SplitCfg,
};

/// Bundled per-stage configuration with the reference defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentifyCfg {
    pub geom: GeomCfg,
    pub smooth: SmoothCfg,
    pub split: SplitCfg,
    pub classify: ClassifyCfg,
    pub extend: ExtendCfg,
    pub search: SearchCfg,
}

/// Pipeline output: every closed shape found, plus the full split segment
/// set for callers interested in open strokes too.
#[derive(Clone, Debug)]
pub struct Identified {
    pub shapes: Vec<ClosedShape>,
    pub segments: Vec<Segment>,
}

/// Post-processing hook over assembled closed shapes. Arrowhead and
/// small-shape matching plug in here; none ships with the pipeline.
pub trait CyclePass {
    fn apply(&self, shapes: Vec<ClosedShape>) -> Vec<ClosedShape>;
}

/// Run the full pipeline over `strokes`. `pixel_distance` is the real-world
/// distance per pixel and sizes the smoothing threshold.
pub fn identify(
    strokes: &[Vec<Vector2<f64>>],
    pixel_distance: f64,
    cfg: &IdentifyCfg,
) -> Identified {
    identify_with_passes(strokes, pixel_distance, cfg, &[])
}

/// `identify`, then apply caller-supplied passes over the closed shapes.
pub fn identify_with_passes(
    strokes: &[Vec<Vector2<f64>>],
    pixel_distance: f64,
    cfg: &IdentifyCfg,
    passes: &[&dyn CyclePass],
) -> Identified {
    // The extension length is sized by the envelope of the whole sketch, not
    // any single stroke.
    let cloud: Vec<Vector2<f64>> = strokes.iter().flatten().copied().collect();
    let envelope = Envelope::from_points(&cloud);

    let mut extended = Vec::new();
    for (idx, stroke) in strokes.iter().enumerate() {
        let smoothed = match smooth(stroke, pixel_distance, &cfg.smooth) {
            Ok(points) => points,
            Err(err) => {
                warn!(stroke = idx, error = %err, "skipping stroke");
                continue;
            }
        };
        debug!(
            stroke = idx,
            raw = stroke.len(),
            kept = smoothed.len(),
            "smoothed"
        );
        for segment in split(&smoothed, &cfg.split) {
            let classified = match classify(segment, &cfg.classify) {
                Ok(seg) => seg,
                Err(err) => {
                    warn!(stroke = idx, error = %err, "skipping segment");
                    continue;
                }
            };
            match extend(classified, &envelope, &cfg.extend, &cfg.geom) {
                Ok(seg) => extended.push(seg),
                Err(err) => warn!(stroke = idx, error = %err, "skipping segment"),
            }
        }
    }
    debug!(segments = extended.len(), "extended");

    let segments = split_at_intersections(extended, &cfg.geom);
    debug!(segments = segments.len(), "intersections resolved");

    let mut shapes = build_shapes(&segments, &cfg.geom, &cfg.search, cfg.classify.slope_tol);
    debug!(shapes = shapes.len(), "closed shapes assembled");
    for pass in passes {
        shapes = pass.apply(shapes);
    }
    Identified { shapes, segments }
}
