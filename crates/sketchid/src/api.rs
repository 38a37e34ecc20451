//! Curated re-exports of the pipeline surface.
//!
//! Prefer these for clarity and consistency across callers; module paths
//! remain available for anything not listed here.

// Geometry primitives and tolerances
pub use crate::geom::{
    angle_deg, chord_slope, points_coincide, segment_intersect, slopes_agree, Envelope, GeomCfg,
};
// Per-stroke stages
pub use crate::stroke::{
    classify, extend, smooth, split, ClassifyCfg, EnvelopeBasis, ExtendCfg, Segment, ShapeKind,
    SmoothCfg, SplitCfg,
};
// Synthetic sketch sampling
pub use crate::stroke::rand::{
    draw_arc_stroke, draw_line_stroke, draw_polygon_strokes, JitterCfg, ReplayToken,
};
// Intersection re-splitting
pub use crate::intersect::split_at_intersections;
// Shape assembly
pub use crate::shape_graph::{
    build_graph, build_shapes, find_cycles, merge_collinear, ClosedShape, NodeId, PointTable,
    SearchCfg, SegId, ShapeGraph,
};
// End-to-end pipeline
pub use crate::pipeline::{identify, identify_with_passes, CyclePass, Identified, IdentifyCfg};
pub use crate::error::IdentifyError;
