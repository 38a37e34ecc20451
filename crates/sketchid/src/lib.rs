//! Freehand-sketch geometry pipeline.
//!
//! Turns noisy, oversampled stroke traces into a small set of geometric
//! primitives: straight segments, curved segments, and closed polygons
//! assembled from them. Stages, leaf to root:
//!
//! - `geom`: tolerances, envelopes, angles, chord intersection.
//! - `stroke`: per-stroke smoothing, corner splitting, straight/curve
//!   classification, and directional extension.
//! - `intersect`: pairwise re-splitting of extended segments at crossings.
//! - `shape_graph`: point↔segment adjacency, cycle search, collinear merge.
//! - `pipeline`: the end-to-end driver tying the stages together.
//!
//! All thresholds travel in explicit config values (no ambient state); every
//! stage returns new values instead of mutating shared ones.

pub mod api;
pub mod error;
pub mod geom;
pub mod intersect;
pub mod pipeline;
pub mod shape_graph;
pub mod stroke;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::IdentifyError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::IdentifyError;
    pub use crate::geom::{Envelope, GeomCfg};
    pub use crate::pipeline::{identify, identify_with_passes, CyclePass, Identified, IdentifyCfg};
    pub use crate::shape_graph::{ClosedShape, SearchCfg};
    pub use crate::stroke::{Segment, ShapeKind};
    pub use nalgebra::Vector2 as Vec2;
}
