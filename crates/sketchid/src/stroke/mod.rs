//! Per-stroke stages: smoothing, corner splitting, classification, extension.
//!
//! Purpose
//! - Reduce an oversampled stylus trace to its structural points, cut it at
//!   sharp corners, decide straight vs curve per piece, and push endpoints
//!   outward so that near-miss corners become true intersections downstream.
//!
//! Why this design
//! - Each stage consumes the previous stage's full output and returns new
//!   values; segments are never shared mutable state. Pre-extension endpoints
//!   ride along on the extended value so the intersector can still tell
//!   overshoot from real stroke.

mod classify;
mod extend;
mod smooth;
mod split;
mod types;

pub mod rand;

pub use classify::{classify, ClassifyCfg};
pub use extend::{extend, EnvelopeBasis, ExtendCfg};
pub use smooth::{smooth, SmoothCfg};
pub use split::{split, SplitCfg};
pub use types::{Segment, ShapeKind};
