//! Planar geometry primitives shared by every pipeline stage.
//!
//! Purpose
//! - One consistent epsilon story (`GeomCfg`) for point coincidence and
//!   parallel rejection, so corners, intersections, and graph lookups agree.
//! - Small pure helpers: envelopes, angles, chord slopes, chord intersection.
//!
//! Why this design
//! - Every stage downstream of the smoother reasons about the same two
//!   tolerances; scattering ad-hoc constants is how false corners and broken
//!   cycles happen.

mod types;
mod util;

pub use types::{Envelope, GeomCfg};
pub use util::{angle_deg, chord_slope, points_coincide, segment_intersect, slopes_agree};

#[cfg(test)]
mod tests;
