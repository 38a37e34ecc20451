//! Recoverable failure kinds surfaced by individual pipeline stages.
//!
//! None of these is fatal: the pipeline driver logs the condition, skips the
//! affected stroke, segment, or search start, and keeps going. A malformed
//! sketch yields fewer or no detected shapes, never a crash.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyError {
    /// A stroke carries fewer points than a stage needs.
    #[error("stroke has {got} points, stage needs at least {needed}")]
    InsufficientPoints { needed: usize, got: usize },

    /// A zero-length direction vector showed up during angle or extension
    /// computation; propagating it would turn into silent NaN geometry.
    #[error("zero-length direction vector")]
    DegenerateVector,

    /// The cycle search budget ran out before a path closed.
    #[error("cycle search budget exhausted")]
    AmbiguousCycle,
}
