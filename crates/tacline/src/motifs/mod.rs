//! Density-based motif generators.
//!
//! Each generator places a whole number of motifs per path segment at a
//! spacing the caller has already scaled. Every module exposes a count
//! function next to its generator; the two share the same per-segment
//! motif arithmetic.

pub mod util;

pub mod ditch;
pub mod fortl;
pub mod pipe;
pub mod reef;
pub mod squall;
pub mod strokes;

pub use ditch::DitchStyle;
pub use util::{motif_count, motif_count_min, segments, Segment};
