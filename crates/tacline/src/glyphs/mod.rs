//! Fixed-shape glyph constructions.
//!
//! Each module exposes a `count`/`generate` pair (or several, for modules
//! covering more than one layout) with the `fn(&DrawContext) -> Result<_>`
//! signature the registry stores. Shared pieces such as arrowheads and
//! ticks live in [`parts`].

pub mod parts;

pub mod arcs;
pub mod arrows;
pub mod clipped;
pub mod linear;
pub mod lines;
pub mod tasks;

pub use parts::Head;
