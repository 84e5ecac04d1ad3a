//! # tacline
//!
//! Point-count and point-generation engine for tactical line graphics.
//!
//! Every graphic is drawn in two phases that must agree exactly:
//! [`count_points`] sizes the output, [`generate_points`] fills it with
//! styled [`Point`]s for a downstream path builder.
//!
//! ## Rust Lesson #7: Modules
//!
//! Each `pub mod` below maps to a file (`arc.rs`) or a directory with a
//! `mod.rs` (`glyphs/`). Construction modules stay public so the CLI and
//! benchmarks can reach the primitives; the common entry points are
//! re-exported here with `pub use`.

pub mod arc;
pub mod channel;
pub mod clip;
pub mod config;
pub mod count;
pub mod error;
pub mod family;
pub mod flot;
pub mod generate;
pub mod geodesy;
pub mod geometry;
pub mod glyphs;
pub mod hull;
pub mod motifs;
pub mod registry;
pub mod scale;

// Re-export common types at crate root for convenience.
pub use config::{DrawContext, RenderConfig};
pub use count::{count_points, try_count};
pub use error::{GeometryError, Result};
pub use family::{FamilyClass, SymbolFamily};
pub use generate::{generate_points, is_channel_family, try_generate};
pub use geodesy::{GeoConverter, MercatorViewport};
pub use geometry::{ClipRect, PenStyle, Point};
pub use hull::{convex_hull, min_bounding_rect};
pub use scale::ScaleContext;
