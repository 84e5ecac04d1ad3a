//! CLI command implementations.
//!
//! - `families` - List every symbol family
//! - `count` - Print the point count for an input document
//! - `generate` - Generate points as JSON or an SVG preview
//! - `harness` - Randomised count/generate consistency sweep

pub mod common;
pub mod count;
pub mod families;
pub mod generate;
pub mod harness;
pub mod svg;

pub use common::OutputFormat;
pub use count::cmd_count;
pub use families::cmd_families;
pub use generate::cmd_generate;
pub use harness::cmd_harness;
