//! Per-render configuration and the borrowed view constructions work on.
//!
//! # Example
//! ```ignore
//! use tacline::{RenderConfig, SymbolFamily, ClipRect, count_points};
//!
//! let config = RenderConfig::new(SymbolFamily::Flot)
//!     .with_thickness(2.0)
//!     .with_clip(ClipRect::new(0.0, 0.0, 800.0, 600.0));
//! let n = count_points(&config, &anchors);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::family::SymbolFamily;
use crate::geodesy::GeoConverter;
use crate::geometry::{ClipRect, Point};
use crate::scale::{ScaleContext, BASE_DPI};

/// What to draw and how thick.
///
/// Cheap to clone; the geographic converter is shared.
#[derive(Clone)]
pub struct RenderConfig {
    /// Symbol family selecting the construction
    pub family: SymbolFamily,
    /// Line weight in pixels
    pub line_thickness: f64,
    /// Device density, 96 is nominal
    pub dpi: f64,
    /// Viewport, consulted only by clip-dependent families
    pub clip: Option<ClipRect>,
    /// Pixel <-> geographic converter for earth-accurate arcs
    pub geo: Option<Arc<dyn GeoConverter>>,
}

impl RenderConfig {
    pub fn new(family: SymbolFamily) -> Self {
        Self {
            family,
            line_thickness: 1.0,
            dpi: BASE_DPI,
            clip: None,
            geo: None,
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness;
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_clip(mut self, clip: ClipRect) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn with_geo(mut self, geo: Arc<dyn GeoConverter>) -> Self {
        self.geo = Some(geo);
        self
    }

    pub fn scale(&self) -> ScaleContext {
        ScaleContext::new(self.line_thickness, self.dpi)
    }

    /// Borrow this configuration together with an anchor polyline.
    pub fn context<'a>(&'a self, anchors: &'a [Point]) -> DrawContext<'a> {
        DrawContext {
            family: self.family,
            anchors,
            scale: self.scale(),
            clip: self.clip,
            geo: self.geo.as_deref(),
        }
    }
}

// dyn GeoConverter has no Debug bound, so spell it out.
impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("family", &self.family)
            .field("line_thickness", &self.line_thickness)
            .field("dpi", &self.dpi)
            .field("clip", &self.clip)
            .field("geo", &self.geo.as_ref().map(|_| "GeoConverter"))
            .finish()
    }
}

/// Everything a construction reads: immutable, borrowed for one call.
#[derive(Clone, Copy)]
pub struct DrawContext<'a> {
    pub family: SymbolFamily,
    pub anchors: &'a [Point],
    pub scale: ScaleContext,
    pub clip: Option<ClipRect>,
    pub geo: Option<&'a dyn GeoConverter>,
}

impl<'a> DrawContext<'a> {
    /// Scaled pixel size for a nominal base size.
    #[inline]
    pub fn size(&self, base: f64) -> f64 {
        self.scale.scaled(base)
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.anchors.len()
    }

    /// Anchor `i`. Callers have already checked the family minimum.
    #[inline]
    pub fn anchor(&self, i: usize) -> Point {
        self.anchors[i]
    }

    /// Last anchor.
    #[inline]
    pub fn last(&self) -> Point {
        self.anchors[self.anchors.len() - 1]
    }
}
