//! Thickness- and DPI-aware sizing.
//!
//! Every spacing, glyph size and offset in the engine is a nominal base
//! size (20, 40, ...) passed through [`ScaleContext::scaled`]. Both facades
//! use the same context, so their formulas stay in step.

/// Reference screen density the nominal sizes were designed for.
pub const BASE_DPI: f64 = 96.0;

/// Line weights at or below this draw glyphs at nominal size.
const DEFAULT_LINE_WIDTH: f64 = 3.0;

/// Line weights above this are treated as this.
const MAX_LINE_WIDTH: f64 = 100.0;

/// Line thickness and device density for one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    pub thickness: f64,
    pub dpi: f64,
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self { thickness: 1.0, dpi: BASE_DPI }
    }
}

impl ScaleContext {
    pub fn new(thickness: f64, dpi: f64) -> Self {
        Self { thickness, dpi }
    }

    /// Actual pixel size for a nominal base size.
    ///
    /// Thin lines keep the nominal size; every 2 px of extra width above
    /// 3 px grows glyphs by 10%, capped at a 100 px line.
    pub fn scaled(&self, base: f64) -> f64 {
        let dpi_factor = if self.dpi.is_finite() && self.dpi > 0.0 {
            self.dpi / BASE_DPI
        } else {
            1.0
        };

        if !self.thickness.is_finite() || self.thickness <= DEFAULT_LINE_WIDTH {
            return base * dpi_factor;
        }

        let width = self.thickness.min(MAX_LINE_WIDTH);
        base * dpi_factor * (1.0 + ((width - DEFAULT_LINE_WIDTH) / 2.0) * 0.1)
    }
}

/// Scaled size at the reference density.
#[inline]
pub fn scaled_size(base: f64, thickness: f64) -> f64 {
    ScaleContext::new(thickness, BASE_DPI).scaled(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thin_lines_keep_nominal_size() {
        assert_eq!(scaled_size(20.0, 1.0), 20.0);
        assert_eq!(scaled_size(40.0, 3.0), 40.0);
    }

    #[test]
    fn thick_lines_grow_glyphs() {
        // 5 px: one 2 px step above 3 -> +10%
        assert!((scaled_size(20.0, 5.0) - 22.0).abs() < 1e-12);
    }

    #[test]
    fn thickness_is_capped() {
        assert_eq!(scaled_size(10.0, 100.0), scaled_size(10.0, 1000.0));
    }

    #[test]
    fn dpi_scales_linearly() {
        let ctx = ScaleContext::new(1.0, 192.0);
        assert_eq!(ctx.scaled(20.0), 40.0);
        let bogus = ScaleContext::new(f64::NAN, 0.0);
        assert_eq!(bogus.scaled(20.0), 20.0);
    }
}
