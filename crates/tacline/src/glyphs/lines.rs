//! Plain, dashed and closed lines through the anchors, and the encirclement.

use crate::config::DrawContext;
use crate::error::Result;
use crate::geometry::{close_run, PenStyle, Point, Side};
use crate::motifs::strokes;
use crate::motifs::util::sum_points;

/// Nominal tooth spacing on the encirclement outline.
const ENCIRCLE_SPACING: f64 = 20.0;

fn run(anchors: &[Point], style: PenStyle) -> Vec<Point> {
    let mut out = anchors.to_vec();
    close_run(&mut out, style);
    out
}

fn closed(anchors: &[Point]) -> Vec<Point> {
    let mut out = anchors.to_vec();
    out.extend(anchors.first().copied());
    out
}

pub fn open_count(ctx: &DrawContext) -> Result<usize> {
    Ok(ctx.n())
}

pub fn solid(ctx: &DrawContext) -> Result<Vec<Point>> {
    Ok(run(ctx.anchors, PenStyle::Line))
}

pub fn dashed(ctx: &DrawContext) -> Result<Vec<Point>> {
    Ok(run(ctx.anchors, PenStyle::Dash))
}

pub fn area_count(ctx: &DrawContext) -> Result<usize> {
    Ok(ctx.n() + 1)
}

pub fn area(ctx: &DrawContext) -> Result<Vec<Point>> {
    Ok(run(&closed(ctx.anchors), PenStyle::Line))
}

pub fn encircle_count(ctx: &DrawContext) -> Result<usize> {
    let outline = closed(ctx.anchors);
    sum_points([outline.len(), strokes::teeth_count(&outline, ctx.size(ENCIRCLE_SPACING))?])
}

/// Closed outline, then teeth along every side including the closing one.
pub fn encircle(ctx: &DrawContext) -> Result<Vec<Point>> {
    let outline = closed(ctx.anchors);
    let teeth = strokes::teeth(&outline, ctx.size(ENCIRCLE_SPACING), Side::Right);
    let mut out = run(&outline, PenStyle::Line);
    out.extend(teeth);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::family::SymbolFamily;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]
    }

    #[test]
    fn area_closes_on_first_anchor() {
        let anchors = square();
        let config = RenderConfig::new(SymbolFamily::Genarea);
        let pts = area(&config.context(&anchors)).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[4], Point::styled(0.0, 0.0, PenStyle::End));
    }

    #[test]
    fn dashed_line_styles() {
        let anchors = square();
        let config = RenderConfig::new(SymbolFamily::Pld);
        let pts = dashed(&config.context(&anchors)).unwrap();
        assert_eq!(pts[0].style, PenStyle::Dash);
        assert_eq!(pts[3].style, PenStyle::DashEnd);
    }

    #[test]
    fn encircle_teeth_on_every_side() {
        let anchors = square();
        let config = RenderConfig::new(SymbolFamily::Encircle);
        let ctx = config.context(&anchors);
        // 5 outline points + 4 sides * 5 teeth * 3
        assert_eq!(encircle_count(&ctx).unwrap(), 65);
        assert_eq!(encircle(&ctx).unwrap().len(), 65);
    }
}
