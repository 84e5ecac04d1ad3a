//! Task graphics built around a sampled arc.
//!
//! Every arc has [`ARC_POINTS`] samples and goes through
//! [`arc_points`], so a configured [`GeoConverter`](crate::geodesy::GeoConverter)
//! bends all of them along true geodesics. Counts never depend on the
//! converter.

use super::parts::{stroke, x_mark, Head};
use crate::arc::{arc_points, ARC_POINTS};
use crate::config::DrawContext;
use crate::error::Result;
use crate::family::SymbolFamily;
use crate::geometry::{angle_of, close_run, distance, extend_along, midpoint, PenStyle, Point};

/// Sweep of the nearly closed circle on RETAIN, SECURE and ISOLATE.
const NEAR_CIRCLE: f64 = 338.0;

/// Nominal spoke length.
const SPOKE: f64 = 10.0;

/// Nominal half-size of the OCCUPY cross.
const CROSS_HALF: f64 = 10.0;

const RETAIN_SPOKES: usize = 11;
const ISOLATE_SPOKES: usize = 8;
const CONTAIN_SPOKES: usize = 8;

pub fn count(ctx: &DrawContext) -> Result<usize> {
    use SymbolFamily as F;
    let head = 3;
    Ok(match ctx.family {
        F::Seize => ARC_POINTS + head + 1,
        F::Occupy => ARC_POINTS + 4,
        F::Retain => ARC_POINTS + head + 2 * RETAIN_SPOKES,
        F::Secure => ARC_POINTS + head,
        F::Isolate => ARC_POINTS + head + 2 * ISOLATE_SPOKES,
        F::Delay => 2 + ARC_POINTS + head,
        F::Contain => ARC_POINTS + 2 + 2 * CONTAIN_SPOKES,
        _ => 0,
    })
}

/// Signed turn from `a` to `b` seen from `center`, in degrees, within `(-180, 180]`.
fn turn_degrees(center: Point, a: Point, b: Point) -> f64 {
    let d = (angle_of(center, b) - angle_of(center, a)).to_degrees();
    let wrapped = (d + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { 180.0 } else { wrapped }
}

/// Arc samples styled as one solid sub-path.
fn solid_arc(ctx: &DrawContext, center: Point, start: Point, sweep: f64) -> Result<Vec<Point>> {
    let mut arc = arc_points(center, start, sweep, ARC_POINTS, ctx.geo)?;
    close_run(&mut arc, PenStyle::Line);
    Ok(arc)
}

/// Head on the end of the arc, pointing along the sweep.
fn arc_head(ctx: &DrawContext, arc: &[Point]) -> [Point; 3] {
    let n = arc.len();
    Head::scaled(ctx).open(arc[n - 1], arc[n - 2])
}

/// Spokes at `indices` along the arc, outward from `center` or inward to it.
fn spokes(
    arc: &[Point],
    center: Point,
    indices: impl Iterator<Item = usize>,
    length: f64,
    outward: bool,
) -> Vec<Point> {
    let mut out = Vec::new();
    for i in indices {
        let on = arc[i];
        let off = if outward {
            extend_along(center, on, distance(center, on) + length)
        } else {
            extend_along(on, center, length)
        };
        out.extend(stroke(on, off));
    }
    out
}

pub fn generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    use SymbolFamily as F;
    let p0 = ctx.anchor(0);
    let p1 = ctx.anchor(1);
    let spoke = ctx.size(SPOKE);

    let out = match ctx.family {
        F::Seize | F::Occupy => {
            let sweep = turn_degrees(p0, p1, ctx.anchor(2));
            let mut out = solid_arc(ctx, p0, p1, sweep)?;
            if ctx.family == F::Seize {
                let head = arc_head(ctx, &out);
                out.extend(head);
                out.push(p0.with_style(PenStyle::Marker));
            } else {
                let end = out[ARC_POINTS - 1];
                out.extend(x_mark(end, ctx.size(CROSS_HALF)));
            }
            out
        }
        F::Retain | F::Secure | F::Isolate => {
            let mut out = solid_arc(ctx, p0, p1, NEAR_CIRCLE)?;
            let head = arc_head(ctx, &out);
            let decoration = match ctx.family {
                F::Retain => spokes(&out, p0, (0..RETAIN_SPOKES).map(|k| 2 * k), spoke, true),
                F::Isolate => spokes(&out, p0, (0..ISOLATE_SPOKES).map(|k| 3 * k), spoke, false),
                _ => Vec::new(),
            };
            out.extend(head);
            out.extend(decoration);
            out
        }
        F::Delay => {
            let mut out = stroke(p0, p1).to_vec();
            let arc = solid_arc(ctx, midpoint(p1, ctx.anchor(2)), p1, 180.0)?;
            let head = arc_head(ctx, &arc);
            out.extend(arc);
            out.extend(head);
            out
        }
        F::Contain => {
            let mut out = solid_arc(ctx, p0, p1, 180.0)?;
            let apex = out[ARC_POINTS / 2];
            let decoration = spokes(&out, p0, (0..CONTAIN_SPOKES).map(|k| 3 * k + 1), spoke, true);
            out.extend(stroke(p0, apex));
            out.extend(decoration);
            out
        }
        _ => Vec::new(),
    };

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::family::FamilyClass;
    use crate::geodesy::MercatorViewport;
    use std::sync::Arc;

    fn anchors() -> Vec<Point> {
        vec![Point::new(100.0, 100.0), Point::new(200.0, 100.0), Point::new(100.0, 200.0)]
    }

    #[test]
    fn every_arc_task_agrees() {
        let pts = anchors();
        for &family in SymbolFamily::all().iter().filter(|f| f.class() == FamilyClass::ArcTask) {
            let config = RenderConfig::new(family);
            let ctx = config.context(&pts);
            assert_eq!(count(&ctx).unwrap(), generate(&ctx).unwrap().len(), "{family}");
        }
    }

    #[test]
    fn literal_counts() {
        let pts = anchors();
        for (family, expected) in [
            (SymbolFamily::Seize, 30),
            (SymbolFamily::Occupy, 30),
            (SymbolFamily::Retain, 51),
            (SymbolFamily::Secure, 29),
            (SymbolFamily::Isolate, 45),
            (SymbolFamily::Delay, 31),
            (SymbolFamily::Contain, 44),
        ] {
            let config = RenderConfig::new(family);
            assert_eq!(count(&config.context(&pts)).unwrap(), expected, "{family}");
        }
    }

    #[test]
    fn seize_sweeps_to_third_anchor() {
        let pts = anchors();
        let config = RenderConfig::new(SymbolFamily::Seize);
        let out = generate(&config.context(&pts)).unwrap();
        let end = out[ARC_POINTS - 1];
        assert!((end.x - 100.0).abs() < 1e-9 && (end.y - 200.0).abs() < 1e-9);
        assert_eq!(end.style, PenStyle::End);
        assert_eq!(out[29], Point::styled(100.0, 100.0, PenStyle::Marker));
    }

    #[test]
    fn turn_takes_the_short_way() {
        let c = Point::new(0.0, 0.0);
        assert!((turn_degrees(c, Point::new(1.0, 0.0), Point::new(0.0, -1.0)) + 90.0).abs() < 1e-9);
        assert!((turn_degrees(c, Point::new(1.0, 0.0), Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        let near_seam = turn_degrees(c, Point::new(-1.0, 0.01), Point::new(-1.0, -0.01));
        assert!(near_seam.abs() < 2.0);
    }

    #[test]
    fn geodesic_counts_match() {
        let pts = anchors();
        let view = Arc::new(MercatorViewport::new(2.0, 48.0, 10.0));
        for family in [SymbolFamily::Retain, SymbolFamily::Delay, SymbolFamily::Contain] {
            let config = RenderConfig::new(family).with_geo(view.clone());
            let ctx = config.context(&pts);
            let out = generate(&ctx).unwrap();
            assert_eq!(out.len(), count(&ctx).unwrap());
            assert!(out.iter().all(Point::is_finite));
        }
    }
}
