//! Constant-size glyphs: obstacles, crossings, convoys and mission tasks.
//!
//! Only the first two or three anchors are read; extra anchors are ignored
//! and never change the point count.

use super::parts::{depth_towards, shifted, stroke, Head};
use crate::arc::{arc_points, ellipse_points, ARC_POINTS};
use crate::config::DrawContext;
use crate::error::Result;
use crate::family::SymbolFamily;
use crate::geometry::{angle_of, close_run, distance, extend_along, lerp, midpoint, PenStyle, Point, Side};
use crate::motifs::util::Segment;

/// Nominal gap, tick and depth unit.
const UNIT: f64 = 10.0;

/// Nominal roadblock bar half-length.
const BAR_HALF: f64 = 15.0;

/// Samples on the basic-structure ellipse: 10° steps, closed.
const ELLIPSE_POINTS: usize = 37;

/// Hatch strokes across a hostile convoy.
const HATCHES: usize = 6;

pub fn count(ctx: &DrawContext) -> Result<usize> {
    use SymbolFamily as F;
    Ok(match ctx.family {
        F::Roadblk | F::Ferry | F::Raft => 8,
        F::Convoy => 10,
        F::Hconvoy => 5 + 4 + 2 * HATCHES,
        F::Cluster => ARC_POINTS + 2,
        F::BsEllipse => ELLIPSE_POINTS,
        F::Block => 4,
        F::Breach | F::Canalize => 8,
        F::Bypass => 10,
        F::Clear => 17,
        F::Disrupt => 11,
        F::Penetrate => 7,
        _ => 0,
    })
}

pub fn generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    use SymbolFamily as F;
    let p0 = ctx.anchor(0);
    let p1 = ctx.anchor(1);
    let seg = Segment::new(p0, p1);

    let out = match ctx.family {
        F::Roadblk => roadblock(ctx, &seg),
        F::Ferry => {
            let head = Head::scaled(ctx);
            let mut out = stroke(p0, p1).to_vec();
            out.extend(head.open(p1, p0));
            out.extend(head.open(p0, p1));
            out
        }
        F::Raft => {
            let head = Head::scaled(ctx);
            let mut out = stroke(p0, p1).to_vec();
            out.extend(head.open(extend_along(p0, p1, head.length), p0));
            out.extend(head.open(extend_along(p1, p0, head.length), p1));
            out
        }
        F::Convoy | F::Hconvoy => convoy(ctx, &seg),
        F::Cluster => {
            let mut out = arc_points(midpoint(p0, p1), p0, 180.0, ARC_POINTS, ctx.geo)?;
            out.extend(stroke(p1, p0));
            out
        }
        F::BsEllipse => {
            let p2 = ctx.anchor(2);
            let mut out = ellipse_points(
                p0,
                distance(p0, p1),
                distance(p0, p2),
                angle_of(p0, p1),
                ELLIPSE_POINTS,
            );
            close_run(&mut out, PenStyle::Line);
            out
        }
        F::Block => {
            let mut out = stroke(p0, p1).to_vec();
            out.extend(stroke(midpoint(p0, p1), ctx.anchor(2)));
            out
        }
        F::Breach | F::Canalize | F::Bypass => bracket(ctx, &seg),
        F::Clear | F::Disrupt => bar_with_arrows(ctx),
        F::Penetrate => {
            let mid = midpoint(p0, p1);
            let p2 = ctx.anchor(2);
            let mut out = stroke(p0, p1).to_vec();
            out.extend(stroke(mid, p2));
            out.extend(Head::scaled(ctx).open(p2, mid));
            out
        }
        _ => Vec::new(),
    };

    Ok(out)
}

/// Line cut at its middle, with a bar across each cut end.
///
/// The cut never reaches past the anchors: on a short segment the bars sit
/// on the end points.
fn roadblock(ctx: &DrawContext, seg: &Segment) -> Vec<Point> {
    let gap = ctx.size(UNIT).min(seg.length / 2.0);
    let bar = ctx.size(BAR_HALF);
    let near = seg.length / 2.0 - gap;
    let far = seg.length / 2.0 + gap;

    let mut out = Vec::with_capacity(8);
    out.extend(stroke(seg.start, seg.at(near)));
    out.extend(stroke(seg.at(far), seg.end));
    out.extend(stroke(seg.local(near, bar, Side::Left), seg.local(near, bar, Side::Right)));
    out.extend(stroke(seg.local(far, bar, Side::Left), seg.local(far, bar, Side::Right)));
    out
}

/// Box along `P0 -> P1` with an arrow leaving the front.
///
/// The hostile variant gets a filled head and hatching inside the box.
fn convoy(ctx: &DrawContext, seg: &Segment) -> Vec<Point> {
    let w = ctx.size(UNIT);
    let len = seg.length;
    let head = Head::scaled(ctx);

    let mut out = vec![
        seg.local(0.0, w, Side::Left),
        seg.local(len, w, Side::Left),
        seg.local(len, w, Side::Right),
        seg.local(0.0, w, Side::Right),
        seg.local(0.0, w, Side::Left),
    ];
    close_run(&mut out, PenStyle::Line);

    if ctx.family == SymbolFamily::Hconvoy {
        out.extend(head.filled(seg.at(len + head.length), seg.end));
        for k in 0..HATCHES {
            let along = len * (k + 1) as f64 / (HATCHES + 1) as f64;
            out.extend(stroke(seg.local(along, w, Side::Left), seg.local(along, w, Side::Right)));
        }
    } else {
        let stem = seg.at(len + ctx.size(20.0));
        out.extend(stroke(seg.end, stem));
        out.extend(head.open(seg.at(len + ctx.size(40.0)), stem));
    }
    out
}

/// Open bracket `P0 -> P0' -> P1' -> P1` reaching towards `P2`, with
/// outward ticks (BREACH), inward ticks (CANALIZE) or arrowheads (BYPASS)
/// on its open ends.
fn bracket(ctx: &DrawContext, seg: &Segment) -> Vec<Point> {
    let unit = ctx.size(UNIT);
    let (dir, depth) = depth_towards(seg.start, seg.end, ctx.anchor(2), unit);
    let back0 = shifted(seg.start, dir, depth);
    let back1 = shifted(seg.end, dir, depth);

    let mut out = vec![seg.start, back0, back1, seg.end.with_style(PenStyle::End)];
    match ctx.family {
        SymbolFamily::Bypass => {
            let head = Head::scaled(ctx);
            out.extend(head.open(seg.start, back0));
            out.extend(head.open(seg.end, back1));
        }
        SymbolFamily::Canalize => {
            out.extend(stroke(seg.start, seg.at(unit)));
            out.extend(stroke(seg.end, seg.at(seg.length - unit)));
        }
        _ => {
            out.extend(stroke(seg.start, seg.at(-unit)));
            out.extend(stroke(seg.end, seg.at(seg.length + unit)));
        }
    }
    out
}

/// Bar along `P0 -> P1` with three shafts towards `P2`.
///
/// CLEAR puts a head on every shaft; DISRUPT staggers the shaft lengths and
/// heads only the middle one.
fn bar_with_arrows(ctx: &DrawContext) -> Vec<Point> {
    let p0 = ctx.anchor(0);
    let p1 = ctx.anchor(1);
    let (dir, depth) = depth_towards(p0, p1, ctx.anchor(2), ctx.size(UNIT));
    let head = Head::scaled(ctx);
    let disrupt = ctx.family == SymbolFamily::Disrupt;

    let mut out = stroke(p0, p1).to_vec();
    for (k, f) in [0.25, 0.5, 0.75].into_iter().enumerate() {
        let reach = if disrupt { [0.5, 1.0, 0.75][k] } else { 1.0 };
        let base = lerp(p0, p1, f);
        let end = shifted(base, dir, depth * reach);
        out.extend(stroke(base, end));
        if !disrupt || k == 1 {
            out.extend(head.open(end, base));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    #[test]
    fn fixed_counts_ignore_anchor_count_and_thickness() {
        let mut anchors = vec![Point::new(10.0, 10.0), Point::new(200.0, 60.0), Point::new(120.0, 150.0)];
        for extra in 0..3 {
            anchors.push(Point::new(300.0 + extra as f64, 10.0));
            for thickness in [1.0, 4.0, 25.0] {
                for family in [SymbolFamily::Roadblk, SymbolFamily::Ferry] {
                    let config = RenderConfig::new(family).with_thickness(thickness);
                    let ctx = config.context(&anchors);
                    assert_eq!(count(&ctx).unwrap(), 8);
                    assert_eq!(generate(&ctx).unwrap().len(), 8);
                }
            }
        }
    }

    #[test]
    fn roadblock_bars_stay_between_the_anchors() {
        let anchors = [Point::new(0.0, 0.0), Point::new(5.0, 0.0)];
        let config = RenderConfig::new(SymbolFamily::Roadblk);
        let pts = generate(&config.context(&anchors)).unwrap();
        assert_eq!(pts.len(), 8);
        assert!(pts.iter().all(|p| (-1e-9..=5.0 + 1e-9).contains(&p.x)), "{pts:?}");
        assert!((pts[1].x).abs() < 1e-9);
        assert!((pts[2].x - 5.0).abs() < 1e-9);

        // Long enough for the full gap: cut of 2 * 10 around the middle.
        let long = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let pts = generate(&config.context(&long)).unwrap();
        assert!((pts[1].x - 40.0).abs() < 1e-9);
        assert!((pts[2].x - 60.0).abs() < 1e-9);
    }

    #[test]
    fn every_task_glyph_agrees() {
        let anchors = [Point::new(50.0, 50.0), Point::new(250.0, 80.0), Point::new(140.0, 190.0)];
        for &family in SymbolFamily::all()
            .iter()
            .filter(|f| f.class() == crate::family::FamilyClass::FixedGlyph)
        {
            let config = RenderConfig::new(family);
            let ctx = config.context(&anchors);
            assert_eq!(count(&ctx).unwrap(), generate(&ctx).unwrap().len(), "{family}");
        }
    }

    #[test]
    fn cluster_bulges_left() {
        let anchors = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let config = RenderConfig::new(SymbolFamily::Cluster);
        let pts = generate(&config.context(&anchors)).unwrap();
        assert_eq!(pts.len(), 28);
        assert!(pts[ARC_POINTS / 2].y < -40.0);
        assert_eq!(pts[27], Point::styled(0.0, 0.0, PenStyle::End));
    }

    #[test]
    fn ellipse_closes_on_semi_major_end() {
        let anchors = [Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(0.0, 20.0)];
        let config = RenderConfig::new(SymbolFamily::BsEllipse);
        let pts = generate(&config.context(&anchors)).unwrap();
        assert!((pts[0].x - 50.0).abs() < 1e-9);
        assert!((pts[36].x - 50.0).abs() < 1e-9);
        assert_eq!(pts[36].style, PenStyle::End);
        assert!((pts[9].y - 20.0).abs() < 1e-9);
    }
}
