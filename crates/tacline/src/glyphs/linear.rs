//! Linear targets, final protective fire, abatis and overhead wire.

use super::parts::{diamond, tick};
use crate::config::DrawContext;
use crate::error::Result;
use crate::family::SymbolFamily;
use crate::geometry::{close_run, extend_along, PenStyle, Point, Side};
use crate::motifs::util::Segment;

/// Nominal tick half-length.
const TICK_HALF: f64 = 10.0;

/// Nominal abatis notch size.
const NOTCH: f64 = 20.0;

/// Nominal half-diagonal of an overhead-wire diamond.
const DIAMOND_HALF: f64 = 5.0;

pub fn count(ctx: &DrawContext) -> Result<usize> {
    let n = ctx.n();
    Ok(match ctx.family {
        SymbolFamily::Lintgts => 3 * n,
        SymbolFamily::Fpf => n + 6,
        SymbolFamily::Abatis => n + 3,
        SymbolFamily::OverheadWire => 6 * n,
        _ => n + 4,
    })
}

/// Neighbours used to orient a decoration at anchor `i`.
fn around(anchors: &[Point], i: usize) -> (Point, Point) {
    let last = anchors.len() - 1;
    (anchors[i.saturating_sub(1)], anchors[(i + 1).min(last)])
}

pub fn generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    let anchors = ctx.anchors;
    let n = ctx.n();
    let half = ctx.size(TICK_HALF);

    let mut out = anchors.to_vec();
    close_run(&mut out, PenStyle::Line);

    match ctx.family {
        SymbolFamily::Lintgts => {
            for i in 0..n {
                let (from, to) = around(anchors, i);
                out.extend(tick(anchors[i], from, to, half));
            }
        }
        SymbolFamily::Abatis => {
            let seg = Segment::new(anchors[0], anchors[1]);
            let size = ctx.size(NOTCH);
            out.push(seg.start);
            out.push(seg.local(size / 2.0, size, Side::Left));
            out.push(seg.at(size).with_style(PenStyle::End));
        }
        SymbolFamily::OverheadWire => {
            let half_diag = ctx.size(DIAMOND_HALF);
            for i in 0..n {
                let (from, to) = around(anchors, i);
                out.extend(diamond(anchors[i], from, to, half_diag));
            }
        }
        family => {
            let first = anchors[0];
            let last = anchors[n - 1];
            out.extend(tick(first, first, anchors[1], half));
            out.extend(tick(last, anchors[n - 2], last, half));
            if family == SymbolFamily::Fpf {
                let inner = extend_along(first, anchors[1], half);
                out.extend(tick(inner, first, anchors[1], half));
            }
        }
    }

    Ok(out)
}
