//! Direction-of-attack arrows and traffic-flow lines.
//!
//! The arrow tip is always the last anchor.

use super::parts::{bowtie, Head};
use crate::config::DrawContext;
use crate::error::Result;
use crate::family::SymbolFamily;
use crate::geometry::{close_run, extend_along, lerp, midpoint, PenStyle, Point};

fn shaft(ctx: &DrawContext, style: PenStyle) -> Vec<Point> {
    let mut out = ctx.anchors.to_vec();
    close_run(&mut out, style);
    out
}

// ============================================================================
// DIRECTION OF ATTACK
// ============================================================================

pub fn attack_count(ctx: &DrawContext) -> Result<usize> {
    let n = ctx.n();
    Ok(match ctx.family {
        SymbolFamily::Diratkfnt => n + 6,
        SymbolFamily::Diratkair => n + 8,
        SymbolFamily::Folsp => n + 4,
        _ => n + 3,
    })
}

pub fn attack(ctx: &DrawContext) -> Result<Vec<Point>> {
    let head = Head::scaled(ctx);
    let tip = ctx.last();
    let tail = ctx.anchor(ctx.n() - 2);

    let mut out = match ctx.family {
        SymbolFamily::Diratkgnd | SymbolFamily::Diratkair => shaft(ctx, PenStyle::Line),
        _ => shaft(ctx, PenStyle::Dash),
    };

    match ctx.family {
        SymbolFamily::Folsp => out.extend(head.filled(tip, tail)),
        SymbolFamily::Diratkfnt => {
            out.extend(head.open(tip, tail));
            let second = extend_along(tip, tail, head.length);
            out.extend(head.open(second, tail));
        }
        SymbolFamily::Diratkair => {
            out.extend(head.open(tip, tail));
            let p0 = ctx.anchor(0);
            let p1 = ctx.anchor(1);
            out.extend(bowtie(midpoint(p0, p1), p0, p1, ctx.size(10.0), ctx.size(6.0)));
        }
        _ => out.extend(head.open(tip, tail)),
    }

    Ok(out)
}

// ============================================================================
// TRAFFIC FLOW
// ============================================================================

pub fn flow_count(ctx: &DrawContext) -> Result<usize> {
    let n = ctx.n();
    Ok(match ctx.family {
        SymbolFamily::Twoway => 7 * n - 6,
        _ => 4 * n - 3,
    })
}

/// Anchor line with arrowheads on every segment.
///
/// `ONEWAY` puts one head at each midpoint, `ALT` flips every other one,
/// `TWOWAY` puts opposing heads at one and two thirds.
pub fn flow(ctx: &DrawContext) -> Result<Vec<Point>> {
    let head = Head::scaled(ctx);
    let mut out = shaft(ctx, PenStyle::Line);

    for (i, w) in ctx.anchors.windows(2).enumerate() {
        let (start, end) = (w[0], w[1]);
        match ctx.family {
            SymbolFamily::Twoway => {
                out.extend(head.open(lerp(start, end, 1.0 / 3.0), end));
                out.extend(head.open(lerp(start, end, 2.0 / 3.0), start));
            }
            SymbolFamily::Alt if i % 2 == 1 => {
                let tip = extend_along(midpoint(start, end), start, head.length / 2.0);
                out.extend(head.open(tip, end));
            }
            _ => {
                let tip = extend_along(midpoint(start, end), end, head.length / 2.0);
                out.extend(head.open(tip, start));
            }
        }
    }

    Ok(out)
}
