//! Glyphs sized by the visible part of their base segment.
//!
//! The segment `P0 -> P1` is clipped to the viewport first. A base segment
//! entirely off screen draws nothing at all; otherwise the number of zigzag
//! vertices depends on the visible length, so counting has to clip too.

use crate::clip::visible_segment;
use crate::config::DrawContext;
use crate::error::Result;
use crate::family::SymbolFamily;
use crate::geometry::{distance, left_normal, lerp, unit_direction, PenStyle, Point};
use crate::glyphs::parts::{depth_towards, shifted, stroke, Head};
use crate::motifs::util::points_for;

/// Nominal zigzag step.
const STEP: f64 = 10.0;

/// Visible base segment and its zigzag count, or `None` when off screen.
fn visible_base(ctx: &DrawContext) -> Option<(Point, Point, usize)> {
    let (a, b) = visible_segment(ctx.anchor(0), ctx.anchor(1), ctx.clip.as_ref())?;
    let s = ctx.size(STEP);
    let len = distance(a, b);
    let divisor = match ctx.family {
        SymbolFamily::Fordif => s,
        _ => 2.0 * s,
    };
    let t = if divisor > 0.0 && len.is_finite() {
        ((len / divisor).floor() as usize).max(1)
    } else {
        1
    };
    Some((a, b, t))
}

pub fn count(ctx: &DrawContext) -> Result<usize> {
    let Some((_, _, t)) = visible_base(ctx) else {
        return Ok(0);
    };
    match ctx.family {
        SymbolFamily::Bydif => points_for(2, t, 12),
        SymbolFamily::Fordif => points_for(1, t, 5),
        _ => points_for(2, t, 7),
    }
}

pub fn generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    let Some((a, b, t)) = visible_base(ctx) else {
        return Ok(Vec::new());
    };
    Ok(match ctx.family {
        SymbolFamily::Bydif => bypass_difficult(ctx, a, b, t),
        SymbolFamily::Fordif => ford_difficult(ctx, a, b, t),
        _ => fix(ctx, a, b, t),
    })
}

/// Zigzag vertices between fractions `from` and `to` of `a -> b`.
fn zigzag(a: Point, b: Point, from: f64, to: f64, count: usize, amplitude: f64) -> Vec<Point> {
    let (ux, uy) = unit_direction(a, b);
    let (nx, ny) = left_normal((ux, uy));
    (0..count)
        .map(|j| {
            let f = from + (to - from) * (j as f64 + 0.5) / count as f64;
            let side = if j % 2 == 0 { amplitude } else { -amplitude };
            shifted(lerp(a, b, f), (nx, ny), side)
        })
        .collect()
}

/// FIX: straight lead-in, a zigzag over the middle half, arrowhead at `b`.
fn fix(ctx: &DrawContext, a: Point, b: Point, t: usize) -> Vec<Point> {
    let h = ctx.size(STEP) / 2.0;
    let mut out = Vec::with_capacity(2 * t + 7);
    out.push(a);
    out.push(lerp(a, b, 0.25));
    out.extend(zigzag(a, b, 0.25, 0.75, 2 * t, h));
    out.push(lerp(a, b, 0.75));
    out.push(b.with_style(PenStyle::End));
    out.extend(Head::scaled(ctx).open(b, a));
    out
}

/// BYDIF: zigzag base with two arms reaching towards the third anchor.
fn bypass_difficult(ctx: &DrawContext, a: Point, b: Point, t: usize) -> Vec<Point> {
    let h = ctx.size(STEP) / 2.0;
    let (dir, depth) = depth_towards(ctx.anchor(0), ctx.anchor(1), ctx.anchor(2), ctx.size(STEP));
    let arm_a = shifted(a, dir, depth);
    let arm_b = shifted(b, dir, depth);
    let head = Head::scaled(ctx);

    let mut out = Vec::with_capacity(2 * t + 12);
    out.push(a);
    out.extend(zigzag(a, b, 0.0, 1.0, 2 * t, h));
    out.push(b.with_style(PenStyle::End));
    out.extend(stroke(a, arm_a));
    out.extend(stroke(b, arm_b));
    out.extend(head.open(arm_a, a));
    out.extend(head.open(arm_b, b));
    out
}

/// FORDIF: base line, a parallel line at the third anchor's depth, and a
/// zigzag bouncing between the two.
fn ford_difficult(ctx: &DrawContext, a: Point, b: Point, t: usize) -> Vec<Point> {
    let (dir, depth) = depth_towards(ctx.anchor(0), ctx.anchor(1), ctx.anchor(2), ctx.size(STEP));
    let a2 = shifted(a, dir, depth);
    let b2 = shifted(b, dir, depth);

    let mut out = Vec::with_capacity(t + 5);
    out.extend(stroke(a, b));
    out.extend(stroke(a2, b2));
    for j in 0..=t {
        let f = j as f64 / t as f64;
        let base = lerp(a, b, f);
        let p = if j % 2 == 0 { base } else { shifted(base, dir, depth) };
        out.push(if j == t { p.with_style(PenStyle::End) } else { p });
    }
    out
}
