//! Channel generator: parallel offset lines and what is drawn on them.
//!
//! Fence families are a short list of strokes, each one a render style on
//! the upper, lower or centre line. Offsetting happens before anything is
//! counted, so motif spacing always sees the true length of the offset
//! line, not of the anchor path.
//!
//! The axis-of-advance arrows use the same offset lines to draw their
//! double outline.

use crate::config::DrawContext;
use crate::error::Result;
use crate::family::SymbolFamily;
use crate::flot;
use crate::geometry::{
    close_run, distance, extend_along, intersect_lines, midpoint, offset_side, LineEq, PenStyle, Point, Side,
};
use crate::glyphs::parts::{bowtie, stroke, Head};
use crate::motifs::strokes;
use crate::motifs::util::{segments, sum_points};

/// Longest allowed miter, in channel widths.
const MITER_LIMIT: f64 = 4.0;

// ============================================================================
// OFFSET POLYLINE
// ============================================================================

/// Copy of `path` shifted `width` pixels to `side` of the direction of travel.
///
/// End vertices are plain perpendicular offsets; interior vertices are the
/// intersection of the two adjacent offset segments. Parallel neighbours
/// and miters longer than four widths fall back to the end of the previous
/// offset segment. Always returns one point per input point.
pub fn offset_polyline(path: &[Point], width: f64, side: Side) -> Vec<Point> {
    if path.len() < 2 {
        return path.to_vec();
    }

    let shifted: Vec<(Point, Point)> = segments(path)
        .map(|seg| {
            (
                offset_side(seg.start, seg.end, seg.start, side, width),
                offset_side(seg.start, seg.end, seg.end, side, width),
            )
        })
        .collect();

    let mut out = Vec::with_capacity(path.len());
    out.push(shifted[0].0);
    for i in 1..path.len() - 1 {
        let (a0, b0) = shifted[i - 1];
        let (a1, b1) = shifted[i];
        let joint = intersect_lines(&LineEq::through(a0, b0), &LineEq::through(a1, b1), b0);
        let limit = MITER_LIMIT * width.abs();
        if distance(joint, path[i]) > limit || !joint.is_finite() {
            out.push(b0);
        } else {
            out.push(joint);
        }
    }
    out.push(shifted[shifted.len() - 1].1);
    out
}

// ============================================================================
// FENCES
// ============================================================================

/// Which line a stroke is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Upper,
    Lower,
    Center,
}

impl Offset {
    /// Side that motifs on this line face: away from the centre.
    fn facing(self) -> Side {
        match self {
            Offset::Upper | Offset::Center => Side::Left,
            Offset::Lower => Side::Right,
        }
    }
}

/// What a stroke draws; motif variants carry their nominal spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Render {
    Plain,
    XMarks(f64),
    Loops(f64),
    Teeth(f64),
    Scallops(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub offset: Offset,
    pub render: Render,
}

const fn s(offset: Offset, render: Render) -> Stroke {
    Stroke { offset, render }
}

/// Nominal half-width of most fences.
const FENCE_WIDTH: f64 = 10.0;

/// Nominal half-width of the LC channel.
const LC_WIDTH: f64 = 4.0;

/// Half-width and stroke list of a fence family.
pub fn fence_strokes(family: SymbolFamily) -> (f64, &'static [Stroke]) {
    use Offset::{Center, Lower, Upper};
    use Render::{Loops, Plain, Scallops, Teeth, XMarks};
    use SymbolFamily as F;

    const DOUBLEA: &[Stroke] = &[s(Upper, Plain), s(Lower, Plain), s(Center, XMarks(20.0))];
    const LWFENCE: &[Stroke] = &[s(Upper, Plain), s(Lower, XMarks(20.0))];
    const HWFENCE: &[Stroke] = &[s(Center, Plain), s(Upper, XMarks(20.0)), s(Lower, XMarks(20.0))];
    const UNSP: &[Stroke] = &[s(Upper, XMarks(30.0)), s(Lower, XMarks(30.0))];
    const SFENCE: &[Stroke] = &[s(Center, Plain), s(Upper, XMarks(20.0))];
    const DFENCE: &[Stroke] = &[
        s(Upper, Plain),
        s(Lower, Plain),
        s(Upper, XMarks(20.0)),
        s(Lower, XMarks(20.0)),
    ];
    const SINGLEC: &[Stroke] = &[s(Center, Plain), s(Upper, Loops(20.0))];
    const DOUBLEC: &[Stroke] = &[s(Center, Plain), s(Upper, Loops(20.0)), s(Lower, Loops(20.0))];
    const TRIPLE: &[Stroke] = &[
        s(Center, Plain),
        s(Upper, Loops(20.0)),
        s(Lower, Loops(20.0)),
        s(Center, Loops(20.0)),
    ];
    const ATWALL: &[Stroke] = &[s(Center, Plain), s(Upper, Teeth(20.0))];
    const LC: &[Stroke] = &[s(Upper, Scallops(20.0)), s(Lower, Scallops(20.0))];

    match family {
        F::Doublea => (FENCE_WIDTH, DOUBLEA),
        F::Lwfence => (FENCE_WIDTH, LWFENCE),
        F::Hwfence => (FENCE_WIDTH, HWFENCE),
        F::Unsp => (FENCE_WIDTH, UNSP),
        F::Sfence => (FENCE_WIDTH, SFENCE),
        F::Dfence => (FENCE_WIDTH, DFENCE),
        F::Singlec => (FENCE_WIDTH, SINGLEC),
        F::Doublec => (FENCE_WIDTH, DOUBLEC),
        F::Triple => (FENCE_WIDTH, TRIPLE),
        F::Atwall => (FENCE_WIDTH, ATWALL),
        F::Lc => (LC_WIDTH, LC),
        _ => (FENCE_WIDTH, &[]),
    }
}

fn line_for(anchors: &[Point], offset: Offset, width: f64) -> Vec<Point> {
    match offset {
        Offset::Upper => offset_polyline(anchors, width, Side::Left),
        Offset::Lower => offset_polyline(anchors, width, Side::Right),
        Offset::Center => anchors.to_vec(),
    }
}

fn stroke_count(ctx: &DrawContext, path: &[Point], stroke: &Stroke) -> Result<usize> {
    match stroke.render {
        Render::Plain => Ok(path.len()),
        Render::XMarks(base) => strokes::xmarks_count(path, ctx.size(base)),
        Render::Loops(base) => strokes::loops_count(path, ctx.size(base)),
        Render::Teeth(base) => strokes::teeth_count(path, ctx.size(base)),
        Render::Scallops(base) => flot::scallop_count(path, ctx.size(base)),
    }
}

fn stroke_points(ctx: &DrawContext, path: Vec<Point>, stroke: &Stroke) -> Vec<Point> {
    let facing = stroke.offset.facing();
    match stroke.render {
        Render::Plain => {
            let mut line = path;
            close_run(&mut line, PenStyle::Line);
            line
        }
        Render::XMarks(base) => strokes::xmarks(&path, ctx.size(base)),
        Render::Loops(base) => strokes::loops(&path, ctx.size(base), facing),
        Render::Teeth(base) => strokes::teeth(&path, ctx.size(base), facing),
        Render::Scallops(base) => flot::scallops(&path, ctx.size(base), facing),
    }
}

pub fn fence_count(ctx: &DrawContext) -> Result<usize> {
    let (base_width, strokes) = fence_strokes(ctx.family);
    let width = ctx.size(base_width);
    let per_stroke = strokes
        .iter()
        .map(|stroke| stroke_count(ctx, &line_for(ctx.anchors, stroke.offset, width), stroke))
        .collect::<Result<Vec<_>>>()?;
    sum_points(per_stroke)
}

pub fn fence_generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    let (base_width, strokes) = fence_strokes(ctx.family);
    let width = ctx.size(base_width);
    let mut out = Vec::new();
    for stroke in strokes {
        let path = line_for(ctx.anchors, stroke.offset, width);
        out.extend(stroke_points(ctx, path, stroke));
    }
    Ok(out)
}

// ============================================================================
// AXIS OF ADVANCE
// ============================================================================

/// Nominal half-width of the axis shaft.
const AXIS_WIDTH: f64 = 20.0;

/// Nominal distance from the tip back to the arrow neck.
const NECK_LENGTH: f64 = 30.0;

/// Outline plus optional decorations.
#[derive(Debug, Clone, Copy, Default)]
struct AxisPlan {
    dashed: bool,
    neck_line: bool,
    filled_head: bool,
    bowtie: bool,
    fire: bool,
}

fn axis_plan(family: SymbolFamily) -> AxisPlan {
    use SymbolFamily as F;
    let plain = AxisPlan::default();
    match family {
        F::Catk => AxisPlan { dashed: true, ..plain },
        F::Main => AxisPlan { neck_line: true, ..plain },
        F::Spt => AxisPlan { filled_head: true, ..plain },
        F::Airaoa => AxisPlan { bowtie: true, ..plain },
        F::Catkbyfire => AxisPlan { dashed: true, fire: true, ..plain },
        F::Aaaaa => AxisPlan { bowtie: true, neck_line: true, ..plain },
        _ => plain,
    }
}

pub fn axis_count(ctx: &DrawContext) -> Result<usize> {
    let plan = axis_plan(ctx.family);
    let mut n = 2 * ctx.n() + 4;
    if plan.neck_line {
        n += 2;
    }
    if plan.filled_head {
        n += 4;
    }
    if plan.bowtie {
        n += 5;
    }
    if plan.fire {
        n += 5;
    }
    Ok(n)
}

pub fn axis_generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    let plan = axis_plan(ctx.family);
    let n = ctx.n();
    let tip = ctx.last();
    let prev = ctx.anchor(n - 2);
    let w = ctx.size(AXIS_WIDTH);

    let neck = extend_along(tip, prev, ctx.size(NECK_LENGTH));
    let mut shaft = ctx.anchors[..n - 1].to_vec();
    shaft.push(neck);

    let upper = offset_polyline(&shaft, w, Side::Left);
    let lower = offset_polyline(&shaft, w, Side::Right);
    let barb_up = offset_side(prev, tip, neck, Side::Left, 2.0 * w);
    let barb_low = offset_side(prev, tip, neck, Side::Right, 2.0 * w);

    let mut outline = Vec::with_capacity(2 * n + 4);
    outline.extend(upper.iter().copied());
    outline.extend([barb_up, tip, barb_low]);
    outline.extend(lower.iter().rev().copied());
    outline.push(upper[0]);
    close_run(&mut outline, if plan.dashed { PenStyle::Dash } else { PenStyle::Line });

    let mut out = outline;
    if plan.neck_line {
        out.extend(stroke(upper[n - 1], lower[n - 1]));
    }
    if plan.filled_head {
        out.extend([
            barb_up.with_style(PenStyle::Fill),
            tip.with_style(PenStyle::Fill),
            barb_low.with_style(PenStyle::Fill),
            barb_up.with_style(PenStyle::FillEnd),
        ]);
    }
    if plan.bowtie {
        let centre = midpoint(shaft[0], shaft[1]);
        out.extend(bowtie(centre, shaft[0], shaft[1], ctx.size(10.0), ctx.size(6.0)));
    }
    if plan.fire {
        let stem_end = extend_along(tip, prev, -ctx.size(20.0));
        let fire_tip = extend_along(tip, prev, -ctx.size(40.0));
        out.extend(stroke(tip, stem_end));
        out.extend(Head::scaled(ctx).open(fire_tip, stem_end));
    }

    Ok(out)
}
