//! Wavy lines: FLOT scallops and the weather-front family.
//!
//! Every segment is split into `max(1, floor(d / spacing))` equal motif
//! intervals. Intervals are numbered globally along the whole path (`g`),
//! and the alternating fronts pick their glyph by the parity of `g`, so a
//! pattern carries on across corners instead of restarting per segment.

use std::f64::consts::PI;

use crate::config::DrawContext;
use crate::error::Result;
use crate::family::SymbolFamily;
use crate::geometry::{close_run, PenStyle, Point, Side};
use crate::motifs::util::{interval, motif_count_min, points_for, segments, sum_points, total_motifs, Segment};

/// Nominal motif spacing.
pub const FLOT_SPACING: f64 = 20.0;

const SCALLOP_POINTS: usize = 10;
const SEMICIRCLE_POINTS: usize = 9;

/// One motif slot on the path.
#[derive(Debug, Clone, Copy)]
struct Slot {
    seg: Segment,
    start: f64,
    length: f64,
}

impl Slot {
    fn centre(&self) -> f64 {
        self.start + self.length / 2.0
    }
}

fn slots(path: &[Point], spacing: f64) -> Vec<Slot> {
    let mut out = Vec::new();
    for seg in segments(path) {
        let m = motif_count_min(seg.length, spacing, 1);
        let l = interval(seg.length, m);
        out.extend((0..m).map(|k| Slot { seg, start: k as f64 * l, length: l }));
    }
    out
}

/// Total motif slots `M` along `path`.
pub fn slot_count(path: &[Point], spacing: f64) -> Result<usize> {
    total_motifs(path, spacing, 1)
}

// ============================================================================
// SCALLOPS
// ============================================================================

pub fn scallop_count(path: &[Point], spacing: f64) -> Result<usize> {
    if path.is_empty() {
        return Ok(0);
    }
    points_for(SCALLOP_POINTS, slot_count(path, spacing)?, 1)
}

/// Semicircular scallops bulging to `side`, one per slot, then the last anchor.
///
/// Each scallop starts on the path and stops one sample short of the next
/// slot, so x increases strictly along a straight path.
pub fn scallops(path: &[Point], spacing: f64, side: Side) -> Vec<Point> {
    let Some(&last) = path.last() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(scallop_count(path, spacing).unwrap_or(0));
    for slot in slots(path, spacing) {
        let r = slot.length / 2.0;
        for j in 0..SCALLOP_POINTS {
            let theta = PI - j as f64 * PI / SCALLOP_POINTS as f64;
            out.push(slot.seg.local(slot.start + r + r * theta.cos(), r * theta.sin(), side));
        }
    }
    out.push(last.with_style(PenStyle::End));
    out
}

// ============================================================================
// FRONT GLYPHS
// ============================================================================

/// A decoration placed in one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Semicircle { side: Side, filled: bool },
    Triangle { side: Side, filled: bool },
}

impl Glyph {
    const WARM: Glyph = Glyph::Semicircle { side: Side::Left, filled: true };
    const COLD: Glyph = Glyph::Triangle { side: Side::Left, filled: true };
    const WARM_BEHIND: Glyph = Glyph::Semicircle { side: Side::Right, filled: true };

    fn size(&self) -> usize {
        match self {
            Glyph::Semicircle { .. } => SEMICIRCLE_POINTS,
            Glyph::Triangle { filled: true, .. } => 4,
            Glyph::Triangle { filled: false, .. } => 3,
        }
    }

    fn draw(&self, slot: &Slot, out: &mut Vec<Point>) {
        let c = slot.centre();
        let l = slot.length;
        match *self {
            Glyph::Semicircle { side, filled } => {
                let r = l / 4.0;
                let mut run: Vec<Point> = (0..SEMICIRCLE_POINTS)
                    .map(|j| {
                        let theta = PI - j as f64 * PI / (SEMICIRCLE_POINTS - 1) as f64;
                        slot.seg.local(c + r * theta.cos(), r * theta.sin(), side)
                    })
                    .collect();
                close_run(&mut run, if filled { PenStyle::Fill } else { PenStyle::Line });
                out.extend(run);
            }
            Glyph::Triangle { side, filled } => {
                let a = slot.seg.at(c - l / 4.0);
                let apex = slot.seg.local(c, l / 3.0, side);
                let b = slot.seg.at(c + l / 4.0);
                if filled {
                    out.push(a.with_style(PenStyle::Fill));
                    out.push(apex.with_style(PenStyle::Fill));
                    out.push(b.with_style(PenStyle::Fill));
                    out.push(a.with_style(PenStyle::FillEnd));
                } else {
                    out.push(a);
                    out.push(apex);
                    out.push(b.with_style(PenStyle::End));
                }
            }
        }
    }
}

/// Which slots carry which glyph.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    Every(Glyph),
    /// First glyph on even slots, second on odd ones
    Alternate(Glyph, Glyph),
    EvenOnly(Glyph),
    OddOnly(Glyph),
    /// Glyphs on even slots only, themselves alternating
    EvenAlternate(Glyph, Glyph),
    /// Glyphs on odd slots only, themselves alternating
    OddAlternate(Glyph, Glyph),
}

impl Pattern {
    fn glyph_at(&self, g: usize) -> Option<Glyph> {
        let even = g % 2 == 0;
        let pick = |a: Glyph, b: Glyph| if (g / 2) % 2 == 0 { a } else { b };
        match *self {
            Pattern::Every(glyph) => Some(glyph),
            Pattern::Alternate(a, b) => Some(if even { a } else { b }),
            Pattern::EvenOnly(glyph) => even.then_some(glyph),
            Pattern::OddOnly(glyph) => (!even).then_some(glyph),
            Pattern::EvenAlternate(a, b) => even.then(|| pick(a, b)),
            Pattern::OddAlternate(a, b) => (!even).then(|| pick(a, b)),
        }
    }
}

/// How a wavy family is drawn.
#[derive(Debug, Clone, Copy)]
enum Plan {
    Scallops,
    /// Solid anchor polyline, then glyphs
    Solid(Pattern),
    /// A dash per slot, each followed by its glyph if any
    Dashed(Pattern),
    /// A dash and two dots per slot
    Instability,
}

fn plan(family: SymbolFamily) -> Plan {
    use SymbolFamily as F;
    let open_warm = Glyph::Semicircle { side: Side::Left, filled: false };
    let open_cold = Glyph::Triangle { side: Side::Left, filled: false };
    match family {
        F::Wf => Plan::Solid(Pattern::Every(Glyph::WARM)),
        F::Uwf => Plan::Solid(Pattern::Every(open_warm)),
        F::Cf => Plan::Solid(Pattern::Every(Glyph::COLD)),
        F::Ucf => Plan::Solid(Pattern::Every(open_cold)),
        F::Occluded => Plan::Solid(Pattern::Alternate(Glyph::COLD, Glyph::WARM)),
        F::Sf => Plan::Solid(Pattern::Alternate(Glyph::COLD, Glyph::WARM_BEHIND)),
        F::Wfg => Plan::Dashed(Pattern::EvenOnly(Glyph::WARM)),
        F::Cfg => Plan::Dashed(Pattern::EvenOnly(Glyph::COLD)),
        F::Wfy => Plan::Dashed(Pattern::OddOnly(Glyph::WARM)),
        F::Cfy => Plan::Dashed(Pattern::OddOnly(Glyph::COLD)),
        F::Sfg => Plan::Dashed(Pattern::EvenAlternate(Glyph::COLD, Glyph::WARM_BEHIND)),
        F::Sfy => Plan::Dashed(Pattern::OddAlternate(Glyph::COLD, Glyph::WARM_BEHIND)),
        F::Ofy => Plan::Dashed(Pattern::OddAlternate(Glyph::COLD, Glyph::WARM)),
        F::Instability => Plan::Instability,
        _ => Plan::Scallops,
    }
}

fn glyph_points(pattern: Pattern, slots: usize) -> Result<usize> {
    sum_points((0..slots).filter_map(|g| pattern.glyph_at(g)).map(|glyph| glyph.size()))
}

fn dash(slot: &Slot, out: &mut Vec<Point>) {
    out.push(slot.seg.at(slot.start));
    out.push(slot.seg.at(slot.start + slot.length * 0.6).with_style(PenStyle::End));
}

// ============================================================================
// FAMILY CONSTRUCTIONS
// ============================================================================

pub fn count(ctx: &DrawContext) -> Result<usize> {
    let spacing = ctx.size(FLOT_SPACING);
    let path = ctx.anchors;
    let m = slot_count(path, spacing)?;
    match plan(ctx.family) {
        Plan::Scallops => scallop_count(path, spacing),
        Plan::Solid(pattern) => sum_points([path.len(), glyph_points(pattern, m)?]),
        Plan::Dashed(pattern) => sum_points([points_for(2, m, 0)?, glyph_points(pattern, m)?]),
        Plan::Instability => points_for(4, m, 0),
    }
}

pub fn generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    let spacing = ctx.size(FLOT_SPACING);
    let path = ctx.anchors;

    let plan = plan(ctx.family);
    if let Plan::Scallops = plan {
        return Ok(scallops(path, spacing, Side::Left));
    }

    let slots = slots(path, spacing);
    let mut out = Vec::new();
    match plan {
        Plan::Solid(pattern) => {
            let mut line = path.to_vec();
            close_run(&mut line, PenStyle::Line);
            out.extend(line);
            for (g, slot) in slots.iter().enumerate() {
                if let Some(glyph) = pattern.glyph_at(g) {
                    glyph.draw(slot, &mut out);
                }
            }
        }
        Plan::Dashed(pattern) => {
            for (g, slot) in slots.iter().enumerate() {
                dash(slot, &mut out);
                if let Some(glyph) = pattern.glyph_at(g) {
                    glyph.draw(slot, &mut out);
                }
            }
        }
        Plan::Instability => {
            for slot in &slots {
                dash(slot, &mut out);
                for t in [0.75, 0.9] {
                    out.push(slot.seg.at(slot.start + slot.length * t).with_style(PenStyle::Marker));
                }
            }
        }
        Plan::Scallops => {}
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    fn run(family: SymbolFamily, anchors: &[Point]) -> (usize, Vec<Point>) {
        let config = RenderConfig::new(family);
        let ctx = config.context(anchors);
        (count(&ctx).unwrap(), generate(&ctx).unwrap())
    }

    fn line(len: f64) -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(len, 0.0)]
    }

    #[test]
    fn flot_hundred_pixels() {
        let (n, pts) = run(SymbolFamily::Flot, &line(100.0));
        assert_eq!(n, 51);
        assert_eq!(pts.len(), 51);
        for w in pts.windows(2) {
            assert!(w[1].x > w[0].x);
        }
        assert!(pts.iter().all(|p| p.y <= 0.0 && p.y >= -10.0));
        assert!(pts.iter().any(|p| p.y < -9.9));
        assert_eq!(pts[50].style, PenStyle::End);
    }

    #[test]
    fn closed_forms_hold() {
        // 7 slots of 20 px: M = 7, ceil = 4, floor = 3
        let path = line(140.0);
        let n = path.len();
        let m = 7;
        let cases = [
            (SymbolFamily::Wf, n + 9 * m),
            (SymbolFamily::Uwf, n + 9 * m),
            (SymbolFamily::Cf, n + 4 * m),
            (SymbolFamily::Ucf, n + 3 * m),
            (SymbolFamily::Occluded, n + 4 * 4 + 9 * 3),
            (SymbolFamily::Sf, n + 4 * 4 + 9 * 3),
            (SymbolFamily::Wfg, 2 * m + 9 * 4),
            (SymbolFamily::Cfg, 2 * m + 4 * 4),
            (SymbolFamily::Wfy, 2 * m + 9 * 3),
            (SymbolFamily::Cfy, 2 * m + 4 * 3),
            // G = 4: 2 triangles, 2 semicircles
            (SymbolFamily::Sfg, 2 * m + 4 * 2 + 9 * 2),
            // G = 3: 2 triangles, 1 semicircle
            (SymbolFamily::Sfy, 2 * m + 4 * 2 + 9),
            (SymbolFamily::Ofy, 2 * m + 4 * 2 + 9),
            (SymbolFamily::Instability, 4 * m),
            (SymbolFamily::Flot, 10 * m + 1),
        ];
        for (family, expected) in cases {
            let (counted, pts) = run(family, &path);
            assert_eq!(counted, expected, "{family}");
            assert_eq!(pts.len(), expected, "{family}");
        }
    }

    #[test]
    fn stationary_front_alternates_sides() {
        let (_, pts) = run(SymbolFamily::Sf, &line(40.0));
        // baseline 2, triangle 4 (apex up), semicircle 9 (bulging down)
        assert!(pts[3].y < 0.0);
        assert!(pts[2 + 4 + 4].y > 0.0);
    }

    #[test]
    fn short_segment_still_gets_one_slot() {
        assert_eq!(slot_count(&line(5.0), 20.0), Ok(1));
        let (n, pts) = run(SymbolFamily::Cf, &line(5.0));
        assert_eq!(n, 2 + 4);
        assert_eq!(pts.len(), n);
    }
}
