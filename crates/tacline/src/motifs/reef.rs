//! Reef: a double baseline with bumps hatched along it.
//!
//! Output order is the baseline, then a parallel edge just left of it,
//! then the bumps. Bumps are not stretched: bump `k` starts exactly
//! `k * spacing` into its segment.

use super::util::{motif_count, points_for, segments, total_motifs};
use crate::channel::offset_polyline;
use crate::error::Result;
use crate::geometry::{close_run, PenStyle, Point, Side};

/// Nominal spacing between bumps.
pub const REEF_SPACING: f64 = 40.0;

/// Points per bump.
const BUMP_POINTS: usize = 5;

pub fn count(path: &[Point], spacing: f64) -> Result<usize> {
    if path.is_empty() {
        return Ok(0);
    }
    points_for(BUMP_POINTS, total_motifs(path, spacing, 0)?, 2 * path.len())
}

pub fn generate(path: &[Point], spacing: f64) -> Vec<Point> {
    if path.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(count(path, spacing).unwrap_or(0));

    let mut baseline = path.to_vec();
    close_run(&mut baseline, PenStyle::Line);
    out.extend(baseline);

    let mut edge = offset_polyline(path, spacing / 8.0, Side::Left);
    close_run(&mut edge, PenStyle::Line);
    out.extend(edge);

    let h = spacing / 4.0;
    for seg in segments(path) {
        for k in 0..motif_count(seg.length, spacing) {
            let x0 = k as f64 * spacing;
            out.push(seg.at(x0));
            out.push(seg.local(x0 + spacing * 0.25, h, Side::Left));
            out.push(seg.local(x0 + spacing * 0.5, h * 1.5, Side::Left));
            out.push(seg.local(x0 + spacing * 0.75, h, Side::Left));
            out.push(seg.at(x0 + spacing).with_style(PenStyle::End));
        }
    }

    out
}
