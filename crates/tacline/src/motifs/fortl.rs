//! Fortified line: a square wave riding on the path.

use super::util::{interval, motif_count_min, points_for, segments, total_motifs};
use crate::error::Result;
use crate::geometry::{PenStyle, Point, Side};

pub const FORTL_SPACING: f64 = 20.0;

pub fn count(path: &[Point], spacing: f64) -> Result<usize> {
    if path.is_empty() {
        return Ok(0);
    }
    points_for(4, total_motifs(path, spacing, 1)?, 1)
}

pub fn generate(path: &[Point], spacing: f64) -> Vec<Point> {
    let Some(&last) = path.last() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(count(path, spacing).unwrap_or(0));
    let h = spacing / 2.0;

    for seg in segments(path) {
        let m = motif_count_min(seg.length, spacing, 1);
        let l = interval(seg.length, m);
        for k in 0..m {
            let a = k as f64 * l;
            let mid = a + l * 0.5;
            out.push(seg.at(a));
            out.push(seg.local(a, h, Side::Left));
            out.push(seg.local(mid, h, Side::Left));
            out.push(seg.at(mid));
        }
    }
    out.push(last.with_style(PenStyle::End));

    out
}
