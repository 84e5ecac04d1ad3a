//! Squall line: half sine waves of alternating sign.
//!
//! Each curve is laid out on a local x-axis starting at the segment's
//! first point, then rotated into the segment's orientation about that
//! point. The sign flips after every curve and the flip carries over into
//! the next segment, so the wave stays continuous around corners.

use std::f64::consts::PI;

use super::util::{motif_count_min, points_for, segments, total_motifs};
use crate::error::Result;
use crate::geometry::{angle_of, rotate_about, PenStyle, Point};

/// Nominal length of one curve.
pub const SQUALL_LENGTH: f64 = 10.0;

/// Nominal wave amplitude.
pub const SQUALL_AMPLITUDE: f64 = 5.0;

/// Points per curve.
const QUANTITY: usize = 6;

pub fn count(path: &[Point], length: f64) -> Result<usize> {
    if path.is_empty() {
        return Ok(0);
    }
    points_for(QUANTITY, total_motifs(path, length, 1)?, 1)
}

pub fn generate(path: &[Point], length: f64, amplitude: f64) -> Vec<Point> {
    let Some(&last) = path.last() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(count(path, length).unwrap_or(0));
    let mut sign = 1.0;

    for seg in segments(path) {
        let curves = motif_count_min(seg.length, length, 1);
        let step = seg.length / (curves * QUANTITY) as f64;
        let angle = angle_of(seg.start, seg.end);

        for c in 0..curves {
            for j in 0..QUANTITY {
                let x = (c * QUANTITY + j) as f64 * step;
                let y = sign * amplitude * (j as f64 * PI / QUANTITY as f64).sin();
                let local = Point::new(seg.start.x + x, seg.start.y + y);
                out.push(rotate_about(local, seg.start, angle));
            }
            sign = -sign;
        }
    }
    out.push(last.with_style(PenStyle::End));

    out
}
