//! Small repeated strokes used by the fence families: X-marks, loops and teeth.

use std::f64::consts::PI;

use super::util::{interval, motif_count, motif_count_min, points_for, segments, total_motifs};
use crate::error::Result;
use crate::geometry::{PenStyle, Point, Side};

// ============================================================================
// X-MARKS
// ============================================================================

pub fn xmarks_count(path: &[Point], spacing: f64) -> Result<usize> {
    points_for(4, total_motifs(path, spacing, 0)?, 0)
}

/// One X per interval, centred, with arms `spacing / 4` long on each axis.
pub fn xmarks(path: &[Point], spacing: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(xmarks_count(path, spacing).unwrap_or(0));
    let half = spacing / 4.0;

    for seg in segments(path) {
        let m = motif_count(seg.length, spacing);
        let l = interval(seg.length, m);
        for k in 0..m {
            let c = (k as f64 + 0.5) * l;
            out.push(seg.local(c - half, half, Side::Left));
            out.push(seg.local(c + half, half, Side::Right).with_style(PenStyle::End));
            out.push(seg.local(c - half, half, Side::Right));
            out.push(seg.local(c + half, half, Side::Left).with_style(PenStyle::End));
        }
    }

    out
}

// ============================================================================
// LOOPS
// ============================================================================

/// Points per loop.
const LOOP_POINTS: usize = 8;

pub fn loops_count(path: &[Point], spacing: f64) -> Result<usize> {
    points_for(LOOP_POINTS, total_motifs(path, spacing, 1)?, 0)
}

/// A chain of half-ellipses bulging to `side`, one per interval.
pub fn loops(path: &[Point], spacing: f64, side: Side) -> Vec<Point> {
    let mut out = Vec::with_capacity(loops_count(path, spacing).unwrap_or(0));

    for seg in segments(path) {
        let m = motif_count_min(seg.length, spacing, 1);
        let l = interval(seg.length, m);
        let rx = l / 2.0;
        let ry = l / 3.0;
        for k in 0..m {
            let c = (k as f64 + 0.5) * l;
            for j in 0..LOOP_POINTS {
                let theta = PI - j as f64 * PI / (LOOP_POINTS - 1) as f64;
                let p = seg.local(c + rx * theta.cos(), ry * theta.sin(), side);
                let style = if j + 1 == LOOP_POINTS { PenStyle::End } else { PenStyle::Line };
                out.push(p.with_style(style));
            }
        }
    }

    out
}

// ============================================================================
// TEETH
// ============================================================================

pub fn teeth_count(path: &[Point], spacing: f64) -> Result<usize> {
    points_for(3, total_motifs(path, spacing, 0)?, 0)
}

/// Open triangular teeth pointing to `side`.
pub fn teeth(path: &[Point], spacing: f64, side: Side) -> Vec<Point> {
    let mut out = Vec::with_capacity(teeth_count(path, spacing).unwrap_or(0));

    for seg in segments(path) {
        let m = motif_count(seg.length, spacing);
        let l = interval(seg.length, m);
        for k in 0..m {
            let a = k as f64 * l;
            out.push(seg.at(a + l * 0.25));
            out.push(seg.local(a + l * 0.5, l / 3.0, side));
            out.push(seg.at(a + l * 0.75).with_style(PenStyle::End));
        }
    }

    out
}
