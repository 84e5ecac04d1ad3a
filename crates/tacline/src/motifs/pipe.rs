//! Pipe: dash, gap, dot, repeated.

use super::util::{interval, motif_count_min, points_for, segments, total_motifs};
use crate::error::Result;
use crate::geometry::{PenStyle, Point};

pub const PIPE_SPACING: f64 = 20.0;

pub fn count(path: &[Point], spacing: f64) -> Result<usize> {
    points_for(3, total_motifs(path, spacing, 1)?, 0)
}

pub fn generate(path: &[Point], spacing: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(count(path, spacing).unwrap_or(0));

    for seg in segments(path) {
        let m = motif_count_min(seg.length, spacing, 1);
        let l = interval(seg.length, m);
        for k in 0..m {
            let a = k as f64 * l;
            out.push(seg.at(a));
            out.push(seg.at(a + l * 0.5).with_style(PenStyle::End));
            out.push(seg.at(a + l * 0.75).with_style(PenStyle::Marker));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_interval_is_dash_then_dot() {
        let path = [Point::new(0.0, 0.0), Point::new(40.0, 0.0)];
        let pts = generate(&path, 20.0);
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[1], Point::styled(10.0, 0.0, PenStyle::End));
        assert_eq!(pts[2], Point::styled(15.0, 0.0, PenStyle::Marker));
        assert_eq!(pts[3].x, 20.0);
    }

    #[test]
    fn tiny_segment_still_gets_a_motif() {
        let path = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 3.0)];
        assert_eq!(count(&path, 20.0), Ok(6));
        assert_eq!(generate(&path, 20.0).len(), 6);
    }
}
