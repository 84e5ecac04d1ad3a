//! Shared helpers for motif placement.
//!
//! Every motif generator walks the path segment by segment and places a
//! whole number of motifs on each one. Counting and generation both go
//! through [`segments`] and [`motif_count`], so they can never disagree on
//! how many motifs a segment carries.
//!
//! Counts are built with [`points_for`] and [`sum_points`], which refuse
//! anything past [`MAX_POINTS`] instead of overflowing. A path long enough
//! to need more points than a buffer can hold is an error, not a panic.

use crate::error::{GeometryError, Result};
use crate::geometry::{distance, left_normal, unit_direction, Point, Side};

/// Most points one graphic may have: buffer sizes are handed out as `i32`.
pub const MAX_POINTS: usize = i32::MAX as usize;

/// `n`, unless it is past [`MAX_POINTS`].
#[inline]
pub fn within_limit(n: usize) -> Result<usize> {
    if n <= MAX_POINTS {
        Ok(n)
    } else {
        Err(GeometryError::TooManyPoints { limit: MAX_POINTS })
    }
}

/// `per_motif * motifs + extra`, checked.
pub fn points_for(per_motif: usize, motifs: usize, extra: usize) -> Result<usize> {
    per_motif
        .checked_mul(motifs)
        .and_then(|n| n.checked_add(extra))
        .ok_or(GeometryError::TooManyPoints { limit: MAX_POINTS })
        .and_then(within_limit)
}

/// Checked sum of point (or motif) counts.
pub fn sum_points(counts: impl IntoIterator<Item = usize>) -> Result<usize> {
    counts.into_iter().try_fold(0usize, |total, n| {
        total
            .checked_add(n)
            .ok_or(GeometryError::TooManyPoints { limit: MAX_POINTS })
            .and_then(within_limit)
    })
}

/// One segment of a polyline with its pre-computed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub length: f64,
    /// Unit direction, `(1, 0)` for a zero-length segment
    pub dir: (f64, f64),
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: distance(start, end),
            dir: unit_direction(start, end),
        }
    }

    /// Left-hand unit normal (screen "up" when heading +x).
    #[inline]
    pub fn normal(&self) -> (f64, f64) {
        left_normal(self.dir)
    }

    /// Point `along` pixels from the start, pushed `across` pixels to `side`.
    #[inline]
    pub fn local(&self, along: f64, across: f64, side: Side) -> Point {
        let (nx, ny) = self.normal();
        let d = across * side.sign();
        Point::new(
            self.start.x + self.dir.0 * along + nx * d,
            self.start.y + self.dir.1 * along + ny * d,
        )
    }

    /// Point `along` pixels from the start, on the segment's line.
    #[inline]
    pub fn at(&self, along: f64) -> Point {
        Point::new(self.start.x + self.dir.0 * along, self.start.y + self.dir.1 * along)
    }
}

/// Consecutive segments of `path`. Empty for fewer than two points.
pub fn segments(path: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    path.windows(2).map(|w| Segment::new(w[0], w[1]))
}

/// Segments of `path` plus the closing segment back to the first point.
pub fn closed_segments(path: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let closing = match (path.last(), path.first()) {
        (Some(&last), Some(&first)) if path.len() > 1 => Some(Segment::new(last, first)),
        _ => None,
    };
    segments(path).chain(closing)
}

/// Whole motifs of size `spacing` that fit in `length`.
///
/// Zero for a non-positive or non-finite spacing. Saturates at
/// `usize::MAX` for absurdly long segments; [`sum_points`] rejects that.
#[inline]
pub fn motif_count(length: f64, spacing: f64) -> usize {
    if !spacing.is_finite() || spacing <= 0.0 || !length.is_finite() || length <= 0.0 {
        return 0;
    }
    (length / spacing).floor() as usize
}

/// [`motif_count`] clamped to at least `min`.
#[inline]
pub fn motif_count_min(length: f64, spacing: f64, min: usize) -> usize {
    motif_count(length, spacing).max(min)
}

/// Total motifs over all segments of `path`.
pub fn total_motifs(path: &[Point], spacing: f64, min: usize) -> Result<usize> {
    sum_points(segments(path).map(|s| motif_count_min(s.length, spacing, min)))
}

/// Interval length when `count` motifs share `length` equally.
#[inline]
pub fn interval(length: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { length / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motif_count_floors() {
        assert_eq!(motif_count(100.0, 40.0), 2);
        assert_eq!(motif_count(39.9, 40.0), 0);
        assert_eq!(motif_count(100.0, 0.0), 0);
        assert_eq!(motif_count(100.0, f64::NAN), 0);
    }

    #[test]
    fn huge_paths_are_refused_not_overflowed() {
        let path = [Point::new(0.0, 0.0), Point::new(1e22, 0.0)];
        assert_eq!(motif_count(1e22, 20.0), usize::MAX);
        assert_eq!(total_motifs(&path, 20.0, 1), Err(GeometryError::TooManyPoints { limit: MAX_POINTS }));

        let many = [Point::new(0.0, 0.0), Point::new(1e150, 0.0), Point::new(0.0, 0.0)];
        assert!(total_motifs(&many, 20.0, 0).is_err());
    }

    #[test]
    fn checked_arithmetic_stops_at_the_limit() {
        assert_eq!(points_for(3, 4, 1), Ok(13));
        assert_eq!(points_for(1, MAX_POINTS, 0), Ok(MAX_POINTS));
        assert!(points_for(1, MAX_POINTS, 1).is_err());
        assert!(points_for(usize::MAX, 2, 0).is_err());
        assert_eq!(sum_points([1, 2, 3]), Ok(6));
        assert!(sum_points([usize::MAX, 1]).is_err());
        assert!(sum_points([MAX_POINTS, 1]).is_err());
    }

    #[test]
    fn clamp_gives_short_segments_one_motif() {
        assert_eq!(motif_count_min(5.0, 20.0, 1), 1);
        assert_eq!(motif_count_min(0.0, 20.0, 1), 1);
        assert_eq!(motif_count_min(65.0, 20.0, 1), 3);
    }

    #[test]
    fn zero_length_segment_points_along_x() {
        let p = Point::new(3.0, 3.0);
        let seg = Segment::new(p, p);
        assert_eq!(seg.length, 0.0);
        assert_eq!(seg.dir, (1.0, 0.0));
    }

    #[test]
    fn closed_segments_adds_closing_edge() {
        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        let segs: Vec<_> = closed_segments(&tri).collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2].end, tri[0]);
        assert_eq!(closed_segments(&tri[..1]).count(), 0);
    }

    #[test]
    fn local_frame_left_is_up_on_screen() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let p = seg.local(4.0, 2.0, Side::Left);
        assert_eq!((p.x, p.y), (4.0, -2.0));
        let q = seg.local(4.0, 2.0, Side::Right);
        assert_eq!((q.x, q.y), (4.0, 2.0));
    }
}
