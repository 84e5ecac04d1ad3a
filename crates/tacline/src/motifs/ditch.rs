//! Anti-tank ditch: spikes along the path, then the path back.
//!
//! The output is three runs concatenated in a fixed order:
//!
//! 1. spike triplets (foot, apex, foot) for every segment long enough,
//!    with a circle marker between every pair of spikes in the marked
//!    variant;
//! 2. the anchors in reverse order, as one `Dash … DashEnd` run, a pen
//!    code no spike run uses;
//! 3. the base points: first and last foot of every spiked segment.
//!
//! The downstream path builder relies on this order to close the shape,
//! and the very last base point carries the terminal `End`.

use super::util::{motif_count, points_for, segments, sum_points, Segment};
use crate::error::Result;
use crate::geometry::{intersect_lines, LineEq, PenStyle, Point, Side};

/// Nominal spike spacing.
pub const DITCH_SPACING: f64 = 20.0;

/// Spike height as a fraction of the spacing.
const HEIGHT_FACTOR: f64 = 0.6;

/// How the spikes are styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitchStyle {
    /// Open spikes (`ATDITCH`)
    Open,
    /// Filled spikes (`ATDITCHC`)
    Filled,
    /// Open spikes with a marker between each pair (`ATDITCHM`)
    Marked,
}

/// Spikes on a segment: none below two spacings.
#[inline]
fn spikes_on(length: f64, spacing: f64) -> usize {
    if length >= 2.0 * spacing {
        motif_count(length, spacing)
    } else {
        0
    }
}

pub fn count(path: &[Point], spacing: f64, style: DitchStyle) -> Result<usize> {
    if path.is_empty() {
        return Ok(0);
    }
    let per_segment = segments(path)
        .map(|seg| {
            let sp = spikes_on(seg.length, spacing);
            let markers = if style == DitchStyle::Marked { sp / 2 } else { 0 };
            let base = if sp > 0 { 2 } else { 0 };
            points_for(3, sp, markers + base)
        })
        .collect::<Result<Vec<_>>>()?;
    sum_points(per_segment.into_iter().chain([path.len()]))
}

/// Line perpendicular to `seg` through `at`.
fn perpendicular_through(seg: &Segment, at: Point) -> LineEq {
    let (nx, ny) = seg.normal();
    LineEq::through(at, Point::new(at.x + nx, at.y + ny))
}

pub fn generate(path: &[Point], spacing: f64, style: DitchStyle) -> Vec<Point> {
    if path.is_empty() {
        return Vec::new();
    }

    let (vertex, closing) = match style {
        DitchStyle::Filled => (PenStyle::Fill, PenStyle::FillEnd),
        DitchStyle::Open | DitchStyle::Marked => (PenStyle::Line, PenStyle::End),
    };
    let height = spacing * HEIGHT_FACTOR;
    let half_foot = spacing / 3.0;

    let mut spikes = Vec::new();
    let mut base_points = Vec::new();

    for seg in segments(path) {
        let n = spikes_on(seg.length, spacing);
        if n == 0 {
            continue;
        }

        let base_line = LineEq::through(seg.start, seg.end);
        let upper_line = LineEq::through(
            seg.local(0.0, height, Side::Left),
            seg.local(seg.length, height, Side::Left),
        );
        let lead = (seg.length - n as f64 * spacing) / 2.0;

        let mut first_foot = None;
        let mut last_foot = seg.start;

        for k in 0..n {
            let centre = lead + (k as f64 + 0.5) * spacing;

            let foot_a = seg.at(centre - half_foot);
            let foot_b = seg.at(centre + half_foot);
            let apex_guess = seg.local(centre, height, Side::Left);

            let a = intersect_lines(&perpendicular_through(&seg, foot_a), &base_line, foot_a);
            let apex = intersect_lines(&perpendicular_through(&seg, apex_guess), &upper_line, apex_guess);
            let b = intersect_lines(&perpendicular_through(&seg, foot_b), &base_line, foot_b);

            spikes.push(a.with_style(vertex));
            spikes.push(apex.with_style(vertex));
            spikes.push(b.with_style(closing));

            if style == DitchStyle::Marked && k % 2 == 1 {
                let between = seg.at(lead + k as f64 * spacing);
                spikes.push(between.with_style(PenStyle::Marker));
            }

            first_foot.get_or_insert(a);
            last_foot = b;
        }

        if let Some(first) = first_foot {
            base_points.push(first.with_style(PenStyle::Line));
            base_points.push(last_foot.with_style(PenStyle::End));
        }
    }

    let mut reversed: Vec<Point> = path.iter().rev().map(|p| p.with_style(PenStyle::Dash)).collect();
    if let Some(last) = reversed.last_mut() {
        last.style = PenStyle::DashEnd;
    }

    let mut out = Vec::with_capacity(spikes.len() + reversed.len() + base_points.len());
    out.extend(spikes);
    out.extend(reversed);
    out.extend(base_points);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(len: f64) -> [Point; 2] {
        [Point::new(0.0, 0.0), Point::new(len, 0.0)]
    }

    #[test]
    fn short_segments_have_no_spikes() {
        let path = straight(39.0);
        assert_eq!(count(&path, 20.0, DitchStyle::Open), Ok(2));
        let pts = generate(&path, 20.0, DitchStyle::Open);
        assert_eq!(pts.len(), 2);
        // Only the reversed anchors remain.
        assert_eq!(pts[0].x, 39.0);
        assert_eq!(pts[1].style, PenStyle::DashEnd);
    }

    #[test]
    fn spikes_are_centred_and_point_left() {
        let path = straight(50.0);
        let pts = generate(&path, 20.0, DitchStyle::Open);
        // 2 spikes: 6 + reversed 2 + base 2
        assert_eq!(pts.len(), 10);
        assert_eq!(count(&path, 20.0, DitchStyle::Open), Ok(pts.len()));
        let apex = pts[1];
        assert!((apex.x - 15.0).abs() < 1e-9);
        assert!((apex.y + 12.0).abs() < 1e-9);
        assert_eq!(pts[2].style, PenStyle::End);
    }

    #[test]
    fn output_order_is_spikes_reversed_anchors_base() {
        let path = [Point::new(0.0, 0.0), Point::new(60.0, 0.0), Point::new(60.0, 10.0)];
        let pts = generate(&path, 20.0, DitchStyle::Filled);
        // 3 spikes on the first segment, none on the second.
        assert_eq!(pts.len(), 9 + 3 + 2);
        assert_eq!(pts[0].style, PenStyle::Fill);
        assert_eq!(pts[2].style, PenStyle::FillEnd);
        assert_eq!((pts[9].x, pts[9].y), (60.0, 10.0));
        assert_eq!((pts[11].x, pts[11].y), (0.0, 0.0));
        assert_eq!(pts[9].style, PenStyle::Dash);
        assert_eq!(pts[11].style, PenStyle::DashEnd);
        assert_eq!(pts[12].style, PenStyle::Line);
        assert_eq!(pts[13].style, PenStyle::End);
        assert_eq!(pts[12], pts[0].with_style(PenStyle::Line));
    }

    #[test]
    fn marked_variant_adds_a_marker_per_pair() {
        let path = straight(100.0);
        let pts = generate(&path, 20.0, DitchStyle::Marked);
        let markers = pts.iter().filter(|p| p.style == PenStyle::Marker).count();
        assert_eq!(markers, 2);
        assert_eq!(count(&path, 20.0, DitchStyle::Marked), Ok(pts.len()));
        // Between spikes 0 and 1, on the base line.
        let first = pts.iter().find(|p| p.style == PenStyle::Marker).copied();
        assert_eq!(first.map(|p| (p.x, p.y)), Some((20.0, 0.0)));
    }

    #[test]
    fn vertical_segments_still_spike() {
        let path = [Point::new(5.0, 0.0), Point::new(5.0, 80.0)];
        let pts = generate(&path, 20.0, DitchStyle::Open);
        assert_eq!(count(&path, 20.0, DitchStyle::Open), Ok(pts.len()));
        assert!(pts.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn reversed_anchors_never_share_a_spike_style() {
        let path = [Point::new(0.0, 0.0), Point::new(60.0, 0.0)];
        for style in [DitchStyle::Open, DitchStyle::Filled, DitchStyle::Marked] {
            let pts = generate(&path, 20.0, style);
            // 3 spikes (9, plus 1 marker when marked), 2 reversed anchors, 2 base points.
            let spike_run = 9 + usize::from(style == DitchStyle::Marked);
            let (spikes, rest) = pts.split_at(spike_run);
            let reversed = &rest[..2];

            assert_eq!((reversed[0].x, reversed[1].x), (60.0, 0.0));
            assert_eq!(reversed[0].style, PenStyle::Dash);
            assert_eq!(reversed[1].style, PenStyle::DashEnd);
            for p in reversed {
                assert!(spikes.iter().all(|s| s.style != p.style), "{style:?}");
            }
            assert_eq!(rest[3].style, PenStyle::End);
        }
    }

    #[test]
    fn absurd_lengths_are_refused() {
        let path = straight(1e22);
        assert!(count(&path, 20.0, DitchStyle::Marked).is_err());
    }
}
