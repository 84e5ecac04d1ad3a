//! Segment clipping against the viewport rectangle.
//!
//! Only the clip-dependent families (FIX, BYDIF, FORDIF) consult the clip
//! rectangle: how many points they draw depends on how much of their base
//! segment is on screen.

use crate::geometry::{ClipRect, Point};

// ============================================================================
// SEGMENT-SEGMENT INTERSECTION
// ============================================================================

/// Intersection of segment `p1 -> p2` with segment `p3 -> p4`.
///
/// Returns the point and its parameter `t` along the first segment (0..=1).
/// Parallel and collinear segments report no intersection.
#[inline]
pub fn segment_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<(Point, f64)> {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);

    // Parallel or coincident
    if denom.abs() < 1e-10 {
        return None;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;

    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        let x = p1.x + ua * (p2.x - p1.x);
        let y = p1.y + ua * (p2.y - p1.y);
        Some((Point::new(x, y), ua))
    } else {
        None
    }
}

// ============================================================================
// SEGMENT-RECTANGLE CLIPPING
// ============================================================================

/// Clip the segment `p -> q` to `rect`.
///
/// Each of the four sides is tested for an intersection; the crossings are
/// ordered by their parameter along the direction of travel. An endpoint
/// inside the rectangle is kept as is, an outside one is replaced by the
/// first (entry) or last (exit) crossing. Returns `None` when no part of the
/// segment is inside, or when it only grazes a corner.
pub fn bound_segment(p: Point, q: Point, rect: &ClipRect) -> Option<(Point, Point)> {
    let p_inside = rect.contains(p);
    let q_inside = rect.contains(q);
    if p_inside && q_inside {
        return Some((p, q));
    }

    let top_left = Point::new(rect.min_x, rect.min_y);
    let top_right = Point::new(rect.max_x, rect.min_y);
    let bottom_left = Point::new(rect.min_x, rect.max_y);
    let bottom_right = Point::new(rect.max_x, rect.max_y);
    let sides = [
        (top_left, bottom_left),
        (top_right, bottom_right),
        (top_left, top_right),
        (bottom_left, bottom_right),
    ];

    let mut crossings: Vec<(Point, f64)> = sides
        .iter()
        .filter_map(|&(a, b)| segment_intersection(p, q, a, b))
        .collect();
    crossings.sort_by(|a, b| a.1.total_cmp(&b.1));

    let (first, last) = match (crossings.first(), crossings.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return None,
    };

    let start = if p_inside { p } else { first.0 };
    let end = if q_inside { q } else { last.0 };

    // Both ends outside and the crossings collapse to one point: a corner graze.
    if !p_inside && !q_inside && (last.1 - first.1).abs() < 1e-12 {
        return None;
    }

    Some((start.with_style(p.style), end.with_style(q.style)))
}

/// The visible part of `p -> q`, or the whole segment when there is no clip.
#[inline]
pub fn visible_segment(p: Point, q: Point, clip: Option<&ClipRect>) -> Option<(Point, Point)> {
    match clip {
        Some(rect) => bound_segment(p, q, rect),
        None => Some((p, q)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
