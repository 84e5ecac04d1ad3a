//! Convex hull and bounding rectangle.
//!
//! Both work on anything with planar coordinates: the styled engine
//! [`Point`] as well as style-free `geo::Coord<f64>` values.

use crate::geometry::Point;

/// Anything with x/y coordinates.
pub trait Planar: Copy {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Planar for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Planar for geo::Coord<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

/// Twice the signed area of triangle `a, b, p`; positive when `p` is left of `a -> b` (y-up).
#[inline]
fn side_of<P: Planar>(a: P, b: P, p: P) -> f64 {
    (b.x() - a.x()) * (p.y() - a.y()) - (b.y() - a.y()) * (p.x() - a.x())
}

/// Convex hull by quickhull.
///
/// Starts at the lowest-x point (lowest y on ties) and runs counter-clockwise
/// in a y-up frame. Interior and collinear points are dropped. Inputs with
/// fewer than three points come back unchanged.
pub fn convex_hull<P: Planar>(points: &[P]) -> Vec<P> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = |a: &&P, b: &&P| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y()));
    let (Some(&a), Some(&b)) = (points.iter().min_by(first), points.iter().max_by(first)) else {
        return Vec::new();
    };
    if a.x() == b.x() && a.y() == b.y() {
        return vec![a];
    }

    let mut hull = Vec::with_capacity(points.len());
    hull.push(a);
    hull_side(points, a, b, &mut hull);
    hull.push(b);
    hull_side(points, b, a, &mut hull);
    hull
}

/// Append, in order from `a` to `b`, the hull points strictly right of `a -> b`.
fn hull_side<P: Planar>(points: &[P], a: P, b: P, out: &mut Vec<P>) {
    let right: Vec<P> = points.iter().copied().filter(|&p| side_of(a, b, p) < 0.0).collect();

    // Farthest from the baseline splits the set in two.
    let Some(far) = right
        .iter()
        .copied()
        .max_by(|&p, &q| (-side_of(a, b, p)).total_cmp(&(-side_of(a, b, q))))
    else {
        return;
    };

    hull_side(&right, a, far, out);
    out.push(far);
    hull_side(&right, far, b, out);
}

/// Axis-aligned bounds of the first `n` points as `(upper_left, lower_right)`
/// in screen space. `None` when there is nothing to bound.
pub fn min_bounding_rect<P: Planar>(points: &[P], n: usize) -> Option<(Point, Point)> {
    let slice = &points[..n.min(points.len())];
    if slice.is_empty() {
        return None;
    }

    let min_x = slice.iter().map(|p| p.x()).fold(f64::INFINITY, f64::min);
    let min_y = slice.iter().map(|p| p.y()).fold(f64::INFINITY, f64::min);
    let max_x = slice.iter().map(|p| p.x()).fold(f64::NEG_INFINITY, f64::max);
    let max_y = slice.iter().map(|p| p.y()).fold(f64::NEG_INFINITY, f64::max);

    Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
}
