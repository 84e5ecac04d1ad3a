//! Building blocks shared by the glyph constructions: arrowheads, ticks,
//! bowties, diamonds and X marks. Each returns a fixed-size array so the
//! point count of every glyph is visible in its type.

use crate::config::DrawContext;
use crate::geometry::{extend_along, offset_side, unit_direction, left_normal, PenStyle, Point, Side};

/// Nominal arrowhead length.
pub const ARROW_LENGTH: f64 = 20.0;

/// Nominal arrowhead half-width.
pub const ARROW_HALF_WIDTH: f64 = 10.0;

/// Arrowhead dimensions after scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Head {
    pub length: f64,
    pub half_width: f64,
}

impl Head {
    pub fn scaled(ctx: &DrawContext) -> Self {
        Self {
            length: ctx.size(ARROW_LENGTH),
            half_width: ctx.size(ARROW_HALF_WIDTH),
        }
    }

    fn barbs(&self, tip: Point, tail: Point) -> (Point, Point) {
        let base = extend_along(tip, tail, self.length);
        (
            offset_side(tail, tip, base, Side::Left, self.half_width),
            offset_side(tail, tip, base, Side::Right, self.half_width),
        )
    }

    /// Open head at `tip`, pointing away from `tail`: barb, tip, barb.
    pub fn open(&self, tip: Point, tail: Point) -> [Point; 3] {
        let (left, right) = self.barbs(tip, tail);
        [left, tip.with_style(PenStyle::Line), right.with_style(PenStyle::End)]
    }

    /// Filled head, closed back to its first barb.
    pub fn filled(&self, tip: Point, tail: Point) -> [Point; 4] {
        let (left, right) = self.barbs(tip, tail);
        [
            left.with_style(PenStyle::Fill),
            tip.with_style(PenStyle::Fill),
            right.with_style(PenStyle::Fill),
            left.with_style(PenStyle::FillEnd),
        ]
    }
}

/// Tick across the line `from -> to`, centred on `at`.
pub fn tick(at: Point, from: Point, to: Point, half: f64) -> [Point; 2] {
    [
        offset_side(from, to, at, Side::Left, half),
        offset_side(from, to, at, Side::Right, half).with_style(PenStyle::End),
    ]
}

/// Filled bowtie (two triangles meeting at `center`), aligned with `from -> to`.
pub fn bowtie(center: Point, from: Point, to: Point, half_length: f64, half_height: f64) -> [Point; 5] {
    let (ux, uy) = unit_direction(from, to);
    let (nx, ny) = left_normal((ux, uy));
    let corner = |a: f64, b: f64, style: PenStyle| {
        Point::styled(
            center.x + ux * a + nx * b,
            center.y + uy * a + ny * b,
            style,
        )
    };
    [
        corner(-half_length, half_height, PenStyle::Fill),
        corner(half_length, -half_height, PenStyle::Fill),
        corner(half_length, half_height, PenStyle::Fill),
        corner(-half_length, -half_height, PenStyle::Fill),
        corner(-half_length, half_height, PenStyle::FillEnd),
    ]
}

/// Filled diamond centred on `center`, aligned with `from -> to`.
pub fn diamond(center: Point, from: Point, to: Point, half: f64) -> [Point; 5] {
    let (ux, uy) = unit_direction(from, to);
    let (nx, ny) = left_normal((ux, uy));
    let at = |a: f64, b: f64, style: PenStyle| {
        Point::styled(center.x + ux * a + nx * b, center.y + uy * a + ny * b, style)
    };
    [
        at(half, 0.0, PenStyle::Fill),
        at(0.0, half, PenStyle::Fill),
        at(-half, 0.0, PenStyle::Fill),
        at(0.0, -half, PenStyle::Fill),
        at(half, 0.0, PenStyle::FillEnd),
    ]
}

/// Screen-aligned X centred on `center`.
pub fn x_mark(center: Point, half: f64) -> [Point; 4] {
    [
        Point::new(center.x - half, center.y - half),
        Point::styled(center.x + half, center.y + half, PenStyle::End),
        Point::new(center.x - half, center.y + half),
        Point::styled(center.x + half, center.y - half, PenStyle::End),
    ]
}

/// Unit normal of `a -> b` pointing to the side of `target`, and the
/// perpendicular distance of `target`, never less than `min_depth`.
pub fn depth_towards(a: Point, b: Point, target: Point, min_depth: f64) -> ((f64, f64), f64) {
    let (nx, ny) = left_normal(unit_direction(a, b));
    let along_normal = (target.x - a.x) * nx + (target.y - a.y) * ny;
    let sign = if along_normal < 0.0 { -1.0 } else { 1.0 };
    ((nx * sign, ny * sign), along_normal.abs().max(min_depth))
}

/// `p` moved `d` pixels along the unit vector `dir`.
#[inline]
pub fn shifted(p: Point, dir: (f64, f64), d: f64) -> Point {
    Point::new(p.x + dir.0 * d, p.y + dir.1 * d)
}

/// Two-point segment, `Line` then `End`.
#[inline]
pub fn stroke(a: Point, b: Point) -> [Point; 2] {
    [a.with_style(PenStyle::Line), b.with_style(PenStyle::End)]
}
