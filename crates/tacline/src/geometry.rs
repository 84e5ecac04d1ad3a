//! Core geometry types and degenerate-safe 2D primitives.
//!
//! Every function in here accepts any finite input, including coincident
//! points and exactly vertical or horizontal segments, and returns a finite
//! answer. Nothing panics and nothing divides by zero.
//!
//! ## Rust Lesson #3: Small Value Structs Instead of Out-Parameters
//!
//! A slope computation has two answers (the slope and whether it is a "true"
//! slope). Instead of writing through mutable references we return a tiny
//! `Copy` struct. The compiler keeps it in registers, so this costs nothing.

// ============================================================================
// PEN STYLES
// ============================================================================

/// Pen code attached to every generated point.
///
/// The downstream path builder starts a new sub-path after any point whose
/// style ends one (`End`, `FillEnd`, `DashEnd`, `Marker`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "i32", try_from = "i32"))]
pub enum PenStyle {
    /// Pen down, the path continues.
    #[default]
    Line,
    /// Last point of a solid sub-path.
    End,
    /// Vertex of a filled sub-path.
    Fill,
    /// Closes and fills the current sub-path.
    FillEnd,
    /// Vertex of a dashed sub-path.
    Dash,
    /// Last point of a dashed sub-path.
    DashEnd,
    /// Isolated circle marker centre.
    Marker,
}

impl PenStyle {
    /// Integer pen code understood by path builders.
    pub const fn code(self) -> i32 {
        match self {
            PenStyle::Line => 0,
            PenStyle::End => 5,
            PenStyle::Fill => 9,
            PenStyle::FillEnd => 10,
            PenStyle::Dash => 12,
            PenStyle::DashEnd => 18,
            PenStyle::Marker => 20,
        }
    }

    /// Parse an integer pen code.
    pub const fn from_code(code: i32) -> Option<PenStyle> {
        match code {
            0 => Some(PenStyle::Line),
            5 => Some(PenStyle::End),
            9 => Some(PenStyle::Fill),
            10 => Some(PenStyle::FillEnd),
            12 => Some(PenStyle::Dash),
            18 => Some(PenStyle::DashEnd),
            20 => Some(PenStyle::Marker),
            _ => None,
        }
    }

    /// True if the path builder lifts the pen after this point.
    pub const fn ends_subpath(self) -> bool {
        matches!(
            self,
            PenStyle::End | PenStyle::FillEnd | PenStyle::DashEnd | PenStyle::Marker
        )
    }

    /// The closing variant of a vertex style.
    pub const fn closing(self) -> PenStyle {
        match self {
            PenStyle::Line | PenStyle::End => PenStyle::End,
            PenStyle::Fill | PenStyle::FillEnd => PenStyle::FillEnd,
            PenStyle::Dash | PenStyle::DashEnd => PenStyle::DashEnd,
            PenStyle::Marker => PenStyle::Marker,
        }
    }
}

impl From<PenStyle> for i32 {
    fn from(style: PenStyle) -> i32 {
        style.code()
    }
}

impl TryFrom<i32> for PenStyle {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        PenStyle::from_code(code).ok_or_else(|| format!("unknown pen code {code}"))
    }
}

// ============================================================================
// POINTS AND RECTANGLES
// ============================================================================

/// A 2D point in pixel (or, transiently, geographic) space with a pen code.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: PenStyle,
}

impl Point {
    /// A plain `Line` point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, style: PenStyle::Line }
    }

    #[inline]
    pub const fn styled(x: f64, y: f64, style: PenStyle) -> Self {
        Self { x, y, style }
    }

    /// Same coordinates, different pen code.
    #[inline]
    pub const fn with_style(self, style: PenStyle) -> Self {
        Self { x: self.x, y: self.y, style }
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        distance(*self, other)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned clip rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ClipRect {
    /// Build a rectangle from any two opposite corners.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

// ============================================================================
// DISTANCE AND SLOPE
// ============================================================================

/// Euclidean distance.
///
/// When the result cancels to zero or overflows, falls back to the larger
/// axis delta so near-coincident points never produce NaN. For `p == q`
/// both are zero, so the result is exactly `0.0`.
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    let d = (dx * dx + dy * dy).sqrt();
    if d == 0.0 || !d.is_finite() {
        dx.abs().max(dy.abs())
    } else {
        d
    }
}

/// Result of [`slope`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slope {
    /// `dy / dx` with `dx` clamped away from zero. Always finite for finite input.
    pub m: f64,
    /// `|dx| < 1`: the line is vertical enough that `m` is only an estimate.
    pub vertical: bool,
}

impl Slope {
    /// Whether this is a true slope: false for near-vertical lines.
    #[inline]
    pub fn is_true(&self) -> bool {
        !self.vertical
    }
}

/// Pixel threshold below which a run is treated as vertical.
pub const SLOPE_EPSILON: f64 = 1.0;

/// Slope of `p -> q` with the one-pixel clamp.
///
/// If `|dx| < 1`, `dx` is clamped to `-1` (for negative runs) or `+1`
/// (otherwise, including zero) and the line is flagged vertical.
pub fn slope(p: Point, q: Point) -> Slope {
    let mut dx = q.x - p.x;
    let dy = q.y - p.y;
    let vertical = dx.abs() < SLOPE_EPSILON;
    if vertical {
        dx = if dx < 0.0 { -SLOPE_EPSILON } else { SLOPE_EPSILON };
    }
    Slope { m: dy / dx, vertical }
}

// ============================================================================
// LINE EQUATIONS AND INTERSECTION
// ============================================================================

/// A line in slope-intercept form, `y = m·x + b`, or `x = x` when vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEq {
    pub m: f64,
    pub b: f64,
    pub vertical: bool,
    /// x position used when the line is vertical.
    pub x: f64,
}

impl LineEq {
    /// Line through two points.
    pub fn through(p: Point, q: Point) -> Self {
        let s = slope(p, q);
        Self {
            m: s.m,
            b: p.y - s.m * p.x,
            vertical: s.vertical,
            x: p.x,
        }
    }

    /// Line with the given slope through `p`.
    pub fn with_slope(p: Point, slope: Slope) -> Self {
        Self {
            m: slope.m,
            b: p.y - slope.m * p.x,
            vertical: slope.vertical,
            x: p.x,
        }
    }

    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.m * x + self.b
    }
}

/// Tolerance below which two slopes are considered parallel.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Intersection of two lines.
///
/// Both vertical, parallel and coincident lines resolve to `fallback`
/// instead of dividing by zero. When exactly one line is vertical its `x`
/// is substituted into the other line.
pub fn intersect_lines(l1: &LineEq, l2: &LineEq, fallback: Point) -> Point {
    match (l1.vertical, l2.vertical) {
        (true, true) => fallback,
        (true, false) => Point::new(l1.x, l2.y_at(l1.x)),
        (false, true) => Point::new(l2.x, l1.y_at(l2.x)),
        (false, false) => {
            let dm = l1.m - l2.m;
            if dm.abs() < PARALLEL_EPSILON {
                return fallback;
            }
            let x = (l2.b - l1.b) / dm;
            let y = l1.y_at(x);
            if x.is_finite() && y.is_finite() {
                Point::new(x, y)
            } else {
                fallback
            }
        }
    }
}

// ============================================================================
// EXTENSION AND OFFSETS
// ============================================================================

/// Absolute (screen) direction for perpendicular offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Above,
    Below,
}

/// Direction relative to travel along a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Travel direction rotated -90° in screen space ("up" when heading +x).
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// +1 for Left, -1 for Right, as a multiplier on the Left normal.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Unit vector from `p` to `q`, `(1, 0)` when the points coincide.
#[inline]
pub fn unit_direction(p: Point, q: Point) -> (f64, f64) {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || !len.is_finite() {
        (1.0, 0.0)
    } else {
        (dx / len, dy / len)
    }
}

/// Left-hand unit normal of a unit direction (screen space, y down).
#[inline]
pub fn left_normal(dir: (f64, f64)) -> (f64, f64) {
    (dir.1, -dir.0)
}

/// The point `dist` from `p` along `p -> q`. Negative distances go backwards.
pub fn extend_along(p: Point, q: Point, dist: f64) -> Point {
    if p.x == q.x && p.y == q.y {
        return Point::new(p.x, p.y);
    }
    let (ux, uy) = unit_direction(p, q);
    Point::new(p.x + ux * dist, p.y + uy * dist)
}

/// Offset `at` by `dist` perpendicular to `p -> q` in an absolute direction.
///
/// Left/Right are meaningless for a horizontal segment (the perpendicular is
/// vertical) so they become Above/Below; Above/Below become Left/Right for a
/// vertical segment. Both checks use the one-pixel slope threshold.
pub fn extend_perpendicular(p: Point, q: Point, at: Point, direction: Direction, dist: f64) -> Point {
    let mut dx = q.x - p.x;
    let mut dy = q.y - p.y;
    if dx == 0.0 && dy == 0.0 {
        dx = 1.0;
        dy = 0.0;
    }
    let len = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = (-dy / len, dx / len);

    let resolved = match direction {
        Direction::Left if dy.abs() < SLOPE_EPSILON => Direction::Above,
        Direction::Right if dy.abs() < SLOPE_EPSILON => Direction::Below,
        Direction::Above if dx.abs() < SLOPE_EPSILON => Direction::Left,
        Direction::Below if dx.abs() < SLOPE_EPSILON => Direction::Right,
        other => other,
    };

    let sign = match resolved {
        Direction::Left => if nx < 0.0 { 1.0 } else { -1.0 },
        Direction::Right => if nx > 0.0 { 1.0 } else { -1.0 },
        Direction::Above => if ny < 0.0 { 1.0 } else { -1.0 },
        Direction::Below => if ny > 0.0 { 1.0 } else { -1.0 },
    };

    Point::new(at.x + sign * dist * nx, at.y + sign * dist * ny)
}

/// Offset `at` by `dist` to one side of the travel direction `p -> q`.
pub fn offset_side(p: Point, q: Point, at: Point, side: Side, dist: f64) -> Point {
    let (nx, ny) = left_normal(unit_direction(p, q));
    let d = side.sign() * dist;
    Point::new(at.x + nx * d, at.y + ny * d)
}

#[inline]
pub fn midpoint(p: Point, q: Point) -> Point {
    Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Linear interpolation between two points.
#[inline]
pub fn lerp(p: Point, q: Point, t: f64) -> Point {
    Point::new(p.x + (q.x - p.x) * t, p.y + (q.y - p.y) * t)
}

/// Rotate `p` about `pivot` by `angle` radians (screen space).
pub fn rotate_about(p: Point, pivot: Point, angle: f64) -> Point {
    let (sin_a, cos_a) = angle.sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point::styled(
        pivot.x + dx * cos_a - dy * sin_a,
        pivot.y + dx * sin_a + dy * cos_a,
        p.style,
    )
}

/// Screen angle of `p -> q` in radians.
#[inline]
pub fn angle_of(p: Point, q: Point) -> f64 {
    (q.y - p.y).atan2(q.x - p.x)
}

/// Signed cross product of `(q - p) × (r - p)`.
#[inline]
pub fn cross(p: Point, q: Point, r: Point) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// Restyle a run of points: every point gets `style`, the last gets its closing variant.
pub fn close_run(points: &mut [Point], style: PenStyle) {
    let n = points.len();
    for (i, p) in points.iter_mut().enumerate() {
        p.style = if i + 1 == n { style.closing() } else { style };
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_identical_points_is_zero() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn distance_three_four_five() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn distance_overflow_falls_back_to_axis_delta() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1e200, 1e200);
        assert_eq!(distance(p, q), 1e200);
    }

    #[test]
    fn slope_threshold_is_one_pixel() {
        let p = Point::new(0.0, 0.0);
        let steep = slope(p, Point::new(0.999, 10.0));
        assert!(steep.vertical);
        assert_eq!(steep.m, 10.0);

        let exact = slope(p, Point::new(1.0, 10.0));
        assert!(!exact.vertical);
        assert_eq!(exact.m, 10.0);
    }

    #[test]
    fn slope_clamp_preserves_sign() {
        let p = Point::new(0.0, 0.0);
        let neg = slope(p, Point::new(-0.5, 4.0));
        assert!(neg.vertical);
        assert_eq!(neg.m, -4.0);

        let zero = slope(p, Point::new(0.0, 4.0));
        assert!(zero.vertical);
        assert_eq!(zero.m, 4.0);
        assert!(!zero.is_true());
    }

    #[test]
    fn slope_never_infinite_for_distinct_points() {
        let p = Point::new(5.0, 5.0);
        for q in [Point::new(5.0, 6.0), Point::new(5.0000001, -1e6), Point::new(-3.0, 5.0)] {
            assert!(slope(p, q).m.is_finite());
        }
    }

    #[test]
    fn intersect_crossing_lines() {
        let l1 = LineEq::through(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let l2 = LineEq::through(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        let p = intersect_lines(&l1, &l2, Point::new(-1.0, -1.0));
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn intersect_parallel_and_coincident_use_fallback() {
        let fallback = Point::new(42.0, 7.0);
        let l1 = LineEq::through(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let l2 = LineEq::through(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert_eq!(intersect_lines(&l1, &l2, fallback), fallback);
        assert_eq!(intersect_lines(&l1, &l1, fallback), fallback);
    }

    #[test]
    fn intersect_with_one_vertical_line() {
        let vertical = LineEq::through(Point::new(4.0, 0.0), Point::new(4.0, 10.0));
        let diagonal = LineEq::through(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        let p = intersect_lines(&vertical, &diagonal, Point::new(0.0, 0.0));
        assert_eq!(p.x, 4.0);
        assert!((p.y - 8.0).abs() < 1e-9);

        let both = intersect_lines(&vertical, &vertical, Point::new(1.0, 1.0));
        assert_eq!(both, Point::new(1.0, 1.0));
    }

    #[test]
    fn extend_along_and_backwards() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(10.0, 0.0);
        assert_eq!(extend_along(p, q, 4.0), Point::new(4.0, 0.0));
        assert_eq!(extend_along(p, q, -2.0), Point::new(-2.0, 0.0));
        assert_eq!(extend_along(p, p, 3.0), p);
    }

    #[test]
    fn perpendicular_left_on_horizontal_becomes_above() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(10.0, 0.0);
        let up = extend_perpendicular(p, q, p, Direction::Left, 5.0);
        assert!((up.x).abs() < 1e-12);
        assert!((up.y + 5.0).abs() < 1e-12);
        let down = extend_perpendicular(p, q, p, Direction::Right, 5.0);
        assert!((down.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_above_on_vertical_becomes_left() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(0.0, 10.0);
        let left = extend_perpendicular(p, q, q, Direction::Above, 3.0);
        assert!((left.x + 3.0).abs() < 1e-12);
        assert!((left.y - 10.0).abs() < 1e-12);
        let right = extend_perpendicular(p, q, q, Direction::Below, 3.0);
        assert!((right.x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_on_diagonal_keeps_direction() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(10.0, 10.0);
        let left = extend_perpendicular(p, q, p, Direction::Left, 2.0_f64.sqrt());
        assert!((left.x + 1.0).abs() < 1e-9);
        assert!((left.y - 1.0).abs() < 1e-9);
        let above = extend_perpendicular(p, q, p, Direction::Above, 2.0_f64.sqrt());
        assert!((above.x - 1.0).abs() < 1e-9);
        assert!((above.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn offset_side_is_relative_to_travel() {
        let p = Point::new(0.0, 0.0);
        let east = Point::new(10.0, 0.0);
        let west = Point::new(-10.0, 0.0);
        assert_eq!(offset_side(p, east, p, Side::Left, 2.0).y, -2.0);
        assert_eq!(offset_side(p, west, p, Side::Left, 2.0).y, 2.0);
        assert_eq!(offset_side(p, east, p, Side::Right, 2.0).y, 2.0);
    }

    #[test]
    fn pen_codes_round_trip_closed_set() {
        for code in [0, 5, 9, 10, 12, 18, 20] {
            let style = PenStyle::from_code(code).unwrap();
            assert_eq!(style.code(), code);
        }
        assert_eq!(PenStyle::from_code(7), None);
        assert_eq!(PenStyle::Fill.closing(), PenStyle::FillEnd);
        assert!(PenStyle::Marker.ends_subpath());
        assert!(!PenStyle::Dash.ends_subpath());
    }

    #[test]
    fn close_run_marks_last_point() {
        let mut pts = vec![Point::new(0.0, 0.0); 3];
        close_run(&mut pts, PenStyle::Dash);
        assert_eq!(pts[0].style, PenStyle::Dash);
        assert_eq!(pts[2].style, PenStyle::DashEnd);
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_about(Point::new(10.0, 0.0), Point::new(0.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn clip_rect_normalizes_corners() {
        let r = ClipRect::new(10.0, 20.0, 0.0, 5.0);
        assert_eq!((r.min_x, r.min_y, r.max_x, r.max_y), (0.0, 5.0, 10.0, 20.0));
        assert!(r.contains(Point::new(5.0, 10.0)));
        assert!(!r.contains(Point::new(15.0, 10.0)));
    }
}
