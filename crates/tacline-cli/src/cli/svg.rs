//! SVG preview of generated points.
//!
//! Points are split into sub-paths at every style that ends one, the same
//! way a downstream path builder reads them. Markers become small circles.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use tacline::{min_bounding_rect, PenStyle, Point};

/// Margin around the bounding box, in pixels.
const MARGIN: f64 = 10.0;
const MARKER_RADIUS: f64 = 3.0;

/// How one sub-path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Solid,
    Dashed,
    Filled,
}

impl Paint {
    fn of(style: PenStyle) -> Paint {
        match style {
            PenStyle::Fill | PenStyle::FillEnd => Paint::Filled,
            PenStyle::Dash | PenStyle::DashEnd => Paint::Dashed,
            _ => Paint::Solid,
        }
    }
}

/// A run of points drawn as one `<path>` or `<circle>`.
#[derive(Debug, PartialEq)]
pub enum Shape {
    Path { paint: Paint, points: Vec<Point> },
    Marker(Point),
}

/// Split a generated buffer into drawable shapes.
pub fn split_subpaths(points: &[Point]) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for &p in points {
        if p.style == PenStyle::Marker {
            shapes.push(Shape::Marker(p));
            continue;
        }
        current.push(p);
        if p.style.ends_subpath() {
            let paint = Paint::of(p.style);
            shapes.push(Shape::Path { paint, points: std::mem::take(&mut current) });
        }
    }
    if !current.is_empty() {
        let paint = Paint::of(current[current.len() - 1].style);
        shapes.push(Shape::Path { paint, points: current });
    }
    shapes
}

fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd}{:.2},{:.2} ", p.x, p.y));
    }
    if points.last().is_some_and(|p| p.style == PenStyle::FillEnd) {
        d.push('Z');
    }
    d.trim_end().to_string()
}

fn write_error(e: impl std::fmt::Display) -> String {
    format!("Failed to write SVG: {e}")
}

/// Render points as a standalone SVG document sized to their bounding box.
pub fn points_to_svg(points: &[Point], stroke_width: f64) -> Result<String, String> {
    let (upper_left, lower_right) =
        min_bounding_rect(points, points.len()).unwrap_or((Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
    let view_box = format!(
        "{:.2} {:.2} {:.2} {:.2}",
        upper_left.x - MARGIN,
        upper_left.y - MARGIN,
        lower_right.x - upper_left.x + 2.0 * MARGIN,
        lower_right.y - upper_left.y + 2.0 * MARGIN
    );
    let stroke_width = format!("{stroke_width}");

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;
    let svg = BytesStart::new("svg").with_attributes([
        ("xmlns", "http://www.w3.org/2000/svg"),
        ("viewBox", view_box.as_str()),
    ]);
    writer.write_event(Event::Start(svg)).map_err(write_error)?;
    let group = BytesStart::new("g").with_attributes([
        ("stroke", "black"),
        ("stroke-width", stroke_width.as_str()),
        ("stroke-linecap", "round"),
        ("fill", "none"),
    ]);
    writer.write_event(Event::Start(group)).map_err(write_error)?;

    for shape in split_subpaths(points) {
        let element = match shape {
            Shape::Marker(p) => BytesStart::new("circle").with_attributes([
                ("cx", format!("{:.2}", p.x).as_str()),
                ("cy", format!("{:.2}", p.y).as_str()),
                ("r", format!("{MARKER_RADIUS}").as_str()),
                ("fill", "black"),
            ]),
            Shape::Path { paint, points } => {
                let d = path_data(&points);
                let mut path = BytesStart::new("path").with_attributes([("d", d.as_str())]);
                match paint {
                    Paint::Filled => path.push_attribute(("fill", "black")),
                    Paint::Dashed => path.push_attribute(("stroke-dasharray", "6 4")),
                    Paint::Solid => {}
                }
                path
            }
        };
        writer.write_event(Event::Empty(element)).map_err(write_error)?;
    }

    writer.write_event(Event::End(BytesEnd::new("g"))).map_err(write_error)?;
    writer.write_event(Event::End(BytesEnd::new("svg"))).map_err(write_error)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(|e| e.to_string())
}
