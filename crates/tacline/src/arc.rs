//! Arc and ellipse sampling, planar or geodesic.
//!
//! Planar arcs are sampled with `lyon_geom::Arc`. When a [`GeoConverter`]
//! is supplied the centre and start point are projected to geographic
//! space, the arc is walked along true geodesics and every sample is
//! projected back to pixels.

use lyon_geom::{Angle, Arc};

use crate::error::{GeometryError, Result};
use crate::geodesy::GeoConverter;
use crate::geometry::{angle_of, distance, Point};

/// Samples per arc for the arc-based task graphics.
pub const ARC_POINTS: usize = 26;

/// Sample `count` points evenly over `[start, start + sweep]` around `center`.
///
/// The radius is `|start - center|`. Positive sweeps turn clockwise on
/// screen (increasing screen angle). All points are `Line`; callers restyle.
pub fn arc_points(
    center: Point,
    start: Point,
    sweep_degrees: f64,
    count: usize,
    geo: Option<&dyn GeoConverter>,
) -> Result<Vec<Point>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    match geo {
        Some(converter) => geodesic_arc(center, start, sweep_degrees, count, converter),
        None => Ok(planar_arc(center, start, sweep_degrees, count)),
    }
}

#[inline]
fn fraction(k: usize, count: usize) -> f64 {
    if count <= 1 { 0.0 } else { k as f64 / (count - 1) as f64 }
}

fn planar_arc(center: Point, start: Point, sweep_degrees: f64, count: usize) -> Vec<Point> {
    let r = distance(center, start);
    let arc = Arc {
        center: lyon_geom::point(center.x, center.y),
        radii: lyon_geom::vector(r, r),
        start_angle: Angle::radians(angle_of(center, start)),
        sweep_angle: Angle::radians(sweep_degrees.to_radians()),
        x_rotation: Angle::radians(0.0),
    };

    (0..count)
        .map(|k| {
            let p = arc.sample(fraction(k, count));
            Point::new(p.x, p.y)
        })
        .collect()
}

fn geodesic_arc(
    center: Point,
    start: Point,
    sweep_degrees: f64,
    count: usize,
    geo: &dyn GeoConverter,
) -> Result<Vec<Point>> {
    let center_geo = geo.pixels_to_geo(center);
    let start_geo = geo.pixels_to_geo(start);
    let radius = geo.geodesic_distance(center_geo, start_geo);
    let azimuth = geo.geodesic_azimuth(center_geo, start_geo);

    let mut points = Vec::with_capacity(count);
    for k in 0..count {
        let az = azimuth + sweep_degrees * fraction(k, count);
        let dest = geo.geodesic_destination(center_geo, az, radius);
        let pixel = geo.geo_to_pixels(dest);
        if !pixel.is_finite() {
            return Err(GeometryError::Geodesy(format!(
                "arc sample {k} at azimuth {az:.3} did not project to a finite pixel"
            )));
        }
        points.push(Point::new(pixel.x, pixel.y));
    }
    Ok(points)
}

/// Sample a full, closed ellipse: the first and last samples coincide.
///
/// `rotation` is the screen angle of the `rx` axis, in radians.
pub fn ellipse_points(center: Point, rx: f64, ry: f64, rotation: f64, count: usize) -> Vec<Point> {
    let arc = Arc {
        center: lyon_geom::point(center.x, center.y),
        radii: lyon_geom::vector(rx, ry),
        start_angle: Angle::radians(0.0),
        sweep_angle: Angle::radians(std::f64::consts::TAU),
        x_rotation: Angle::radians(rotation),
    };

    (0..count)
        .map(|k| {
            let p = arc.sample(fraction(k, count));
            Point::new(p.x, p.y)
        })
        .collect()
}
