//! Pixel <-> geographic conversion for earth-accurate arcs.
//!
//! Geographic points reuse [`Point`] with `x` = longitude and `y` =
//! latitude, in degrees. Implementors only have to provide the projection;
//! azimuth, distance and destination default to the WGS84 geodesic
//! solutions from the `geo` crate.

use geo::{Bearing, Destination, Distance, Geodesic};

use crate::geometry::Point;

/// Web Mercator bounds in meters (EPSG:3857)
const EARTH_MERCATOR_MAX: f64 = 20037508.34;

/// Maximum latitude that can be represented in Web Mercator
const MAX_LATITUDE: f64 = 85.05112878;

#[inline]
fn to_geo(p: Point) -> geo::Point<f64> {
    geo::Point::new(p.x, p.y)
}

/// Capability to map between screen pixels and geographic coordinates.
pub trait GeoConverter: Send + Sync {
    /// Screen pixel -> (longitude, latitude).
    fn pixels_to_geo(&self, pixel: Point) -> Point;

    /// (longitude, latitude) -> screen pixel.
    fn geo_to_pixels(&self, geo: Point) -> Point;

    /// Initial azimuth in degrees clockwise from north.
    fn geodesic_azimuth(&self, from: Point, to: Point) -> f64 {
        Geodesic.bearing(to_geo(from), to_geo(to))
    }

    /// Geodesic distance in meters.
    fn geodesic_distance(&self, from: Point, to: Point) -> f64 {
        Geodesic.distance(to_geo(from), to_geo(to))
    }

    /// Point reached from `origin` after `distance` meters along `azimuth`.
    fn geodesic_destination(&self, origin: Point, azimuth: f64, distance: f64) -> Point {
        let p = Geodesic.destination(to_geo(origin), azimuth, distance);
        Point::new(p.x(), p.y())
    }
}

// ============================================================================
// WEB MERCATOR VIEWPORT
// ============================================================================

/// Convert WGS84 (lat, lon) to Web Mercator (x, y) in meters.
#[inline]
pub fn wgs84_to_mercator(lat: f64, lon: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = lon * EARTH_MERCATOR_MAX / 180.0;
    let lat_rad = lat.to_radians();
    let y = (lat_rad.tan() + (1.0 / lat_rad.cos())).ln() * EARTH_MERCATOR_MAX / std::f64::consts::PI;
    (x, y)
}

/// Convert Web Mercator (x, y) in meters to WGS84 (lat, lon).
#[inline]
pub fn mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let lon = x * 180.0 / EARTH_MERCATOR_MAX;
    let lat = (y * std::f64::consts::PI / EARTH_MERCATOR_MAX).sinh().atan().to_degrees();
    (lat, lon)
}

/// A north-up Web Mercator map view.
///
/// Pixel `(0, 0)` sits at `origin` (lon, lat); pixel y grows southwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorViewport {
    origin_x: f64,
    origin_y: f64,
    meters_per_pixel: f64,
}

impl MercatorViewport {
    pub fn new(origin_lon: f64, origin_lat: f64, meters_per_pixel: f64) -> Self {
        let (origin_x, origin_y) = wgs84_to_mercator(origin_lat, origin_lon);
        Self { origin_x, origin_y, meters_per_pixel }
    }

    pub fn meters_per_pixel(&self) -> f64 {
        self.meters_per_pixel
    }
}

impl GeoConverter for MercatorViewport {
    fn pixels_to_geo(&self, pixel: Point) -> Point {
        let mx = self.origin_x + pixel.x * self.meters_per_pixel;
        let my = self.origin_y - pixel.y * self.meters_per_pixel;
        let (lat, lon) = mercator_to_wgs84(mx, my);
        Point::styled(lon, lat, pixel.style)
    }

    fn geo_to_pixels(&self, geo: Point) -> Point {
        let (mx, my) = wgs84_to_mercator(geo.y, geo.x);
        Point::styled(
            (mx - self.origin_x) / self.meters_per_pixel,
            (self.origin_y - my) / self.meters_per_pixel,
            geo.style,
        )
    }
}
