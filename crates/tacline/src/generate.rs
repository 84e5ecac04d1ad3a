//! Generation facade: the styled points themselves.

use crate::config::RenderConfig;
use crate::count::validate;
use crate::error::{log_failure, GeometryError, Result};
use crate::family::SymbolFamily;
use crate::geometry::Point;
use crate::registry::construction;

/// Generate the points for a graphic, propagating any failure.
pub fn try_generate(config: &RenderConfig, anchors: &[Point]) -> Result<Vec<Point>> {
    validate(config, anchors)?;
    let ctx = config.context(anchors);
    let build = construction(config.family);
    // A graphic too large to count is never built.
    (build.count)(&ctx)?;
    let points = (build.generate)(&ctx)?;
    tracing::debug!(family = %config.family, points = points.len(), "generated tactical graphic");
    Ok(points)
}

/// Generate at most `capacity` points.
///
/// `capacity` is normally what [`count_points`](crate::count::count_points)
/// returned. Failures are logged and give an empty buffer. Output longer
/// than `capacity` is logged and truncated; clip-dependent families may
/// legitimately return fewer points.
pub fn generate_points(config: &RenderConfig, anchors: &[Point], capacity: usize) -> Vec<Point> {
    match try_generate(config, anchors) {
        Ok(mut points) => {
            if points.len() > capacity {
                let error = GeometryError::CapacityExceeded {
                    capacity,
                    produced: points.len(),
                };
                log_failure("generate", "generate_points", &error);
                points.truncate(capacity);
            }
            points
        }
        Err(e) => {
            log_failure("generate", "generate_points", &e);
            Vec::new()
        }
    }
}

/// Whether `family` is drawn by the channel generator and needs
/// channel-specific handling downstream.
pub fn is_channel_family(family: SymbolFamily) -> bool {
    family.is_channel()
}
