//! Counting facade: how many points a graphic will need.

use crate::config::RenderConfig;
use crate::error::{log_failure, GeometryError, Result};
use crate::geometry::Point;
use crate::motifs::util::MAX_POINTS;
use crate::registry::construction;

/// Input checks shared by both facades, in order: empty, non-finite, too few.
pub(crate) fn validate(config: &RenderConfig, anchors: &[Point]) -> Result<()> {
    if anchors.is_empty() {
        return Err(GeometryError::EmptyInput);
    }
    if let Some(index) = anchors.iter().position(|p| !p.is_finite()) {
        return Err(GeometryError::NonFinite { index });
    }
    let required = config.family.min_points();
    if anchors.len() < required {
        return Err(GeometryError::TooFewPoints {
            family: config.family,
            required,
            actual: anchors.len(),
        });
    }
    Ok(())
}

/// Exact number of points [`try_generate`](crate::generate::try_generate)
/// will produce for the same input.
pub fn try_count(config: &RenderConfig, anchors: &[Point]) -> Result<usize> {
    validate(config, anchors)?;
    let ctx = config.context(anchors);
    (construction(config.family).count)(&ctx)
}

/// Buffer size for a graphic: `-1` for no anchors, `0` for any other failure.
///
/// Failures other than empty input are logged, including a count too large
/// for an `i32`.
pub fn count_points(config: &RenderConfig, anchors: &[Point]) -> i32 {
    let counted = try_count(config, anchors).and_then(|n| {
        i32::try_from(n).map_err(|_| GeometryError::TooManyPoints { limit: MAX_POINTS })
    });
    match counted {
        Ok(n) => n,
        Err(GeometryError::EmptyInput) => -1,
        Err(e) => {
            log_failure("count", "count_points", &e);
            0
        }
    }
}
