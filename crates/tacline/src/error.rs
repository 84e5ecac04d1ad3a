//! Error type for the engine and the swallow-and-log boundary policy.
//!
//! Constructions return `Result<T>` and propagate with `?`. Only the public
//! facades (`count_points`, `generate_points`) turn an `Err` into a default
//! value, and they always log it first through [`log_failure`].

use crate::family::SymbolFamily;

/// Everything that can go wrong while counting or generating points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("no anchor points supplied")]
    EmptyInput,

    #[error("{family} needs at least {required} anchor points, got {actual}")]
    TooFewPoints {
        family: SymbolFamily,
        required: usize,
        actual: usize,
    },

    #[error("anchor point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("output capacity {capacity} is smaller than the {produced} generated points")]
    CapacityExceeded { capacity: usize, produced: usize },

    #[error("graphic needs more than {limit} points")]
    TooManyPoints { limit: usize },

    #[error("geodesic conversion failed: {0}")]
    Geodesy(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Send a failure to the process-wide logging sink.
///
/// `component` names the engine part (e.g. `"count"`), `operation` the
/// public call that failed.
pub fn log_failure(component: &str, operation: &str, error: &GeometryError) {
    tracing::warn!(component, operation, %error, "tactical graphic degraded to default");
}
