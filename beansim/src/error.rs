//! Error types for the geometry kernel and scenario configuration
//!
//! Geometry failures are recovered locally by the callers (the pair is
//! skipped), so they carry just enough context for a debug log line

use thiserror::Error;

/// Degenerate or numerically unusable circle geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Both circles share a center, the common chord is undefined
    #[error("circle centers coincide")]
    CoincidentCenters,

    /// The circles are too far apart to intersect
    #[error("circles do not overlap (distance {distance} >= {reach})")]
    NoOverlap { distance: f64, reach: f64 },

    /// An intermediate value came out NaN or infinite
    #[error("non-finite value while computing {0}")]
    NonFinite(&'static str),
}

/// Invalid values in a scenario configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("particle {index} has a non-finite coordinate")]
    NonFiniteParticle { index: usize },
}
