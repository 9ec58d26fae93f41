//! # Algorithm Toolbox
//!
//! Flat access to the individual building blocks, for callers that run their
//! own pipeline instead of [`convert_track`](crate::convert_track).
//!
//! - **Haversine Distance**: great-circle distance on a sphere
//! - **Point Interpolation**: planar-decomposition step along a segment
//! - **Track Length**: sum of segment distances
//! - **Resampling**: fixed-distance waypoints
//! - **Via Smoothing**: neighbor-midpoint corner cutting
//!
//! # Example
//!
//! ```rust
//! use route_smoother::algorithms::{haversine_distance, track_length, Coordinate};
//!
//! let start = Coordinate::new(49.0263935, 8.3866078);
//! let end = Coordinate::new(49.0356294, 8.3787728);
//! let d = haversine_distance(&start, &end);
//! assert_eq!(track_length(&[start, end]), d);
//! ```

// =============================================================================
// Core Types (re-exported from lib)
// =============================================================================

pub use crate::{ConversionConfig, Coordinate, EmissionPolicy, Waypoint};

// =============================================================================
// Geographic Utilities
// =============================================================================

pub use crate::geo_utils::{
    haversine_distance, interpolate_point, track_length, DEGREE_TO_RADIAN, EARTH_RADIUS,
};

// =============================================================================
// Track Processing
// =============================================================================

/// Fixed-distance waypoint generation.
pub use crate::resampling::{fixed_distance_points, resample_track, MAX_WAYPOINTS};

/// Via-point smoothing, by value lookup or by explicit index.
pub use crate::smoothing::{locate_vias, smooth_at_indices, smooth_vias};

// =============================================================================
// Line Interop
// =============================================================================

/// Convert a track into a `geo::LineString` (x = longitude, y = latitude).
///
/// # Example
/// ```rust
/// use route_smoother::algorithms::{to_line_string, Coordinate};
///
/// let line = to_line_string(&[Coordinate::new(49.0, 8.4), Coordinate::new(49.1, 8.5)]);
/// assert_eq!(line.0.len(), 2);
/// assert_eq!(line.0[0].x, 8.4);
/// ```
pub fn to_line_string(points: &[Coordinate]) -> geo::LineString<f64> {
    points.iter().map(|&p| geo::Coord::from(p)).collect()
}

/// Convert a `geo::LineString` back into a track.
pub fn from_line_string(line: &geo::LineString<f64>) -> Vec<Coordinate> {
    line.coords().map(|&c| Coordinate::from(c)).collect()
}
