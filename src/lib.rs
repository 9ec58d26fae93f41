//! # Route Smoother
//!
//! Geodesic track processing for route conversion.
//!
//! This library provides:
//! - Great-circle distances and track lengths on a spherical earth
//! - Interpolation of intermediate points along a segment
//! - Resampling of a track into fixed-distance waypoints
//! - Corner smoothing of routing "via" points
//! - Parsing and formatting of `lon,lat` coordinate strings
//!
//! Reading GPX/KML documents and talking to routing services is left to the
//! caller; this crate consumes and produces plain [`Coordinate`] sequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use route_smoother::{convert_track, parse_coordinate, parse_via_list, ConversionConfig};
//!
//! let track = vec![
//!     parse_coordinate("8.3866078,49.0263935").unwrap(),
//!     parse_coordinate("8.3881528,49.0268437").unwrap(),
//!     parse_coordinate("8.3881957,49.0294607").unwrap(),
//!     parse_coordinate("8.3885819,49.0314303").unwrap(),
//! ];
//! let vias = parse_via_list("8.3881528,49.0268437 8.3881957,49.0294607").unwrap();
//!
//! let config = ConversionConfig {
//!     waypoint_spacing: 100.0,
//!     ..ConversionConfig::default()
//! };
//! let report = convert_track(track, &vias, &config).unwrap();
//! assert!(report.smoothed_length <= report.source_length);
//! assert_eq!(report.waypoints[0].label, "100m");
//! ```

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{OptionExt, Result, TrackError};

// Geographic utilities (distance, interpolation, length)
pub mod geo_utils;
pub use geo_utils::{haversine_distance, interpolate_point, track_length};

// Fixed-distance waypoint generation
pub mod resampling;
pub use resampling::{fixed_distance_points, resample_track, MAX_WAYPOINTS};

// Via-point corner smoothing
pub mod smoothing;
pub use smoothing::{locate_vias, smooth_at_indices, smooth_vias};

// `lon,lat` coordinate strings
pub mod parsing;
pub use parsing::{format_coordinate, format_via_list, parse_coordinate, parse_via_list};

// Full conversion pipeline (smooth, measure, resample)
pub mod conversion;
pub use conversion::{convert_track, ConversionReport};

// Algorithm toolbox - flat access to the building blocks
pub mod algorithms;

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate in decimal degrees.
///
/// Equality is exact on both components. Via points are located inside a
/// track by this equality, so a coordinate that went through a lossy text
/// round trip may no longer match.
///
/// # Example
/// ```
/// use route_smoother::Coordinate;
/// let point = Coordinate::new(49.0263935, 8.3866078); // Karlsruhe
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Check if the coordinate is finite and inside the usual lat/lon ranges.
    pub fn is_valid(&self) -> bool {
        self.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Reject non-finite coordinates.
    ///
    /// Out-of-range but finite values are accepted; the distance formulas are
    /// periodic and stay well defined.
    pub fn validate(&self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(TrackError::InvalidCoordinate {
                index: None,
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Arithmetic mean of both components.
    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate::new(
            (self.latitude + other.latitude) / 2.0,
            (self.longitude + other.longitude) / 2.0,
        )
    }
}

impl From<Coordinate> for Coord {
    fn from(c: Coordinate) -> Self {
        Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coord> for Coordinate {
    fn from(c: Coord) -> Self {
        Coordinate::new(c.y, c.x)
    }
}

impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

/// Validate every coordinate of a track, reporting the first bad index.
pub fn validate_track(points: &[Coordinate]) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(TrackError::InvalidCoordinate {
            index: Some(index),
            latitude: points[index].latitude,
            longitude: points[index].longitude,
        }),
        None => Ok(()),
    }
}

/// A fixed-distance marker along a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// 1-based marker number
    pub index: usize,
    /// Distance from the track start this marker stands for, in meters
    pub distance: f64,
    /// Position of the marker
    pub coordinate: Coordinate,
    /// Marker name, e.g. "3km" or "750m"
    pub label: String,
}

/// How many waypoints a single track segment may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmissionPolicy {
    /// Emit every marker that falls inside a segment.
    #[default]
    Exhaustive,
    /// Emit at most one marker per segment. Long segments are under-sampled;
    /// kept for output compatibility with older converters.
    SinglePerSegment,
}

/// Configuration for a track conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Distance between waypoints in meters.
    /// Default: 1000.0
    pub waypoint_spacing: f64,

    /// Report the smoothed track instead of the source track. Via smoothing
    /// itself always runs; corrected vias and the smoothed length come from it
    /// either way.
    /// Default: true
    pub smooth: bool,

    /// Produce a corrected `via` parameter string from the smoothed vias.
    /// Default: true
    pub correct_vias: bool,

    /// Waypoint emission behavior for long segments.
    /// Default: Exhaustive
    pub emission_policy: EmissionPolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            waypoint_spacing: 1000.0,
            smooth: true,
            correct_vias: true,
            emission_policy: EmissionPolicy::Exhaustive,
        }
    }
}

impl ConversionConfig {
    /// Check the configuration before running a conversion.
    pub fn validate(&self) -> Result<()> {
        if !self.waypoint_spacing.is_finite() {
            return Err(TrackError::ConfigError {
                message: format!("waypoint_spacing is not finite: {}", self.waypoint_spacing),
            });
        }
        if self.waypoint_spacing <= 0.0 {
            return Err(TrackError::InvalidSpacing {
                spacing: self.waypoint_spacing,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
