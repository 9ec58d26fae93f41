//! Unified error handling for the route-smoother library.
//!
//! Every fallible operation returns [`TrackError`]. Input validation failures
//! are reported immediately instead of being replaced with defaults.

use std::fmt;

/// Unified error type for track-processing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackError {
    /// A coordinate has a non-finite latitude or longitude
    InvalidCoordinate {
        /// Position in the track, when the coordinate came from one
        index: Option<usize>,
        latitude: f64,
        longitude: f64,
    },
    /// Waypoint spacing is zero, negative or not finite
    InvalidSpacing { spacing: f64 },
    /// Spacing would produce more waypoints than the resampler allows
    TooManyWaypoints { predicted: f64, limit: usize },
    /// A coordinate string could not be parsed
    MalformedCoordinate { input: String, message: String },
    /// An explicit track index does not exist
    IndexOutOfBounds { index: usize, len: usize },
    /// Configuration error
    ConfigError { message: String },
}

impl TrackError {
    /// True for errors caused by bad caller input (coordinates, spacing,
    /// coordinate strings, indices).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, TrackError::ConfigError { .. })
    }
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::InvalidCoordinate {
                index,
                latitude,
                longitude,
            } => match index {
                Some(ix) => write!(
                    f,
                    "Invalid coordinate at index {}: lat={}, lon={}",
                    ix, latitude, longitude
                ),
                None => write!(f, "Invalid coordinate: lat={}, lon={}", latitude, longitude),
            },
            TrackError::InvalidSpacing { spacing } => {
                write!(f, "Waypoint spacing must be positive, got {}", spacing)
            }
            TrackError::TooManyWaypoints { predicted, limit } => {
                write!(
                    f,
                    "Spacing would produce {:.0} waypoints, limit is {}",
                    predicted, limit
                )
            }
            TrackError::MalformedCoordinate { input, message } => {
                write!(f, "Malformed coordinate '{}': {}", input, message)
            }
            TrackError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for track of {} points", index, len)
            }
            TrackError::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
        }
    }
}

impl std::error::Error for TrackError {}

/// Result type alias for track-processing operations.
pub type Result<T> = std::result::Result<T, TrackError>;

/// Extension trait for converting Option to TrackError.
pub trait OptionExt<T> {
    /// Convert Option to Result with a malformed coordinate error.
    fn ok_or_malformed(self, input: &str, message: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_malformed(self, input: &str, message: &str) -> Result<T> {
        self.ok_or_else(|| TrackError::MalformedCoordinate {
            input: input.to_string(),
            message: message.to_string(),
        })
    }
}
