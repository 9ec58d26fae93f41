//! Track conversion pipeline.
//!
//! Ties the building blocks together the way a route converter uses them:
//! measure the source track, smooth its via points, measure again, drop
//! fixed-distance waypoints and produce a corrected `via` parameter for
//! rebuilding the routing request.

use log::info;
use serde::{Deserialize, Serialize};

use crate::geo_utils::track_length;
use crate::parsing::format_via_list;
use crate::resampling::resample_track;
use crate::smoothing::smooth_vias;
use crate::{validate_track, Coordinate, ConversionConfig, Result, TrackError, Waypoint};

/// Result of converting one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// The smoothed track, or the source track when `smooth` is off
    pub track: Vec<Coordinate>,
    /// Via points after smoothing, in input order
    pub vias: Vec<Coordinate>,
    /// Fixed-distance markers along `track`
    pub waypoints: Vec<Waypoint>,
    /// Length of the source track in meters
    pub source_length: f64,
    /// Length of the smoothed track in meters
    pub smoothed_length: f64,
    /// Space-separated `lon,lat` via list for the routing request, if requested
    pub corrected_via: Option<String>,
}

impl ConversionReport {
    /// Serialize the report to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| TrackError::ConfigError {
            message: format!("failed to serialize report: {}", e),
        })
    }
}

/// Run the full conversion on a track and its via points.
///
/// Via smoothing always runs and always feeds `vias`, `smoothed_length` and
/// `corrected_via`. `config.smooth` only chooses whether the report carries
/// the smoothed track or the untouched source track; waypoints follow the
/// reported track.
///
/// # Errors
/// - invalid configuration (see [`ConversionConfig::validate`])
/// - a non-finite coordinate in the track or the via list
pub fn convert_track(
    track: Vec<Coordinate>,
    vias: &[Coordinate],
    config: &ConversionConfig,
) -> Result<ConversionReport> {
    config.validate()?;
    validate_track(&track)?;
    for via in vias {
        via.validate()?;
    }

    let source_length = track_length(&track);

    let mut smoothed = track.clone();
    let smoothed_vias = smooth_vias(&mut smoothed, vias);
    let smoothed_length = track_length(&smoothed);

    let track = if config.smooth { smoothed } else { track };
    let waypoints = resample_track(&track, config.waypoint_spacing, config.emission_policy)?;

    let corrected_via = if config.correct_vias && !vias.is_empty() {
        Some(format_via_list(&smoothed_vias))
    } else {
        None
    };

    info!(
        "[Conversion] {} points, {} vias: {:.0}m -> {:.0}m, {} waypoints every {:.0}m",
        track.len(),
        vias.len(),
        source_length,
        smoothed_length,
        waypoints.len(),
        config.waypoint_spacing
    );

    Ok(ConversionReport {
        track,
        vias: smoothed_vias,
        waypoints,
        source_length,
        smoothed_length,
        corrected_via,
    })
}
