//! Fixed-distance waypoint generation.
//!
//! Walks a track and drops a marker every `spacing` meters of path length,
//! placing each marker inside its segment with [`interpolate_point`].

use log::debug;

use crate::geo_utils::{haversine_distance, interpolate_point, track_length};
use crate::{validate_track, Coordinate, EmissionPolicy, Result, TrackError, Waypoint};

/// Upper bound on the waypoints a single resampling may produce.
pub const MAX_WAYPOINTS: usize = 1_000_000;

/// Resample a track into waypoints spaced `spacing` meters apart.
///
/// The first marker sits `spacing` meters from the track start; the start
/// itself is never emitted, and neither is a marker that would land exactly on
/// the track end. Tracks with fewer than 2 points yield no waypoints.
///
/// # Errors
/// - [`TrackError::InvalidSpacing`] when `spacing` is not a positive number
/// - [`TrackError::InvalidCoordinate`] for a non-finite track coordinate
/// - [`TrackError::TooManyWaypoints`] when `length / spacing` exceeds
///   [`MAX_WAYPOINTS`]
///
/// # Example
/// ```rust
/// use route_smoother::{resample_track, Coordinate, EmissionPolicy};
///
/// let track: Vec<Coordinate> = (0..=10)
///     .map(|i| Coordinate::new(49.0 + i as f64 * 0.001, 8.4))
///     .collect();
/// let waypoints = resample_track(&track, 250.0, EmissionPolicy::Exhaustive).unwrap();
/// assert_eq!(waypoints.len(), 4); // ~1111m of track
/// assert_eq!(waypoints[0].label, "250m");
/// ```
pub fn resample_track(
    points: &[Coordinate],
    spacing: f64,
    policy: EmissionPolicy,
) -> Result<Vec<Waypoint>> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(TrackError::InvalidSpacing { spacing });
    }
    validate_track(points)?;

    let predicted = track_length(points) / spacing;
    if predicted > MAX_WAYPOINTS as f64 {
        return Err(TrackError::TooManyWaypoints {
            predicted,
            limit: MAX_WAYPOINTS,
        });
    }

    let mut waypoints = Vec::new();
    let mut current = 0.0;
    let mut next_target = spacing;

    for w in points.windows(2) {
        let (prev, pt) = (&w[0], &w[1]);
        let seg_dist = haversine_distance(prev, pt);

        while current + seg_dist > next_target {
            waypoints.push(Waypoint {
                index: waypoints.len() + 1,
                distance: next_target,
                coordinate: interpolate_point(prev, pt, next_target - current),
                label: distance_label(next_target),
            });
            next_target += spacing;

            if policy == EmissionPolicy::SinglePerSegment {
                break;
            }
        }

        current += seg_dist;
    }

    debug!(
        "[Resample] {} points, {:.0}m, spacing {:.0}m -> {} waypoints",
        points.len(),
        current,
        spacing,
        waypoints.len()
    );

    Ok(waypoints)
}

/// Coordinates every `spacing` meters along the track, without marker metadata.
pub fn fixed_distance_points(points: &[Coordinate], spacing: f64) -> Result<Vec<Coordinate>> {
    Ok(resample_track(points, spacing, EmissionPolicy::Exhaustive)?
        .into_iter()
        .map(|w| w.coordinate)
        .collect())
}

/// Marker name for a distance: whole kilometers as "Nkm", anything else in
/// rounded meters.
fn distance_label(distance: f64) -> String {
    let meters = distance.round();
    if meters >= 1000.0 && meters % 1000.0 == 0.0 {
        format!("{}km", meters / 1000.0)
    } else {
        format!("{}m", meters)
    }
}
