//! Via-point corner smoothing.
//!
//! A routing service forces its route through every via point, which often
//! produces sharp spikes where a via was placed slightly off the road. Each
//! via that lies strictly inside the track is replaced by the midpoint of its
//! two track neighbors, and the track is updated in place so later length
//! computations see the cut corner.
//!
//! The track is taken as `&mut [Coordinate]`: the smoothing step must be its
//! only user. Clone it beforehand to keep the original geometry.

use log::debug;

use crate::{Coordinate, Result, TrackError};

/// Find each via in the track by exact coordinate equality.
///
/// Returns the first matching index per via, or `None` when it does not occur.
pub fn locate_vias(track: &[Coordinate], vias: &[Coordinate]) -> Vec<Option<usize>> {
    vias.iter()
        .map(|via| track.iter().position(|p| p == via))
        .collect()
}

/// Smooth via points inside a track.
///
/// For every via, in order:
/// - not in the track, first or last point: passed through unchanged
/// - otherwise: replaced by the midpoint of its neighbors, both in the
///   returned list and in `track`
///
/// Because the track is updated as vias are processed, a via whose neighbor
/// was itself smoothed earlier averages against the smoothed neighbor.
///
/// # Example
/// ```rust
/// use route_smoother::{smooth_vias, Coordinate};
///
/// let mut track = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(2.0, 0.0),
/// ];
/// let smoothed = smooth_vias(&mut track, &[Coordinate::new(1.0, 1.0)]);
/// assert_eq!(smoothed, vec![Coordinate::new(1.0, 0.0)]);
/// assert_eq!(track[1], Coordinate::new(1.0, 0.0));
/// ```
pub fn smooth_vias(track: &mut [Coordinate], vias: &[Coordinate]) -> Vec<Coordinate> {
    let mut smoothed_count = 0;

    let result: Vec<Coordinate> = vias
        .iter()
        .map(|via| match track.iter().position(|p| p == via) {
            Some(ix) => match smooth_interior(track, ix) {
                Some(mid) => {
                    smoothed_count += 1;
                    mid
                }
                None => *via,
            },
            None => *via,
        })
        .collect();

    debug!(
        "[Smoothing] {} of {} vias smoothed in {}-point track",
        smoothed_count,
        vias.len(),
        track.len()
    );

    result
}

/// Smooth explicit track indices instead of looking vias up by value.
///
/// Returns the coordinate at each index after processing it: the neighbor
/// midpoint for interior indices, the unchanged point for the first and last.
///
/// # Errors
/// [`TrackError::IndexOutOfBounds`] if any index is past the end of the track;
/// the track is left untouched in that case.
pub fn smooth_at_indices(track: &mut [Coordinate], indices: &[usize]) -> Result<Vec<Coordinate>> {
    if let Some(&index) = indices.iter().find(|&&ix| ix >= track.len()) {
        return Err(TrackError::IndexOutOfBounds {
            index,
            len: track.len(),
        });
    }

    Ok(indices
        .iter()
        .map(|&ix| smooth_interior(track, ix).unwrap_or(track[ix]))
        .collect())
}

/// Replace `track[ix]` by its neighbor midpoint when it has both neighbors.
fn smooth_interior(track: &mut [Coordinate], ix: usize) -> Option<Coordinate> {
    if ix == 0 || ix + 1 >= track.len() {
        return None;
    }
    let mid = track[ix - 1].midpoint(&track[ix + 1]);
    track[ix] = mid;
    Some(mid)
}
