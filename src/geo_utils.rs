//! # Geographic Utilities
//!
//! Spherical-earth computations used by the rest of the crate.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_distance`] | Great-circle distance between two coordinates |
//! | [`interpolate_point`] | Point at a given distance from a start toward an end |
//! | [`track_length`] | Total length of a track in meters |
//!
//! ## Example
//!
//! ```rust
//! use route_smoother::{Coordinate, geo_utils};
//!
//! let track = vec![
//!     Coordinate::new(49.0263935, 8.3866078),
//!     Coordinate::new(49.0268437, 8.3881528),
//!     Coordinate::new(49.0294607, 8.3881957),
//! ];
//!
//! let length = geo_utils::track_length(&track);
//! assert!(length > 400.0 && length < 500.0);
//! ```
//!
//! ## Earth model
//!
//! The earth is a sphere of radius [`EARTH_RADIUS`], the mean of the
//! equatorial (6 378 137 m) and polar (6 356 752.3 m) radii. The radius varies
//! by only 0.3% between equator and pole, which is well below GPS noise for the
//! short segments this crate deals with.

use crate::Coordinate;

/// Mean earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_367_444.5;

/// Degrees to radians.
pub const DEGREE_TO_RADIAN: f64 = 0.0174532925199433;

/// Meters per degree of latitude on the sphere.
const METERS_PER_DEGREE: f64 = EARTH_RADIUS * std::f64::consts::PI / 180.0;

// =============================================================================
// Distance Functions
// =============================================================================

/// Calculate the great-circle distance between two coordinates using the
/// haversine formula.
///
/// Returns meters. Identical points give exactly 0, antipodal points give
/// `π · EARTH_RADIUS`.
///
/// # Example
///
/// ```rust
/// use route_smoother::{Coordinate, geo_utils};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(1.0, 0.0);
/// let d = geo_utils::haversine_distance(&a, &b);
/// assert!((d - 111_133.0).abs() < 1.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let radlat_from = from.latitude * DEGREE_TO_RADIAN;
    let radlat_to = to.latitude * DEGREE_TO_RADIAN;

    let dlat = (to.latitude - from.latitude) * DEGREE_TO_RADIAN;
    let dlon = (to.longitude - from.longitude) * DEGREE_TO_RADIAN;

    let h = (dlat / 2.0).sin().powi(2)
        + radlat_from.cos() * radlat_to.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Calculate the total length of a track in meters.
///
/// Sums the haversine distance between consecutive points. Empty or
/// single-point tracks return 0.0.
pub fn track_length(points: &[Coordinate]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

// =============================================================================
// Interpolation
// =============================================================================

/// Compute the point reached after traveling `along` meters from `start`
/// toward `end`.
///
/// This is a planar approximation, not a geodesic: the segment is split into
/// its pure-latitude leg `y` and pure-longitude leg `x`, which are treated as
/// the sides of a right triangle. The distance `along` is laid out on the
/// hypotenuse and projected back onto both legs. The longitude delta is scaled
/// by the cosine of the latitude of the resulting point.
///
/// Segments with no latitude change (`y == 0`) move along the parallel of
/// `start`. Identical start and end points fall into that case and move east.
///
/// # Example
///
/// ```rust
/// use route_smoother::{Coordinate, geo_utils};
///
/// let start = Coordinate::new(0.0, 0.0);
/// let end = Coordinate::new(1.0, 0.0);
/// let p = geo_utils::interpolate_point(&start, &end, 1000.0);
/// assert!((geo_utils::haversine_distance(&start, &p) - 1000.0).abs() < 1e-6);
/// ```
pub fn interpolate_point(start: &Coordinate, end: &Coordinate, along: f64) -> Coordinate {
    let x = haversine_distance(start, &Coordinate::new(start.latitude, end.longitude));
    let y = haversine_distance(start, &Coordinate::new(end.latitude, start.longitude));

    let sgn_lat = if end.latitude >= start.latitude { 1.0 } else { -1.0 };
    let sgn_lon = if end.longitude >= start.longitude { 1.0 } else { -1.0 };

    if y != 0.0 {
        let ratio = x / y;
        let dy = (along * along / (ratio * ratio + 1.0)).sqrt();
        let dlat = dy / METERS_PER_DEGREE;
        let dx = ratio * dy;
        let lat = start.latitude + dlat * sgn_lat;
        let dlon = dx / (METERS_PER_DEGREE * (lat * DEGREE_TO_RADIAN).cos());
        Coordinate::new(lat, start.longitude + dlon * sgn_lon)
    } else {
        let dlon = along / (METERS_PER_DEGREE * (start.latitude * DEGREE_TO_RADIAN).cos());
        Coordinate::new(start.latitude, start.longitude + dlon * sgn_lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine, Point};

    fn karlsruhe_track() -> Vec<Coordinate> {
        vec![
            Coordinate::new(49.0263935, 8.3866078),
            Coordinate::new(49.0268437, 8.3881528),
            Coordinate::new(49.0294607, 8.3881957),
            Coordinate::new(49.0314303, 8.3885819),
            Coordinate::new(49.0341314, 8.3834750),
        ]
    }

    #[test]
    fn test_distance_identical_points_is_zero() {
        let a = Coordinate::new(49.0263935, 8.3866078);
        assert_eq!(haversine_distance(&a, &a), 0.0);
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(haversine_distance(&origin, &origin), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let track = karlsruhe_track();
        for a in &track {
            for b in &track {
                let ab = haversine_distance(a, b);
                let ba = haversine_distance(b, a);
                assert!(ab >= 0.0);
                assert!((ab - ba).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_distance_antipodal() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = haversine_distance(&a, &b);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS;
        assert!(!d.is_nan());
        assert!((d - half_circumference).abs() < 1.0);

        let north = Coordinate::new(45.0, 10.0);
        let south = Coordinate::new(-45.0, -170.0);
        assert!((haversine_distance(&north, &south) - half_circumference).abs() < 1.0);
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        assert!((haversine_distance(&a, &b) - METERS_PER_DEGREE).abs() < 1e-6);
    }

    #[test]
    fn test_distance_close_to_geo_haversine() {
        // geo uses a 6371 km radius, so allow for the radius ratio
        let track = karlsruhe_track();
        let ratio = 6_371_008.8 / EARTH_RADIUS;
        for w in track.windows(2) {
            let ours = haversine_distance(&w[0], &w[1]);
            let theirs = Haversine::distance(Point::from(w[0]), Point::from(w[1]));
            assert!((ours * ratio - theirs).abs() < 0.01);
        }
    }

    #[test]
    fn test_distance_additive_on_meridian() {
        let a = Coordinate::new(49.0, 8.4);
        let b = Coordinate::new(49.001, 8.4);
        let c = Coordinate::new(49.002, 8.4);
        let sum = haversine_distance(&a, &b) + haversine_distance(&b, &c);
        assert!((sum - haversine_distance(&a, &c)).abs() < 1e-6);
    }

    #[test]
    fn test_track_length() {
        assert_eq!(track_length(&[]), 0.0);
        assert_eq!(track_length(&[Coordinate::new(49.0, 8.0)]), 0.0);

        let track = karlsruhe_track();
        let expected: f64 = track
            .windows(2)
            .map(|w| haversine_distance(&w[0], &w[1]))
            .sum();
        assert_eq!(track_length(&track), expected);
    }

    #[test]
    fn test_track_length_north_south() {
        let track = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(2.0, 0.0),
        ];
        let length = track_length(&track);
        assert!((length - 222_640.0).abs() < 222_640.0 * 0.01);
    }

    #[test]
    fn test_interpolate_along_meridian() {
        let start = Coordinate::new(49.0, 8.4);
        let end = Coordinate::new(48.0, 8.4);
        let p = interpolate_point(&start, &end, 500.0);
        assert_eq!(p.longitude, 8.4);
        assert!(p.latitude < start.latitude);
        assert!((haversine_distance(&start, &p) - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_interpolate_along_parallel() {
        let start = Coordinate::new(49.0, 8.4);
        let end = Coordinate::new(49.0, 8.3);
        let p = interpolate_point(&start, &end, 250.0);
        assert_eq!(p.latitude, 49.0);
        assert!(p.longitude < start.longitude);
        // Parallel is not a great circle, the chord is slightly shorter
        let d = haversine_distance(&start, &p);
        assert!((d - 250.0).abs() < 0.01);
    }

    #[test]
    fn test_interpolate_diagonal_segment() {
        let track = karlsruhe_track();
        for w in track.windows(2) {
            let seg = haversine_distance(&w[0], &w[1]);
            let half = interpolate_point(&w[0], &w[1], seg / 2.0);
            assert!((haversine_distance(&w[0], &half) - seg / 2.0).abs() < seg * 0.005);

            // Traveling the full segment lands on its end point
            let full = interpolate_point(&w[0], &w[1], seg);
            assert!(haversine_distance(&full, &w[1]) < 0.5);
        }
    }

    #[test]
    fn test_interpolate_identical_points_moves_east() {
        let start = Coordinate::new(10.0, 20.0);
        let p = interpolate_point(&start, &start, 100.0);
        assert_eq!(p.latitude, 10.0);
        assert!(p.longitude > 20.0);
        assert!(p.is_finite());
    }

    #[test]
    fn test_interpolate_zero_distance() {
        let start = Coordinate::new(49.0263935, 8.3866078);
        let end = Coordinate::new(49.0268437, 8.3881528);
        assert_eq!(interpolate_point(&start, &end, 0.0), start);
    }
}
