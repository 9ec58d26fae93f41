//! `lon,lat` coordinate strings as used in routing request URLs.
//!
//! Single points are written longitude first, `"8.3866078,49.0263935"`.
//! Via lists separate points with whitespace:
//! `"8.3881528,49.0268437 8.3881957,49.0294607"`.

use crate::error::OptionExt;
use crate::{Coordinate, Result, TrackError};

/// Parse a `"<lon>,<lat>"` string.
///
/// Whitespace around either number is ignored.
///
/// # Errors
/// [`TrackError::MalformedCoordinate`] when a component is missing, there are
/// more than two, or a number does not parse to a finite value.
///
/// # Example
/// ```
/// use route_smoother::parse_coordinate;
/// let c = parse_coordinate("8.3866078,49.0263935").unwrap();
/// assert_eq!(c.latitude, 49.0263935);
/// assert_eq!(c.longitude, 8.3866078);
/// ```
pub fn parse_coordinate(input: &str) -> Result<Coordinate> {
    let mut parts = input.split(',');
    let lon = parts
        .next()
        .ok_or_malformed(input, "missing longitude")?;
    let lat = parts.next().ok_or_malformed(input, "missing latitude")?;
    if parts.next().is_some() {
        return Err(TrackError::MalformedCoordinate {
            input: input.to_string(),
            message: "expected exactly two components".to_string(),
        });
    }

    Ok(Coordinate::new(
        parse_component(input, lat, "latitude")?,
        parse_component(input, lon, "longitude")?,
    ))
}

/// Parse a whitespace-separated list of `"<lon>,<lat>"` points.
///
/// An empty or blank string is an empty list.
pub fn parse_via_list(input: &str) -> Result<Vec<Coordinate>> {
    input.split_whitespace().map(parse_coordinate).collect()
}

/// Format a coordinate as `"<lon>,<lat>"`.
pub fn format_coordinate(c: &Coordinate) -> String {
    format!("{},{}", c.longitude, c.latitude)
}

/// Format a via list as space-separated `"<lon>,<lat>"` points, the value of
/// a routing request's `via` parameter.
pub fn format_via_list(vias: &[Coordinate]) -> String {
    vias.iter()
        .map(format_coordinate)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_component(input: &str, raw: &str, name: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_malformed(input, &format!("invalid {}: '{}'", name, raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_lon_first() {
        let c = parse_coordinate("8.3866078,49.0263935").unwrap();
        assert_eq!(c, Coordinate::new(49.0263935, 8.3866078));

        let c = parse_coordinate(" -0.1278 , 51.5074 ").unwrap();
        assert_eq!(c, Coordinate::new(51.5074, -0.1278));
    }

    #[test]
    fn test_parse_coordinate_errors() {
        for bad in ["", "8.38", "8.38,49.02,3", "abc,49.0", "8.38,", "NaN,49.0", "8.0,inf"] {
            assert!(
                matches!(
                    parse_coordinate(bad),
                    Err(TrackError::MalformedCoordinate { .. })
                ),
                "expected error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_via_list() {
        let vias = parse_via_list("8.3881528,49.0268437 8.3881957,49.0294607  8.3885819,49.0314303")
            .unwrap();
        assert_eq!(vias.len(), 3);
        assert_eq!(vias[2], Coordinate::new(49.0314303, 8.3885819));

        assert!(parse_via_list("").unwrap().is_empty());
        assert!(parse_via_list("   ").unwrap().is_empty());
        assert!(parse_via_list("8.38,49.02 oops").is_err());
    }

    #[test]
    fn test_format_via_list_is_parseable() {
        let vias = vec![
            Coordinate::new(49.0268437, 8.3881528),
            Coordinate::new(49.0294607, 8.3881957),
        ];
        let text = format_via_list(&vias);
        assert_eq!(text, "8.3881528,49.0268437 8.3881957,49.0294607");
        assert_eq!(parse_via_list(&text).unwrap(), vias);
        assert_eq!(format_via_list(&[]), "");
    }
}
