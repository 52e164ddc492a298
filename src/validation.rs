//! Opt-in input checks.
//!
//! Ruler queries never fail: NaN in gives NaN out, and an empty line gives
//! `None` or an empty slice. Callers that would rather reject such input up
//! front can run it through these checks first.

use crate::errors::ValidationError;
use crate::Point;

pub fn validate_point(point: Point) -> Result<(), ValidationError> {
    check_point(0, point)
}

pub fn validate_line(line: &[Point]) -> Result<(), ValidationError> {
    if line.is_empty() {
        return Err(ValidationError::EmptyLine);
    }
    for (index, &position) in line.iter().enumerate() {
        check_point(index, position)?;
    }
    Ok(())
}

/// Every ring needs at least 3 coordinates. Coordinate indices in errors are
/// relative to their ring.
pub fn validate_polygon<R: AsRef<[Point]>>(polygon: &[R]) -> Result<(), ValidationError> {
    if polygon.is_empty() {
        return Err(ValidationError::EmptyPolygon);
    }
    for (ring_index, ring) in polygon.iter().enumerate() {
        let ring = ring.as_ref();
        if ring.len() < 3 {
            return Err(ValidationError::TooFewRingCoordinates { ring: ring_index });
        }
        for (index, &position) in ring.iter().enumerate() {
            check_point(index, position)?;
        }
    }
    Ok(())
}

fn check_point(index: usize, position: Point) -> Result<(), ValidationError> {
    if !position.is_finite() {
        Err(ValidationError::NonFiniteCoordinate { index, position })
    } else if position.lat.abs() > 90. {
        Err(ValidationError::LatitudeOutOfRange { index, position })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(coords: Vec<(f64, f64)>) -> Vec<Point> {
        coords.into_iter().map(|c| c.into()).collect()
    }

    #[test]
    fn test_valid_input() {
        assert_eq!(validate_point((180., -90.).into()), Ok(()));
        assert_eq!(validate_line(&line(vec![(0., 0.)])), Ok(()));
        assert_eq!(
            validate_polygon(&[line(vec![(0., 0.), (1., 0.), (1., 1.), (0., 0.)])]),
            Ok(())
        );
    }

    #[test]
    fn test_invalid_lines() {
        assert_eq!(validate_line(&[]), Err(ValidationError::EmptyLine));
        // NaN != NaN, so match on the index instead of comparing errors.
        match validate_line(&line(vec![(0., 0.), (f64::NAN, 1.)])) {
            Err(ValidationError::NonFiniteCoordinate { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected a non-finite coordinate error, got {:?}", other),
        }
        assert_eq!(
            validate_line(&line(vec![(0., 0.), (1., 91.)])),
            Err(ValidationError::LatitudeOutOfRange {
                index: 1,
                position: Point::new(1., 91.),
            })
        );
    }

    #[test]
    fn test_invalid_polygons() {
        let empty: Vec<Vec<Point>> = vec![];
        assert_eq!(validate_polygon(&empty), Err(ValidationError::EmptyPolygon));
        assert_eq!(
            validate_polygon(&[
                line(vec![(0., 0.), (1., 0.), (1., 1.), (0., 0.)]),
                line(vec![(0.2, 0.2), (0.3, 0.3)]),
            ]),
            Err(ValidationError::TooFewRingCoordinates { ring: 1 })
        );
    }
}
