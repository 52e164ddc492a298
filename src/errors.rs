use crate::units::unit_names;
use crate::Point;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RulerError {
    #[error("Invalid reference latitude {0}: expected a finite value in [-90, 90]")]
    InvalidLatitude(f64),

    #[error("Unknown unit {name:?}, valid units are: {}", unit_names())]
    UnknownUnit { name: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Line has no coordinates")]
    EmptyLine,

    #[error("Polygon has no rings")]
    EmptyPolygon,

    #[error("Non-finite coordinate {index} at {position:?}")]
    NonFiniteCoordinate { index: usize, position: Point },

    #[error("Latitude of coordinate {index} out of range at {position:?}")]
    LatitudeOutOfRange { index: usize, position: Point },

    #[error("Ring {ring} has fewer than 3 coordinates")]
    TooFewRingCoordinates { ring: usize },
}
