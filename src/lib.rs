//! Fast approximate geodesic measurements for city-scale geometry.
//!
//! A [`CheapRuler`] linearizes the WGS84 ellipsoid around a reference
//! latitude, then answers distance, bearing, projection, slicing, area and
//! bounding-box queries with plain arithmetic.

mod bbox;
mod point;
mod ruler;
mod units;

pub mod errors;
pub mod from_wkt;
pub mod utils;
pub mod validation;

pub use bbox::BBox;
pub use errors::{RulerError, ValidationError};
pub use point::Point;
pub use ruler::{CheapRuler, PointOnLine};
pub use units::{unit_factors, Unit, UNITS};
