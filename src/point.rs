use std::fmt;

/// A geographic position in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl From<(f64, f64)> for Point {
    fn from(coord: (f64, f64)) -> Self {
        Point {
            lon: coord.0,
            lat: coord.1,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from(coord: [f64; 2]) -> Self {
        Point {
            lon: coord[0],
            lat: coord[1],
        }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.lon, point.lat]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Point { lon, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}
