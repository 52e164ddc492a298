use crate::utils::wrap_degrees;
use crate::Point;

/// A longitude/latitude box. `west > east` means the box crosses the
/// antimeridian.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl From<[f64; 4]> for BBox {
    fn from(b: [f64; 4]) -> Self {
        BBox {
            west: b[0],
            south: b[1],
            east: b[2],
            north: b[3],
        }
    }
}

impl From<BBox> for [f64; 4] {
    fn from(b: BBox) -> Self {
        [b.west, b.south, b.east, b.north]
    }
}

impl BBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        BBox {
            west,
            south,
            east,
            north,
        }
    }

    /// Smallest non-wrapping box holding all points, or None if there are none.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = BBox::new(first.lon, first.lat, first.lon, first.lat);
        Some(points[1..].iter().fold(init, |mut b, p| {
            b.west = b.west.min(p.lon);
            b.south = b.south.min(p.lat);
            b.east = b.east.max(p.lon);
            b.north = b.north.max(p.lat);
            b
        }))
    }

    pub fn center(&self) -> Point {
        let mut width = self.east - self.west;
        if self.crosses_antimeridian() {
            width += 360.;
        }
        Point {
            lon: wrap_degrees(self.west + width / 2.),
            lat: (self.south + self.north) / 2.,
        }
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Inclusive containment. Longitudes are compared through
    /// `wrap_degrees`, so boxes across the antimeridian work.
    pub fn contains(&self, point: Point) -> bool {
        wrap_degrees(point.lon - self.west) >= 0.
            && wrap_degrees(point.lon - self.east) <= 0.
            && self.south <= point.lat
            && point.lat <= self.north
    }
}
