mod path;

pub use path::PointOnLine;

use crate::errors::RulerError;
use crate::units::Unit;
use crate::utils::wrap_degrees;
use crate::{BBox, Point};
use std::f64::consts::PI;
use tracing::{debug, warn};

// WGS84 ellipsoid
const RE: f64 = 6378.137;
const FE: f64 = 1. / 298.257223563;
const E2: f64 = FE * (2. - FE);
const RAD: f64 = PI / 180.;

/// Planar approximation of geodesic measurements around a reference latitude.
///
/// Lengths are in the ruler's unit, angles and coordinates in degrees. The
/// approximation is good to within a fraction of a percent for distances up
/// to a few hundred kilometers from the reference latitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CheapRuler {
    kx: f64,
    ky: f64,
    unit: Unit,
}

impl CheapRuler {
    pub fn new(lat: f64, unit: Unit) -> Result<Self, RulerError> {
        if !lat.is_finite() || lat.abs() > 90. {
            warn!(lat, "rejected reference latitude");
            return Err(RulerError::InvalidLatitude(lat));
        }

        let m = RAD * RE * unit.factor();
        let coslat = (lat * RAD).cos();
        let w2 = 1. / (1. - E2 * (1. - coslat * coslat));
        let w = w2.sqrt();

        // Normal and meridional radii of curvature.
        let kx = m * w * coslat;
        let ky = m * w * w2 * (1. - E2);

        debug!(lat, unit = %unit, kx, ky, "constructed ruler");
        Ok(CheapRuler { kx, ky, unit })
    }

    /// A kilometer ruler.
    pub fn from_latitude(lat: f64) -> Result<Self, RulerError> {
        Self::new(lat, Unit::Kilometers)
    }

    /// A ruler for the latitude at the center of slippy-map tile row `y`
    /// at zoom `z`.
    pub fn from_tile(y: u32, z: u8, unit: Unit) -> Result<Self, RulerError> {
        let n = PI * (1. - 2. * (f64::from(y) + 0.5) / 2f64.powi(i32::from(z)));
        let lat = n.sinh().atan() / RAD;
        Self::new(lat, unit)
    }

    pub fn with_unit_name(lat: f64, unit: &str) -> Result<Self, RulerError> {
        Self::new(lat, unit.parse()?)
    }

    /// Distance per degree of longitude.
    pub fn kx(&self) -> f64 {
        self.kx
    }

    /// Distance per degree of latitude.
    pub fn ky(&self) -> f64 {
        self.ky
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn distance(&self, a: Point, b: Point) -> f64 {
        let dx = wrap_degrees(a.lon - b.lon) * self.kx;
        let dy = (a.lat - b.lat) * self.ky;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing from `a` to `b` in degrees, 0 being north and 90 east.
    pub fn bearing(&self, a: Point, b: Point) -> f64 {
        let dx = wrap_degrees(b.lon - a.lon) * self.kx;
        let dy = (b.lat - a.lat) * self.ky;
        dx.atan2(dy) / RAD
    }

    pub fn destination(&self, p: Point, dist: f64, bearing: f64) -> Point {
        let a = bearing * RAD;
        self.offset(p, a.sin() * dist, a.cos() * dist)
    }

    /// Move `p` by `dx` east and `dy` north, both in the ruler's unit.
    pub fn offset(&self, p: Point, dx: f64, dy: f64) -> Point {
        Point {
            lon: p.lon + dx / self.kx,
            lat: p.lat + dy / self.ky,
        }
    }

    /// Area of a polygon given as an outer ring followed by holes, in square
    /// units. Rings need not be closed.
    pub fn area<R: AsRef<[Point]>>(&self, polygon: &[R]) -> f64 {
        let mut sum = 0.;
        for (i, ring) in polygon.iter().enumerate() {
            let ring = ring.as_ref();
            if ring.len() < 3 {
                continue;
            }
            let sign = if i == 0 { 1. } else { -1. };
            let mut k = ring.len() - 1;
            for j in 0..ring.len() {
                sum += wrap_degrees(ring[j].lon - ring[k].lon)
                    * (ring[j].lat + ring[k].lat)
                    * sign;
                k = j;
            }
        }
        (sum.abs() / 2.) * self.kx * self.ky
    }

    pub fn buffer_point(&self, p: Point, buffer: f64) -> BBox {
        let v = buffer / self.ky;
        let h = buffer / self.kx;
        BBox {
            west: p.lon - h,
            south: p.lat - v,
            east: p.lon + h,
            north: p.lat + v,
        }
    }

    pub fn buffer_bbox(&self, bbox: BBox, buffer: f64) -> BBox {
        let v = buffer / self.ky;
        let h = buffer / self.kx;
        BBox {
            west: bbox.west - h,
            south: bbox.south - v,
            east: bbox.east + h,
            north: bbox.north + v,
        }
    }

    pub fn inside_bbox(&self, p: Point, bbox: BBox) -> bool {
        bbox.contains(p)
    }
}
