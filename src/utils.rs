use crate::Point;

/// Normalize a longitude difference into [-180, 180].
///
/// Every longitude delta must pass through here before it is scaled, or
/// results are wrong near the antimeridian. Non-finite input gives NaN.
pub fn wrap_degrees(deg: f64) -> f64 {
    let mut deg = deg;
    if deg.abs() > 360. {
        deg %= 360.;
    }
    while deg < -180. {
        deg += 360.;
    }
    while deg > 180. {
        deg -= 360.;
    }
    deg
}

/// Linear interpolation between two points in degree space, going the short
/// way around the antimeridian.
pub fn interpolate(a: Point, b: Point, t: f64) -> Point {
    let dx = wrap_degrees(b.lon - a.lon);
    let dy = b.lat - a.lat;
    Point {
        lon: a.lon + dx * t,
        lat: a.lat + dy * t,
    }
}
