use super::CheapRuler;
use crate::utils::{interpolate, wrap_degrees};
use crate::Point;

/// The closest point on a line to some query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointOnLine {
    pub point: Point,
    /// Index of the first vertex of the segment holding `point`.
    pub index: usize,
    /// Position of `point` along that segment, in [0, 1].
    pub t: f64,
}

impl PointOnLine {
    fn precedes(&self, other: &PointOnLine) -> bool {
        self.index < other.index || (self.index == other.index && self.t < other.t)
    }
}

impl CheapRuler {
    pub fn line_distance(&self, line: &[Point]) -> f64 {
        line.windows(2).map(|s| self.distance(s[0], s[1])).sum()
    }

    /// The point at `dist` along the line, clamped to its endpoints. None only
    /// for an empty line.
    pub fn along(&self, line: &[Point], dist: f64) -> Option<Point> {
        let first = *line.first()?;
        if dist <= 0. {
            return Some(first);
        }

        let mut sum = 0.;
        for s in line.windows(2) {
            let d = self.distance(s[0], s[1]);
            sum += d;
            if sum > dist {
                return Some(interpolate(s[0], s[1], (dist - (sum - d)) / d));
            }
        }
        line.last().copied()
    }

    pub fn point_to_segment_distance(&self, p: Point, a: Point, b: Point) -> f64 {
        let (closest, _) = self.project_on_segment(p, a, b);
        self.distance(p, closest)
    }

    /// Project `p` onto the segment `[a, b]`. The projection parameter is
    /// computed in scaled space, so unequal lon/lat scales don't skew it.
    /// Returns the projected point and the unclamped parameter.
    fn project_on_segment(&self, p: Point, a: Point, b: Point) -> (Point, f64) {
        let mut x = a.lon;
        let mut y = a.lat;
        let dx = wrap_degrees(b.lon - x) * self.kx;
        let dy = (b.lat - y) * self.ky;
        let mut t = 0.;

        if dx != 0. || dy != 0. {
            t = (wrap_degrees(p.lon - x) * self.kx * dx + (p.lat - y) * self.ky * dy)
                / (dx * dx + dy * dy);

            if t > 1. {
                x = b.lon;
                y = b.lat;
            } else if t > 0. {
                x += (dx / self.kx) * t;
                y += (dy / self.ky) * t;
            }
        }
        (Point { lon: x, lat: y }, t)
    }

    fn square_distance(&self, a: Point, b: Point) -> f64 {
        let dx = wrap_degrees(a.lon - b.lon) * self.kx;
        let dy = (a.lat - b.lat) * self.ky;
        dx * dx + dy * dy
    }

    /// Closest point on the line to `p`. Ties go to the earliest segment.
    /// None only for an empty line.
    pub fn point_on_line(&self, line: &[Point], p: Point) -> Option<PointOnLine> {
        let mut best = PointOnLine {
            point: *line.first()?,
            index: 0,
            t: 0.,
        };
        let mut min_dist = f64::INFINITY;

        for (i, s) in line.windows(2).enumerate() {
            let (point, t) = self.project_on_segment(p, s[0], s[1]);
            let sq_dist = self.square_distance(p, point);
            if sq_dist < min_dist {
                min_dist = sq_dist;
                best = PointOnLine { point, index: i, t };
            }
        }

        best.t = best.t.max(0.).min(1.);
        Some(best)
    }

    /// The part of the line between the projections of `start` and `stop`,
    /// in the line's own direction whichever order they are given in.
    pub fn line_slice(&self, start: Point, stop: Point, line: &[Point]) -> Vec<Point> {
        let (mut p1, mut p2) = match (
            self.point_on_line(line, start),
            self.point_on_line(line, stop),
        ) {
            (Some(p1), Some(p2)) => (p1, p2),
            _ => return Vec::new(),
        };
        if p2.precedes(&p1) {
            std::mem::swap(&mut p1, &mut p2);
        }

        let mut slice = vec![p1.point];
        let l = p1.index + 1;
        let r = p2.index;

        if l <= r && line[l] != p1.point {
            slice.push(line[l]);
        }
        for &vertex in line.iter().take(r + 1).skip(l + 1) {
            slice.push(vertex);
        }
        if line[r] != p2.point {
            slice.push(p2.point);
        }
        slice
    }

    /// The part of the line between the distances `start` and `stop` along
    /// it. Negative distances clamp to the first vertex; a `stop` past the
    /// end stops at the last vertex.
    pub fn line_slice_along(&self, start: f64, stop: f64, line: &[Point]) -> Vec<Point> {
        let start = start.max(0.);
        let stop = stop.max(0.);
        let mut sum = 0.;
        let mut slice = Vec::new();

        for s in line.windows(2) {
            let (p0, p1) = (s[0], s[1]);
            let d = self.distance(p0, p1);
            sum += d;

            if sum > start && slice.is_empty() {
                slice.push(interpolate(p0, p1, segment_fraction(start, sum - d, d)));
            }
            if sum >= stop {
                slice.push(interpolate(p0, p1, segment_fraction(stop, sum - d, d)));
                return slice;
            }
            if sum > start {
                slice.push(p1);
            }
        }
        slice
    }
}

/// Where `dist` falls on a segment of length `d` that starts `before` along
/// the line. Zero-length segments resolve to their first vertex.
fn segment_fraction(dist: f64, before: f64, d: f64) -> f64 {
    if d > 0. {
        (dist - before) / d
    } else {
        0.
    }
}
