//! Read WKT geometries into ruler inputs: points, lines (`Vec<Point>`) and
//! polygons (`Vec<Vec<Point>>`, outer ring first).

use crate::Point;
use wkt::types;
use wkt::types::Coord;

pub type Line = Vec<Point>;
pub type Polygon = Vec<Vec<Point>>;

#[derive(PartialEq, Debug)]
pub enum Geometry {
    Empty,
    Point(Point),
    MultiPoint(Vec<Point>),
    LineString(Line),
    MultiLineString(Vec<Line>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// The geometry as a single line, if it is one.
    pub fn into_line(self) -> Option<Line> {
        match self {
            Geometry::LineString(line) => Some(line),
            _ => None,
        }
    }

    /// The geometry as a single polygon, if it is one.
    pub fn into_polygon(self) -> Option<Polygon> {
        match self {
            Geometry::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Point {
            lon: coord.x,
            lat: coord.y,
        }
    }
}

fn point_to_position(point: types::Point<f64>) -> Option<Point> {
    Some(point.0?.into())
}

fn linestring_to_positions(linestring: types::LineString<f64>) -> Line {
    linestring.0.into_iter().map(Point::from).collect()
}

fn polygon_to_rings(poly: types::Polygon<f64>) -> Option<Polygon> {
    if poly.0.is_empty() {
        return None;
    }
    Some(poly.0.into_iter().map(linestring_to_positions).collect())
}

pub fn parse_wkt(wkt_str: &str) -> Result<Vec<Geometry>, &str> {
    let wkt_geoms = wkt::Wkt::from_str(wkt_str)?;
    let geoms = wkt_geoms.items.into_iter().map(from_wkt_geometry).collect();
    Ok(geoms)
}

fn from_wkt_geometry(geom: wkt::Geometry<f64>) -> Geometry {
    match geom {
        wkt::Geometry::Point(p) => match point_to_position(p) {
            None => Geometry::Empty,
            Some(pos) => Geometry::Point(pos),
        },
        wkt::Geometry::LineString(ls) => Geometry::LineString(linestring_to_positions(ls)),
        wkt::Geometry::Polygon(p) => match polygon_to_rings(p) {
            None => Geometry::Empty,
            Some(rings) => Geometry::Polygon(rings),
        },
        wkt::Geometry::MultiPoint(mp) => {
            Geometry::MultiPoint(mp.0.into_iter().filter_map(point_to_position).collect())
        }
        wkt::Geometry::MultiLineString(mls) => {
            Geometry::MultiLineString(mls.0.into_iter().map(linestring_to_positions).collect())
        }
        wkt::Geometry::MultiPolygon(mpoly) => {
            Geometry::MultiPolygon(mpoly.0.into_iter().filter_map(polygon_to_rings).collect())
        }
        _ => Geometry::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let geoms = parse_wkt("LINESTRING (30.5 50.5, 30.51 50.51)").unwrap();
        assert_eq!(
            geoms,
            vec![Geometry::LineString(vec![
                Point::new(30.5, 50.5),
                Point::new(30.51, 50.51)
            ])]
        );
    }

    #[test]
    fn test_parse_polygon_with_hole() {
        let wkt = "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0), (0.2 0.2, 0.4 0.2, 0.4 0.4, 0.2 0.2))";
        let mut geoms = parse_wkt(wkt).unwrap();
        let polygon = geoms.remove(0).into_polygon().unwrap();
        assert_eq!(polygon.len(), 2);
        assert_eq!(polygon[0][2], Point::new(1., 1.));
        assert_eq!(polygon[1].len(), 4);
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(
            parse_wkt("POINT (180 32.8)").unwrap(),
            vec![Geometry::Point(Point::new(180., 32.8))]
        );
        assert_eq!(
            parse_wkt("MULTIPOINT ((1 2), (3 4))").unwrap(),
            vec![Geometry::MultiPoint(vec![
                Point::new(1., 2.),
                Point::new(3., 4.)
            ])]
        );
    }

    #[test]
    fn test_into_line_mismatch() {
        assert_eq!(Geometry::Point(Point::new(1., 2.)).into_line(), None);
    }

    #[test]
    fn test_parse_error() {
        assert!(parse_wkt("LINESTRING (1 2,").is_err());
    }
}
