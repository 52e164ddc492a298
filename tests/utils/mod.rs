//! Fixture loading shared by the integration tests and the benches.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

use cheap_ruler::from_wkt::{parse_wkt, Geometry};
use cheap_ruler::{BBox, Point};

pub(crate) fn read_test_case(name: &str) -> Vec<Geometry> {
    let filepath = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(format!("{}.wkt", name));
    let contents = fs::read_to_string(&filepath).unwrap();

    contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .flat_map(|l| parse_wkt(l).unwrap())
        .collect()
}

#[allow(dead_code)]
pub(crate) fn get_lines() -> Vec<Vec<Point>> {
    read_test_case("lines")
        .into_iter()
        .filter_map(Geometry::into_line)
        .collect()
}

#[allow(dead_code)]
pub(crate) fn get_polygons() -> Vec<Vec<Vec<Point>>> {
    read_test_case("polygons")
        .into_iter()
        .filter_map(Geometry::into_polygon)
        .collect()
}

#[allow(dead_code)]
pub(crate) fn get_random_points(bbox: BBox, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Point::new(
            rng.gen_range(bbox.west, bbox.east),
            rng.gen_range(bbox.south, bbox.north),
        ));
    }

    results
}
