#[path = "../tests/utils/mod.rs"]
mod utils;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cheap_ruler::{CheapRuler, Point};
use utils::get_lines;

pub fn line_slice_benchmark(c: &mut Criterion) {
    let ruler = CheapRuler::from_latitude(32.8351).unwrap();
    let lines = get_lines();
    let lengths: Vec<f64> = lines.iter().map(|l| ruler.line_distance(l)).collect();
    let endpoints: Vec<(Point, Point)> = lines
        .iter()
        .zip(lengths.iter())
        .map(|(line, &dist)| {
            (
                ruler.along(line, dist * 0.3).unwrap(),
                ruler.along(line, dist * 0.7).unwrap(),
            )
        })
        .collect();
    println!("Benchmarking {} lines", lines.len());
    let mut group = c.benchmark_group("line_slice");

    group.bench_function("line_slice", |b| {
        b.iter(|| {
            for (line, &(start, stop)) in lines.iter().zip(endpoints.iter()) {
                black_box(ruler.line_slice(start, stop, line));
            }
        })
    });
    group.bench_function("line_slice_along", |b| {
        b.iter(|| {
            for (line, &dist) in lines.iter().zip(lengths.iter()) {
                black_box(ruler.line_slice_along(dist * 0.3, dist * 0.7, line));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, line_slice_benchmark);
criterion_main!(benches);
