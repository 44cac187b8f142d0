extern crate nodepath;
extern crate nodepath_tests;
#[macro_use]
extern crate criterion;

use criterion::Criterion;
use nodepath::algorithms::fit::{find_path, DEFAULT_CURVATURE};
use nodepath::algorithms::length::{length, segment_lengths, SampleType};
use nodepath::algorithms::sample::{point, points, DEFAULT_POINT_AMOUNT};
use nodepath::geom::DEFAULT_CURVE_SAMPLES;
use nodepath::path::Path;
use nodepath_tests::*;

const N: usize = 100;

fn wave() -> Path {
    let input: Vec<(f64, f64)> = (0..50)
        .map(|i| {
            let x = i as f64 * 10.0;
            (x, (x * 0.05).sin() * 100.0)
        })
        .collect();

    find_path(&input, DEFAULT_CURVATURE)
}

fn sample_with_memoized_lengths(bench: &mut Criterion) {
    init_logger();
    let path = wave();
    bench.bench_function("point memoized lengths", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..N {
                let t = i as f64 / (N - 1) as f64;
                if let Ok(sample) = point(&path, t, None) {
                    sum += sample.position().x;
                }
            }

            criterion::black_box(sum);
        })
    });
}

fn sample_with_recomputed_lengths(bench: &mut Criterion) {
    let path = wave();
    bench.bench_function("point recomputed lengths", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..N {
                let t = i as f64 / (N - 1) as f64;
                let segments =
                    segment_lengths(&path, SampleType::Normalized, DEFAULT_CURVE_SAMPLES).unwrap();
                if let Ok(sample) = point(&path, t, Some(&segments[..])) {
                    sum += sample.position().x;
                }
            }

            criterion::black_box(sum);
        })
    });
}

fn sample_points(bench: &mut Criterion) {
    let paths = test_paths();
    bench.bench_function("points", |b| {
        b.iter(|| {
            for path in &paths {
                for sample in points(path, DEFAULT_POINT_AMOUNT).unwrap() {
                    criterion::black_box(sample.unwrap().position());
                }
            }
        })
    });
}

fn measure(bench: &mut Criterion) {
    let path = wave();
    bench.bench_function("length", |b| {
        b.iter(|| {
            criterion::black_box(length(&path, DEFAULT_CURVE_SAMPLES).unwrap());
        })
    });
}

criterion_group!(
    sampling,
    sample_with_memoized_lengths,
    sample_with_recomputed_lengths,
    sample_points,
    measure
);
criterion_main!(sampling);
