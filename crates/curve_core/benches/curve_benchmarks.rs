//! Criterion benchmarks for curve_core.
//!
//! Measures spline construction across pillar counts and the end-to-end
//! table-to-dense-curve path at the dashboard's size (13 pillars, 1001 queries).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_core::curves::build_and_evaluate_curve;
use curve_core::math::grid::linspace;
use curve_core::math::interpolators::{CubicSplineInterpolator, SplineBoundary};
use curve_core::types::Date;

/// Generate pillar data for spline benchmarks.
fn generate_1d_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| 30.0 * i as f64 / (n - 1) as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| 4.0 + 0.5 * (x / 5.0).sin()).collect();
    (xs, ys)
}

/// Benchmark spline construction and dense evaluation.
fn bench_cubic_spline(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_spline");
    let grid = linspace(0.0, 30.0, 1001);

    for size in [4, 13, 100] {
        let (xs, ys) = generate_1d_data(size);

        for boundary in [SplineBoundary::NotAKnot, SplineBoundary::Natural] {
            group.bench_with_input(
                BenchmarkId::new(format!("construction/{}", boundary), size),
                &(&xs, &ys),
                |b, (xs, ys)| {
                    b.iter(|| {
                        CubicSplineInterpolator::with_boundary(
                            black_box(xs),
                            black_box(ys),
                            boundary,
                        )
                        .unwrap()
                    });
                },
            );
        }

        let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        group.bench_with_input(BenchmarkId::new("evaluate_1001", size), &interp, |b, interp| {
            b.iter(|| {
                for &x in &grid {
                    black_box(interp.extrapolate(black_box(x)));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the full tenor table to dense curve path.
fn bench_build_and_evaluate(c: &mut Criterion) {
    let rows = [
        ("ON", 4.43),
        ("1M", 4.496),
        ("3M", 4.448),
        ("6M", 4.442),
        ("1Y", 4.087),
        ("2Y", 4.328),
        ("3Y", 4.321),
        ("5Y", 4.419),
        ("7Y", 4.502),
        ("10Y", 4.778),
        ("15Y", 5.085),
        ("20Y", 5.287),
        ("30Y", 4.589),
    ];
    let grid = linspace(0.0, 30.0, 1001);
    let reference = Date::from_ymd(2025, 2, 25).unwrap();

    c.bench_function("build_and_evaluate_curve/13x1001", |b| {
        b.iter(|| build_and_evaluate_curve(black_box(&rows), black_box(&grid), reference).unwrap());
    });
}

criterion_group!(benches, bench_cubic_spline, bench_build_and_evaluate);
criterion_main!(benches);
