#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the rasterizers, clippers and grid painting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_raster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for length in [10, 100, 1_000] {
        let start = Point::new(-f64::from(length) / 2.0, -f64::from(length) / 5.0);
        let end = Point::new(f64::from(length) / 2.0, f64::from(length) / 5.0);

        for algorithm in LineAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), length),
                &length,
                |b, _| b.iter(|| rasterize_line(black_box(start), black_box(end), Rgba::RED, algorithm)),
            );
        }
    }

    group.finish();
}

fn conic_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("conic");

    for radius in [5, 50, 500] {
        group.bench_with_input(BenchmarkId::new("circle", radius), &radius, |b, &r| {
            b.iter(|| midpoint_circle(Point::ORIGIN, black_box(r), Rgba::GREEN));
        });
        group.bench_with_input(BenchmarkId::new("ellipse", radius), &radius, |b, &r| {
            b.iter(|| midpoint_ellipse(Point::ORIGIN, black_box(r), black_box(r / 2), Rgba::GREEN));
        });
        group.bench_with_input(BenchmarkId::new("ellipse_rotated", radius), &radius, |b, &r| {
            b.iter(|| midpoint_ellipse_rotated(Point::ORIGIN, black_box(r), r / 2, 0.6, Rgba::GREEN));
        });
    }

    group.finish();
}

fn fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanline_fill");

    for vertices in [3, 16, 128] {
        // Star polygon: alternating outer and inner radius.
        let star: Vec<Point> = (0..vertices * 2)
            .map(|i| {
                let angle = std::f64::consts::PI * f64::from(i) / f64::from(vertices);
                let radius = if i % 2 == 0 { 80.0 } else { 35.0 };
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(vertices), &star, |b, star| {
            b.iter(|| scanline_fill(black_box(star), Rgba::BLUE));
        });
    }

    group.finish();
}

fn clip_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    let window = Rect::new(-10.0, -10.0, 20.0, 20.0);

    group.bench_function("liang_barsky", |b| {
        b.iter(|| {
            liang_barsky(
                black_box(&window),
                black_box(Point::new(-25.0, -3.0)),
                black_box(Point::new(18.0, 14.0)),
            )
        });
    });

    let subject: Vec<Point> = (0..64)
        .map(|i| {
            let angle = std::f64::consts::TAU * f64::from(i) / 64.0;
            Point::new(15.0 * angle.cos() + 4.0, 15.0 * angle.sin())
        })
        .collect();
    let corners = window.corners();
    group.bench_function("sutherland_hodgman", |b| {
        b.iter(|| sutherland_hodgman(black_box(&subject), black_box(&corners)));
    });

    group.finish();
}

fn paint_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint");
    let pixels = scanline_fill(
        &[
            Point::from_cell(-18, -18),
            Point::from_cell(18, -12),
            Point::from_cell(4, 18),
        ],
        Rgba::RED.with_alpha(180),
    );

    group.bench_function("grid_canvas", |b| {
        b.iter(|| {
            let mut canvas = GridCanvas::new(GridConfig::default()).expect("default grid is valid");
            canvas.clear(Rgba::WHITE);
            canvas.draw_grid(Rgba::new(0, 0, 0, 40));
            canvas.paint(black_box(&pixels))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    line_benchmark,
    conic_benchmark,
    fill_benchmark,
    clip_benchmark,
    paint_benchmark
);
criterion_main!(benches);
