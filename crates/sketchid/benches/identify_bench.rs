//! Criterion benchmarks for the sketch pipeline.
//! Focus: smoothing on long strokes, and the full pipeline on square
//! sketches of growing oversampling density.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use sketchid::api::{
    draw_line_stroke, draw_polygon_strokes, identify, smooth, IdentifyCfg, JitterCfg, ReplayToken,
    SmoothCfg,
};

fn square_sketch(points_per_stroke: usize) -> Vec<Vec<Vector2<f64>>> {
    let corners = [
        Vector2::new(0.0, 0.0),
        Vector2::new(100.0, 0.0),
        Vector2::new(100.0, 100.0),
        Vector2::new(0.0, 100.0),
    ];
    let cfg = JitterCfg {
        points_per_stroke,
        jitter: 0.8,
    };
    draw_polygon_strokes(&corners, cfg, ReplayToken { seed: 2024, index: 0 })
}

fn bench_smooth(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth");
    for &n in &[50usize, 200, 1000] {
        let stroke = draw_line_stroke(
            Vector2::new(0.0, 0.0),
            Vector2::new(100.0, 0.0),
            JitterCfg {
                points_per_stroke: n,
                jitter: 0.8,
            },
            ReplayToken { seed: 7, index: 1 },
        );
        group.bench_with_input(BenchmarkId::from_parameter(n), &stroke, |b, stroke| {
            b.iter(|| smooth(stroke, 1.0, &SmoothCfg::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_identify(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify_square");
    for &n in &[30usize, 100, 300] {
        let strokes = square_sketch(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &strokes, |b, strokes| {
            b.iter(|| identify(strokes, 1.0, &IdentifyCfg::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_smooth, bench_identify);
criterion_main!(benches);
