use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use field_path_editor::app::playback::segment_progress;
use field_path_editor::app::tools::freehand::fit::compute_best_fit;
use field_path_editor::shared::curve_geometry::{sample_arc_through, sample_quadratic_bezier};
use field_path_editor::EditorOptions;
use glam::DVec2;
use std::hint::black_box;

fn bench_curve_sampling(c: &mut Criterion) {
    let a = DVec2::new(-60.0, -60.0);
    let ctrl = DVec2::new(0.0, 80.0);
    let b = DVec2::new(60.0, -60.0);

    c.bench_function("sample_quadratic_bezier", |bench| {
        bench.iter(|| {
            let samples =
                sample_quadratic_bezier(black_box(a), black_box(ctrl), black_box(b), 2.0, 8, 64);
            black_box(samples.len())
        })
    });

    let m = DVec2::new(0.0, 60.0);
    c.bench_function("sample_arc_through", |bench| {
        bench.iter(|| {
            let samples = sample_arc_through(black_box(a), black_box(m), black_box(b), 2.0, 8, 72);
            black_box(samples.len())
        })
    });
}

fn build_synthetic_stroke(count: usize) -> Vec<DVec2> {
    // Viertelkreis mit deterministischem Zitter, wie eine echte Handzeichnung
    (1..=count)
        .map(|i| {
            let ang = std::f64::consts::FRAC_PI_2 * i as f64 / count as f64;
            let wobble = ((i as f64 * 12.9898).sin() * 43758.5453).rem_euclid(1.0) * 0.4 - 0.2;
            let r = 48.0 + wobble;
            DVec2::new(r * ang.cos(), r * ang.sin())
        })
        .collect()
}

fn bench_freehand_fit(c: &mut Criterion) {
    let options = EditorOptions::default();
    let mut group = c.benchmark_group("freehand_fit");

    for &count in &[32usize, 128usize, 512usize] {
        let stroke = build_synthetic_stroke(count);
        group.bench_with_input(
            BenchmarkId::new("compute_best_fit", count),
            &stroke,
            |bench, stroke| {
                bench.iter(|| {
                    let best =
                        compute_best_fit(black_box(DVec2::new(48.0, 0.0)), stroke, &options);
                    black_box(best.is_some())
                })
            },
        );
    }
    group.finish();
}

fn bench_playback_walk(c: &mut Criterion) {
    // Lange Polyline wie nach vielen Freihand-Commits
    let points: Vec<DVec2> = (0..2000)
        .map(|i| DVec2::new(i as f64 * 0.05, ((i as f64) * 0.1).sin() * 10.0))
        .collect();

    c.bench_function("segment_progress_walk", |bench| {
        bench.iter(|| {
            let mut hits = 0usize;
            for step in 0..64 {
                let d = step as f64 * 1.5;
                if segment_progress(black_box(&points), black_box(d)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(
    benches,
    bench_curve_sampling,
    bench_freehand_fit,
    bench_playback_walk
);
criterion_main!(benches);
