//! Criterion benchmarks for tactile-core primitives
//!
//! Run with: cargo bench -p tactile-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tactile_core::{
    MovingAverageFilter, clip, coin_with, gain_to_db, mtof, rf_with, ri_with, scale, to_cartesian,
    to_polar,
};

const BLOCK_SIZES: &[usize] = &[64, 256, 1024];
const WINDOWS: &[usize] = &[2, 8, 64];

/// Pointer-like signal: slow sweep plus deterministic wobble.
fn generate_pointer_stream(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / size as f32;
            t * 800.0 + (t * 97.0).sin() * 4.0
        })
        .collect()
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("MovingAverageFilter");

    for &window in WINDOWS {
        let input = generate_pointer_stream(1024);

        group.bench_with_input(BenchmarkId::new("update", window), &window, |b, &w| {
            let mut filter = MovingAverageFilter::new(Some(w));
            b.iter(|| {
                for &sample in &input {
                    black_box(filter.update(black_box(sample)));
                }
            });
        });
    }

    group.finish();
}

fn bench_range_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("RangeMapping");

    for &block_size in BLOCK_SIZES {
        let input = generate_pointer_stream(block_size);

        group.bench_with_input(
            BenchmarkId::new("scale_clip", block_size),
            &block_size,
            |b, _| {
                b.iter(|| {
                    for &sample in &input {
                        let mapped = scale(black_box(sample), 0.0, 800.0, 20.0, 20000.0);
                        black_box(clip(mapped, 20.0, 20000.0));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Conversions");

    group.bench_function("mtof", |b| {
        b.iter(|| black_box(mtof(black_box(60.5))));
    });

    group.bench_function("gain_to_db", |b| {
        b.iter(|| black_box(gain_to_db(black_box(0.707))));
    });

    group.bench_function("polar_round_trip", |b| {
        b.iter(|| {
            let p = to_polar(black_box(3.0), black_box(-4.0));
            black_box(to_cartesian(p.radius, p.angle))
        });
    });

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random");
    let mut rng = StdRng::seed_from_u64(1);

    group.bench_function("ri", |b| {
        b.iter(|| black_box(ri_with(&mut rng, black_box(100), None)));
    });

    group.bench_function("rf", |b| {
        b.iter(|| black_box(rf_with(&mut rng, black_box(-1.0), Some(1.0))));
    });

    group.bench_function("coin", |b| {
        b.iter(|| black_box(coin_with(&mut rng, None)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_moving_average,
    bench_range_mapping,
    bench_conversions,
    bench_random,
);
criterion_main!(benches);
