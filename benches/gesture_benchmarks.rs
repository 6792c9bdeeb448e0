//! Benchmarks for per-frame geometry, classification and smoothing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hand_gesture_control::{
    geometry::{hand_scale, GeometrySnapshot},
    gestures::{classify, GestureLabel, Thresholds},
    landmarks::{Landmark, LandmarkSet},
    smoothing::GestureSmoother,
};

/// Jittered hand landmarks, as a detector would report them
fn noisy_hands(count: usize) -> Vec<LandmarkSet> {
    (0..count)
        .map(|_| {
            let mut points = [Landmark::default(); 21];
            for (i, point) in points.iter_mut().enumerate() {
                let base_x = 0.4 + 0.01 * i as f64;
                let base_y = 0.8 - 0.02 * i as f64;
                *point = Landmark::new(
                    base_x + 0.02 * rand::random::<f64>(),
                    base_y + 0.02 * rand::random::<f64>(),
                );
            }
            LandmarkSet::new(points)
        })
        .collect()
}

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let hands = noisy_hands(100);
    let thresholds = Thresholds::default();

    group.bench_function("hand_scale", |b| {
        b.iter(|| black_box(hand_scale(black_box(&hands[0]))));
    });

    group.bench_function("geometry_snapshot", |b| {
        let scale = hand_scale(&hands[0]);
        b.iter(|| black_box(GeometrySnapshot::compute(black_box(&hands[0]), scale)));
    });

    group.bench_function("classify_single", |b| {
        let geometry = GeometrySnapshot::compute(&hands[0], hand_scale(&hands[0]));
        b.iter(|| black_box(classify(black_box(&geometry), &thresholds)));
    });

    group.bench_with_input(BenchmarkId::new("classify_sequence", 100), &hands, |b, hands| {
        b.iter(|| {
            for hand in hands {
                let geometry = GeometrySnapshot::compute(hand, hand_scale(hand));
                black_box(classify(&geometry, &thresholds));
            }
        });
    });

    group.finish();
}

fn benchmark_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing");

    let labels: Vec<GestureLabel> = (0..100)
        .map(|_| GestureLabel::ALL[(rand::random::<f64>() * 8.0) as usize % 8])
        .collect();

    for window in [5, 7, 15] {
        group.bench_with_input(BenchmarkId::new("push_majority", window), &labels, |b, labels| {
            b.iter(|| {
                let mut smoother = GestureSmoother::new(window);
                for &label in labels {
                    smoother.push(label);
                    black_box(smoother.majority());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_classification, benchmark_smoothing);
criterion_main!(benches);
