use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use line_animator::animations::{relax, rotate_step, Animation, ChainAnimation, WaveAnimation};
use line_animator::polyline::POINT_COUNT;
use line_animator::scheduler::FrameInfo;

fn chain_points() -> Vec<Vec3> {
    (0..POINT_COUNT)
        .map(|i| Vec3::new(i as f32 - 0.5, i as f32 + 0.5, i as f32 * 0.1))
        .collect()
}

/// Benchmark: stateless wave re-evaluation over the full polyline
fn bench_wave_update(c: &mut Criterion) {
    let mut animation = WaveAnimation::new(Vec2::ZERO);
    let mut line = animation.build();
    let frame = FrameInfo::new(1, 0.5, 0.016);

    c.bench_function("wave_update", |b| {
        b.iter(|| animation.update(black_box(&mut line), black_box(&frame)))
    });
}

/// Benchmark: full chain frame (rotation step + relaxation)
fn bench_chain_update(c: &mut Criterion) {
    let mut animation = ChainAnimation::new(Vec2::ZERO);
    let mut line = animation.build();
    let frame = FrameInfo::new(1, 0.5, 0.016);

    c.bench_function("chain_update", |b| {
        b.iter(|| animation.update(black_box(&mut line), black_box(&frame)))
    });
}

/// Benchmark: the incremental XY rotation step alone
fn bench_rotation_step(c: &mut Criterion) {
    let mut points = chain_points();

    c.bench_function("rotation_step", |b| {
        b.iter(|| rotate_step(black_box(&mut points)))
    });
}

/// Benchmark: the pairwise relaxation pass alone
fn bench_relaxation(c: &mut Criterion) {
    let mut points = chain_points();

    c.bench_function("relaxation", |b| b.iter(|| relax(black_box(&mut points))));
}

criterion_group!(
    benches,
    bench_wave_update,
    bench_chain_update,
    bench_rotation_step,
    bench_relaxation
);
criterion_main!(benches);
