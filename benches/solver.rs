//! Benchmarks for the move generator and session playback.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hanoi::solver::Solution;
use hanoi::towers::{AUX_TOWER, SOURCE_TOWER, TARGET_TOWER};
use hanoi::Session;

/// Benchmark draining the lazy move sequence for a 20-ring game.
fn bench_sequence(c: &mut Criterion) {
    c.bench_function("sequence_20_rings", |b| {
        b.iter(|| Solution::new(black_box(20), SOURCE_TOWER, TARGET_TOWER, AUX_TOWER).count())
    });
}

/// Benchmark a complete automatic playback of the largest game.
fn bench_playback(c: &mut Criterion) {
    c.bench_function("playback_8_rings", |b| {
        b.iter(|| {
            let mut session = Session::new(black_box(8));
            session.start_solve();
            while session.advance_solve().is_some() {}
            session.moves()
        })
    });
}

/// Benchmark rendering the board as text.
fn bench_render(c: &mut Criterion) {
    let session = Session::new(8);

    c.bench_function("render_board", |b| b.iter(|| black_box(&session).render()));
}

criterion_group!(benches, bench_sequence, bench_playback, bench_render);
criterion_main!(benches);
