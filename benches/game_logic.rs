use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cup_match::core::{score, shuffle_permutation, GameState, RoundSnapshot, SimpleRng};
use cup_match::types::MAX_ITEM_COUNT;

fn bench_start_round(c: &mut Criterion) {
    let mut state = GameState::new(12345, MAX_ITEM_COUNT).unwrap();

    c.bench_function("start_round_10", |b| {
        b.iter(|| {
            state.start_round(black_box(MAX_ITEM_COUNT)).unwrap();
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let state = GameState::new(12345, MAX_ITEM_COUNT).unwrap();
    let target = state.snapshot().player;
    let mut rng = SimpleRng::new(99);

    c.bench_function("shuffle_permutation_10", |b| {
        b.iter(|| shuffle_permutation(black_box(&target), &mut rng))
    });
}

fn bench_swap(c: &mut Criterion) {
    let mut state = GameState::new(12345, MAX_ITEM_COUNT).unwrap();

    c.bench_function("swap", |b| {
        b.iter(|| {
            state.swap(black_box(0), black_box(9)).unwrap();
        })
    });
}

fn bench_check(c: &mut Criterion) {
    c.bench_function("check", |b| {
        b.iter_batched(
            || GameState::new(12345, MAX_ITEM_COUNT).unwrap(),
            |mut state| state.check().unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(12345, MAX_ITEM_COUNT).unwrap();
    let mut snap = RoundSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

fn bench_score(c: &mut Criterion) {
    c.bench_function("score", |b| {
        b.iter(|| score(black_box(10), black_box(23), black_box(true)))
    });
}

criterion_group!(
    benches,
    bench_start_round,
    bench_shuffle,
    bench_swap,
    bench_check,
    bench_snapshot_into,
    bench_score
);
criterion_main!(benches);
