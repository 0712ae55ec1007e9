use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ferrovan::core::OptionType;
use ferrovan::mc;

fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_estimators");

    group.bench_function("crude_10k", |b| {
        b.iter(|| {
            mc::crude(
                black_box(OptionType::Call),
                black_box(100.0),
                black_box(100.0),
                black_box(0.05),
                black_box(0.2),
                black_box(1.0),
                black_box(10_000),
                black_box(42),
            )
            .unwrap()
        })
    });

    group.bench_function("antithetic_10k", |b| {
        b.iter(|| {
            mc::antithetic(
                black_box(OptionType::Call),
                black_box(100.0),
                black_box(100.0),
                black_box(0.05),
                black_box(0.2),
                black_box(1.0),
                black_box(10_000),
                black_box(42),
            )
            .unwrap()
        })
    });

    group.bench_function("importance_10k", |b| {
        b.iter(|| {
            mc::importance_sampling(
                black_box(OptionType::Call),
                black_box(100.0),
                black_box(100.0),
                black_box(0.05),
                black_box(0.2),
                black_box(1.0),
                black_box(10_000),
                black_box(42),
            )
            .unwrap()
        })
    });

    group.finish();
}

fn bench_paths(c: &mut Criterion) {
    c.bench_function("simulate_paths_100x252", |b| {
        b.iter(|| {
            mc::paths::simulate_paths(
                black_box(100.0),
                black_box(1.0),
                black_box(0.05),
                black_box(0.2),
                black_box(100),
                black_box(252),
                black_box(42),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_estimators, bench_paths);
criterion_main!(benches);
