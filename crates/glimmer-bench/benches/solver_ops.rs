//! Criterion benchmarks for the FDTD time loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glimmer_bench::{reference_profile, stress_profile};

fn bench_reference_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver/reference_100x100");
    group.sample_size(20);

    for n_steps in [10usize, 50] {
        let simulation = reference_profile(n_steps);
        group.bench_function(format!("{n_steps}_steps"), |b| {
            b.iter(|| black_box(simulation.run()))
        });
    }
    group.finish();
}

fn bench_stress_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver/stress_316x316");
    group.sample_size(10);

    let simulation = stress_profile(10);
    group.bench_function("10_steps", |b| b.iter(|| black_box(simulation.run())));
    group.finish();
}

criterion_group!(benches, bench_reference_run, bench_stress_run);
criterion_main!(benches);
