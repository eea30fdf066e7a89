//! Criterion benchmarks for the full eight-rule plan.

use criterion::{criterion_group, criterion_main, Criterion};
use sprawl_bench::{reference_profile, stress_profile};
use sprawl_engine::Simulation;
use std::hint::black_box;

fn bench_step_10k(c: &mut Criterion) {
    let mut sim = Simulation::new(reference_profile(42)).unwrap();

    c.bench_function("step_10k", |b| {
        b.iter(|| {
            let result = sim.step();
            black_box(&result);
        });
    });
}

fn bench_step_100k(c: &mut Criterion) {
    let mut sim = Simulation::new(stress_profile(42)).unwrap();

    c.bench_function("step_100k", |b| {
        b.iter(|| {
            let result = sim.step();
            black_box(&result);
        });
    });
}

fn bench_100_steps_10k(c: &mut Criterion) {
    c.bench_function("100_steps_10k", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(reference_profile(42)).unwrap();
            for _ in 0..100 {
                let result = sim.step();
                black_box(&result);
            }
        });
    });
}

criterion_group!(benches, bench_step_10k, bench_step_100k, bench_100_steps_10k);
criterion_main!(benches);
