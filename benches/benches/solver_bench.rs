//! # Solver Benchmarks
//!
//! Measures branch selection and each resonance formula branch.
//!
//! Run: `cargo bench --bench solver_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rlc_core::{solve, Branch, CircuitState, Parameter};

fn inputs() -> Vec<(&'static str, CircuitState)> {
    vec![
        (
            "resistance_frequency",
            CircuitState::new()
                .with(Parameter::Resistance, 50.0)
                .with(Parameter::Frequency, 60.0),
        ),
        (
            "inductance_capacitance",
            CircuitState::new()
                .with(Parameter::Inductance, 0.1326)
                .with(Parameter::Capacitance, 5.3e-5),
        ),
        (
            "frequency_capacitance",
            CircuitState::new()
                .with(Parameter::Frequency, 1000.0)
                .with(Parameter::Capacitance, 1e-6),
        ),
        (
            "insufficient",
            CircuitState::new().with(Parameter::Quality, 4.0),
        ),
    ]
}

/// Benchmark branch selection only
fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("branch_select");

    for (name, state) in inputs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &state, |b, state| {
            b.iter(|| black_box(Branch::select(black_box(state))))
        });
    }

    group.finish();
}

/// Benchmark a full solve on a fresh copy of the state
fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for (name, state) in inputs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &state, |b, state| {
            b.iter(|| {
                let mut s = state.clone();
                black_box(solve(&mut s).ok())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_solve);
criterion_main!(benches);
