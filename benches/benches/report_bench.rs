//! # Report Benchmarks
//!
//! Measures unit conversion reports and export document rendering.
//!
//! Run: `cargo bench --bench report_bench`

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rlc_core::{render_report, report_conversions, CircuitState, Parameter};

fn solved_state() -> CircuitState {
    CircuitState::new()
        .with(Parameter::Resistance, 100.0)
        .with(Parameter::Frequency, 1000.0)
        .with(Parameter::Inductance, 0.015_915_494_309_189_534)
        .with(Parameter::Capacitance, 1.591_549_430_918_953_4e-6)
        .with(Parameter::Quality, 2.0)
}

fn bench_conversions(c: &mut Criterion) {
    let state = solved_state();
    c.bench_function("report_conversions", |b| {
        b.iter(|| black_box(report_conversions(black_box(&state))))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = solved_state();
    let at = NaiveDate::from_ymd_opt(2026, 1, 16)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("valid timestamp");

    c.bench_function("render_report", |b| {
        b.iter(|| black_box(render_report(black_box(&state), &at)))
    });
}

criterion_group!(benches, bench_conversions, bench_render);
criterion_main!(benches);
