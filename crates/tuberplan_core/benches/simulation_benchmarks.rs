//! Criterion benchmarks for tuberplan_core
//!
//! Run with: cargo bench -p tuberplan_core

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tuberplan_core::config::{ParameterSet, YieldMode};
use tuberplan_core::model::ParameterId;
use tuberplan_core::{analyze_all, analyze_param, simulate};

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    let per_hectare = ParameterSet::default();
    group.bench_function("per_hectare", |b| {
        b.iter(|| simulate(black_box(&per_hectare)))
    });

    let per_plant = ParameterSet {
        yield_mode: YieldMode::PerPlant,
        ..ParameterSet::default()
    };
    group.bench_function("per_plant", |b| b.iter(|| simulate(black_box(&per_plant))));

    group.finish();
}

fn bench_sensitivity(c: &mut Criterion) {
    let params = ParameterSet::default();

    c.bench_function("analyze_single_parameter", |b| {
        b.iter(|| analyze_param(black_box(ParameterId::TonsPerHectare), black_box(&params)))
    });

    c.bench_function("analyze_all_parameters", |b| {
        b.iter(|| analyze_all(black_box(&params)))
    });
}

criterion_group!(benches, bench_simulate, bench_sensitivity);
criterion_main!(benches);
