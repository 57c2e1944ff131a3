//! Performance benchmarks for the Colebrook solver and the chart composer
//!
//! # What We're Measuring
//!
//! 1. **Fixed sweeps** (the default policy):
//!    - 10 sweeps, one logarithm and one square root per element each
//!    - Time should scale linearly with the number of Reynolds samples
//!
//! 2. **Converged sweeps** (tolerance-driven):
//!    - Extra residual evaluation per sweep
//!    - Sweep count depends on tolerance, roughly one decade per sweep
//!
//! 3. **Full chart composition**:
//!    - 27 roughness curves plus the closed-form curves, grid and labels
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Everything
//! cargo bench --bench colebrook_performance
//!
//! # Only the fixed vs converged comparison
//! cargo bench --bench colebrook_performance policy
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use moody_chart::chart::{MoodyComposer, MoodyConfig, ReynoldsDomain};
use moody_chart::solver::{ColebrookSolver, FrictionSolver, SolverConfiguration};
use nalgebra::DVector;
use std::hint::black_box;
use std::time::Duration;

fn reynolds_samples(count: usize) -> DVector<f64> {
    let domain = ReynoldsDomain::log_spaced(3000.0, 1e8, count).unwrap();
    DVector::from_column_slice(domain.samples())
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Fixed ten-sweep solve for growing sample counts
///
/// Expected: linear in the number of samples.
fn benchmark_fixed_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("Colebrook Fixed Sweeps");
    let solver = ColebrookSolver::new();
    let config = SolverConfiguration::default();

    for samples in [50, 200, 1000, 5000].iter() {
        let reynolds = reynolds_samples(*samples);
        group.bench_with_input(BenchmarkId::from_parameter(samples), samples, |b, _| {
            b.iter(|| {
                solver
                    .solve(black_box(&reynolds), black_box(1e-4), black_box(&config))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Fixed budget against tolerance-driven iteration on the same input
fn benchmark_policy_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Colebrook policy");
    let solver = ColebrookSolver::new();
    let reynolds = reynolds_samples(200);

    let policies = [
        ("fixed_10", SolverConfiguration::default()),
        ("converged_1e-6", SolverConfiguration::converged(1e-6, 100)),
        ("converged_1e-12", SolverConfiguration::converged(1e-12, 100)),
    ];

    for (name, config) in policies.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| {
                solver
                    .solve(black_box(&reynolds), black_box(1e-3), black_box(config))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Whole default chart, curves to annotations
fn benchmark_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chart composition");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    let composer = MoodyComposer::new(MoodyConfig::default());
    group.bench_function("default_chart", |b| {
        b.iter(|| black_box(composer.compose().unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fixed_sweeps,
    benchmark_policy_comparison,
    benchmark_compose
);
criterion_main!(benches);
