//! Criterion benchmarks for the loss simulation engine.
//!
//! Benchmarks cover:
//! - Full simulation runs at varying trial counts
//! - Frequency sampling (uncertain Poisson)
//! - Severity sampling per distribution family

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quant_core::config::SimulationConfig;
use quant_core::ids::{FailureModeId, PartyId, ScenarioId};
use quant_core::inputs::{DistributionKind, FailureModeInput, LossScenarioInput};
use quant_core::rng::QuantRng;
use quant_engine::{run_simulation, sampling};

/// Build a synthetic engagement with the given number of failure modes.
fn synthetic_failure_modes(n_modes: u64) -> Vec<FailureModeInput> {
    (1..=n_modes)
        .map(|id| {
            FailureModeInput::new(
                FailureModeId::new(id),
                format!("FM-{}", id),
                0.5,
                1.0,
                2.0,
            )
            .with_scenarios(vec![
                LossScenarioInput::new(
                    ScenarioId::new(id * 10),
                    "Direct",
                    PartyId::new(1),
                    "direct",
                    DistributionKind::Lognormal,
                    1_000.0,
                    10_000.0,
                    100_000.0,
                ),
                LossScenarioInput::new(
                    ScenarioId::new(id * 10 + 1),
                    "Indirect",
                    PartyId::new(2),
                    "indirect",
                    DistributionKind::Triangular,
                    500.0,
                    2_000.0,
                    20_000.0,
                ),
            ])
        })
        .collect()
}

fn bench_run_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_simulation");
    let failure_modes = synthetic_failure_modes(5);

    for &trials in &[1_000usize, 10_000, 100_000] {
        let config = SimulationConfig::builder()
            .n_simulations(trials)
            .seed(42)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, _| {
            b.iter(|| run_simulation(black_box(&failure_modes), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_frequency_sampling(c: &mut Criterion) {
    c.bench_function("frequency_counts_100k", |b| {
        b.iter(|| {
            let mut rng = QuantRng::from_seed(42);
            sampling::frequency_counts(&mut rng, 0.5, 1.0, 2.0, black_box(100_000))
        })
    });
}

fn bench_severity_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("severity_amounts_100k");
    for kind in [
        DistributionKind::Lognormal,
        DistributionKind::Triangular,
        DistributionKind::Uniform,
    ] {
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| {
                let mut rng = QuantRng::from_seed(42);
                sampling::severity_amounts(
                    &mut rng,
                    kind,
                    1_000.0,
                    10_000.0,
                    100_000.0,
                    black_box(100_000),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_run_simulation,
    bench_frequency_sampling,
    bench_severity_sampling
);
criterion_main!(benches);
