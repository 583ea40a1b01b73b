//! Criterion benchmarks for the scenario calculator and aggregator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use risk_core::types::RiskFactorEstimate;
use risk_engine::{
    FairAggregator, FairCalculator, Scenario, ScenarioInputs, SimulationConfig, TefInput,
};

fn scenario_inputs() -> ScenarioInputs {
    let mut inputs = ScenarioInputs::new(
        TefInput::direct(RiskFactorEstimate::new(2.0, 5.0, 12.0)),
        RiskFactorEstimate::new(10.0, 30.0, 60.0),
    );
    inputs.loss_forms.productivity = RiskFactorEstimate::new(50_000.0, 180_000.0, 500_000.0);
    inputs.loss_forms.response = RiskFactorEstimate::new(30_000.0, 95_000.0, 250_000.0);
    inputs.loss_forms.replacement = RiskFactorEstimate::new(10_000.0, 40_000.0, 120_000.0);
    inputs.loss_forms.fines = RiskFactorEstimate::new(0.0, 50_000.0, 500_000.0);
    inputs.slef = RiskFactorEstimate::new(20.0, 35.0, 60.0);
    inputs
}

fn bench_calculate(c: &mut Criterion) {
    let config = SimulationConfig::builder()
        .n_simulations(100_000)
        .seed(42)
        .build()
        .unwrap();
    let calculator = FairCalculator::new(config);
    let inputs = scenario_inputs();

    c.bench_function("calculate_100k", |b| {
        b.iter(|| calculator.calculate(black_box(&inputs)).unwrap())
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let config = SimulationConfig::builder()
        .n_simulations(50_000)
        .seed(42)
        .build()
        .unwrap();
    let aggregator = FairAggregator::new(config);
    let scenarios: Vec<Scenario> = (0..4)
        .map(|i| Scenario::new(format!("scenario_{}", i), scenario_inputs()))
        .collect();

    c.bench_function("aggregate_independent_4x50k", |b| {
        b.iter(|| {
            aggregator
                .aggregate_independent(black_box(&scenarios))
                .unwrap()
        })
    });

    c.bench_function("aggregate_correlated_4x50k", |b| {
        b.iter(|| {
            aggregator
                .aggregate_correlated(black_box(&scenarios), 0.3)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_calculate, bench_aggregate);
criterion_main!(benches);
