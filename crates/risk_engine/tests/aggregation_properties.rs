//! Portfolio aggregation properties across correlation regimes.

use risk_core::types::RiskFactorEstimate;
use risk_engine::{FairAggregator, FairCalculator, Scenario, ScenarioInputs, SimulationConfig, TefInput};

fn config(n: usize) -> SimulationConfig {
    SimulationConfig::builder()
        .n_simulations(n)
        .seed(42)
        .build()
        .unwrap()
}

fn portfolio() -> Vec<Scenario> {
    let mut ransomware = ScenarioInputs::new(
        TefInput::direct(RiskFactorEstimate::new(2.0, 5.0, 12.0)),
        RiskFactorEstimate::new(10.0, 30.0, 60.0),
    );
    ransomware.loss_forms.productivity = RiskFactorEstimate::new(50_000.0, 180_000.0, 500_000.0);
    ransomware.loss_forms.response = RiskFactorEstimate::new(30_000.0, 95_000.0, 250_000.0);
    ransomware.loss_forms.replacement = RiskFactorEstimate::new(10_000.0, 40_000.0, 120_000.0);
    ransomware.loss_forms.fines = RiskFactorEstimate::new(0.0, 50_000.0, 500_000.0);
    ransomware.slef = RiskFactorEstimate::new(20.0, 35.0, 60.0);

    let mut breach = ScenarioInputs::new(
        TefInput::direct(RiskFactorEstimate::new(1.0, 3.0, 8.0)),
        RiskFactorEstimate::new(5.0, 15.0, 40.0),
    );
    breach.loss_forms.productivity = RiskFactorEstimate::new(20_000.0, 80_000.0, 300_000.0);
    breach.loss_forms.response = RiskFactorEstimate::new(50_000.0, 150_000.0, 500_000.0);
    breach.loss_forms.fines = RiskFactorEstimate::new(100_000.0, 500_000.0, 2_000_000.0);
    breach.loss_forms.reputation = RiskFactorEstimate::new(100_000.0, 400_000.0, 1_500_000.0);
    breach.slef = RiskFactorEstimate::new(40.0, 60.0, 85.0);

    let mut ddos = ScenarioInputs::new(
        TefInput::direct(RiskFactorEstimate::new(5.0, 12.0, 25.0)),
        RiskFactorEstimate::new(20.0, 50.0, 80.0),
    );
    ddos.loss_forms.productivity = RiskFactorEstimate::new(10_000.0, 50_000.0, 200_000.0);
    ddos.loss_forms.response = RiskFactorEstimate::new(5_000.0, 15_000.0, 50_000.0);
    ddos.loss_forms.competitive_advantage = RiskFactorEstimate::new(0.0, 50_000.0, 300_000.0);
    ddos.slef = RiskFactorEstimate::new(0.0, 10.0, 30.0);

    vec![
        Scenario::new("ransomware", ransomware),
        Scenario::new("data_breach", breach),
        Scenario::new("ddos", ddos),
    ]
}

#[test]
fn independent_aggregation_equals_sum_of_individual_runs() {
    let scenarios = portfolio();
    let aggregator = FairAggregator::new(config(50_000));
    let result = aggregator.aggregate_independent(&scenarios).unwrap();

    // Both paths draw from the same per-scenario marginals with the same
    // seed offsets, so the summed arrays match exactly
    let calc = FairCalculator::new(config(50_000));
    let individual: Vec<_> = scenarios
        .iter()
        .map(|s| calc.calculate(&s.inputs).unwrap())
        .collect();

    for i in (0..50_000).step_by(1231) {
        let expected: f64 = individual.iter().map(|r| r.ale_samples[i]).sum();
        assert!(
            (result.total_ale_samples[i] - expected).abs() < 1e-9,
            "divergence at draw {}",
            i
        );
    }

    assert_eq!(result.assumed_correlation, 0.0);
    assert_eq!(result.contributions.len(), 3);
}

#[test]
fn aggregation_is_reproducible() {
    let scenarios = portfolio();
    let aggregator = FairAggregator::new(config(20_000));

    let a = aggregator.aggregate_independent(&scenarios).unwrap();
    let b = aggregator.aggregate_independent(&scenarios).unwrap();
    assert_eq!(a.total_ale_samples, b.total_ale_samples);

    let c = aggregator.aggregate_correlated(&scenarios, 0.3).unwrap();
    let d = aggregator.aggregate_correlated(&scenarios, 0.3).unwrap();
    assert_eq!(c.total_ale_samples, d.total_ale_samples);
}

#[test]
fn correlated_at_zero_approximates_independence() {
    let scenarios = portfolio();
    let aggregator = FairAggregator::new(config(100_000));

    let independent = aggregator.aggregate_independent(&scenarios).unwrap();
    let rho_zero = aggregator.aggregate_correlated(&scenarios, 0.0).unwrap();

    for pct_pair in [
        (independent.total_ale.p50, rho_zero.total_ale.p50),
        (independent.total_ale.p90, rho_zero.total_ale.p90),
    ] {
        let rel = (pct_pair.0 - pct_pair.1).abs() / pct_pair.0;
        assert!(rel < 0.03, "relative divergence {}", rel);
    }
}

#[test]
fn comonotone_limit_approaches_sum_of_p90s() {
    let scenarios = portfolio();
    let aggregator = FairAggregator::new(config(100_000));

    let comonotone = aggregator.aggregate_correlated(&scenarios, 1.0).unwrap();

    let calc = FairCalculator::new(config(100_000));
    let sum_p90: f64 = scenarios
        .iter()
        .map(|s| calc.calculate(&s.inputs).unwrap().ale.p90)
        .sum();

    let rel = (comonotone.total_ale.p90 - sum_p90).abs() / sum_p90;
    assert!(
        rel < 0.03,
        "aggregate P90 {} vs sum of P90s {}",
        comonotone.total_ale.p90,
        sum_p90
    );
}

#[test]
fn correlation_orders_the_tail() {
    let scenarios = portfolio();
    let aggregator = FairAggregator::new(config(100_000));

    let p99_at = |rho: f64| {
        aggregator
            .aggregate_correlated(&scenarios, rho)
            .unwrap()
            .total_ale
            .p99
    };

    let low = p99_at(0.0);
    let mid = p99_at(0.5);
    let high = p99_at(1.0);
    assert!(low < mid && mid < high, "{} {} {}", low, mid, high);
}

#[test]
fn diversification_benefit_shrinks_with_correlation() {
    let scenarios = portfolio();
    let aggregator = FairAggregator::new(config(50_000));

    let benefit = aggregator.diversification_benefit(&scenarios).unwrap();
    assert!(benefit.benefit > 0.0);

    // At rho = 1 the diversification effect disappears: the correlated
    // aggregate P90 recovers the perfect-correlation proxy
    let comonotone = aggregator.aggregate_correlated(&scenarios, 1.0).unwrap();
    let residual =
        (benefit.sum_of_individual_p90 - comonotone.total_ale.p90).abs() / benefit.sum_of_individual_p90;
    assert!(residual < 0.03);
}

#[test]
fn ranking_percentages_reference_aggregate_median() {
    let scenarios = portfolio();
    let result = FairAggregator::new(config(20_000))
        .aggregate_independent(&scenarios)
        .unwrap();

    for ranked in &result.top_scenarios {
        let expected = ranked.ale_p50 / result.total_ale.p50 * 100.0;
        assert!((ranked.pct_of_total - expected).abs() < 1e-9);
    }

    // Descending order
    for pair in result.top_scenarios.windows(2) {
        assert!(pair[0].ale_p50 >= pair[1].ale_p50);
    }
}
