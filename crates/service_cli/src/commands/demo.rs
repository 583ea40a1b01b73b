//! Demo command running the canonical ransomware scenario.
//!
//! Exercises the full pipeline end to end: single-scenario calculation,
//! sensitivity on the leading factors, and a three-scenario portfolio
//! aggregation under independence and correlation.

use tracing::info;

use risk_core::types::RiskFactorEstimate;
use risk_engine::sensitivity::SensitivityTarget;
use risk_engine::{
    FairAggregator, FairCalculator, Scenario, ScenarioInputs, SimulationConfig, TefInput,
};

use super::print_json;
use crate::Result;

const DEMO_SEED: u64 = 42;
const DEMO_SIMULATIONS: usize = 100_000;

fn ransomware() -> ScenarioInputs {
    let mut inputs = ScenarioInputs::new(
        TefInput::direct(RiskFactorEstimate::new(2.0, 5.0, 12.0)),
        RiskFactorEstimate::new(10.0, 30.0, 60.0),
    );
    inputs.loss_forms.productivity = RiskFactorEstimate::new(50_000.0, 180_000.0, 500_000.0);
    inputs.loss_forms.response = RiskFactorEstimate::new(30_000.0, 95_000.0, 250_000.0);
    inputs.loss_forms.replacement = RiskFactorEstimate::new(10_000.0, 40_000.0, 120_000.0);
    inputs.loss_forms.fines = RiskFactorEstimate::new(0.0, 50_000.0, 500_000.0);
    inputs.loss_forms.competitive_advantage =
        RiskFactorEstimate::new(0.0, 100_000.0, 1_000_000.0);
    inputs.loss_forms.reputation = RiskFactorEstimate::new(50_000.0, 200_000.0, 800_000.0);
    inputs.slef = RiskFactorEstimate::new(20.0, 35.0, 60.0);
    inputs
}

fn data_breach() -> ScenarioInputs {
    let mut inputs = ScenarioInputs::new(
        TefInput::direct(RiskFactorEstimate::new(1.0, 3.0, 8.0)),
        RiskFactorEstimate::new(5.0, 15.0, 40.0),
    );
    inputs.loss_forms.productivity = RiskFactorEstimate::new(20_000.0, 80_000.0, 300_000.0);
    inputs.loss_forms.response = RiskFactorEstimate::new(50_000.0, 150_000.0, 500_000.0);
    inputs.loss_forms.replacement = RiskFactorEstimate::new(5_000.0, 20_000.0, 80_000.0);
    inputs.loss_forms.fines = RiskFactorEstimate::new(100_000.0, 500_000.0, 2_000_000.0);
    inputs.loss_forms.reputation = RiskFactorEstimate::new(100_000.0, 400_000.0, 1_500_000.0);
    inputs.slef = RiskFactorEstimate::new(40.0, 60.0, 85.0);
    inputs
}

fn ddos() -> ScenarioInputs {
    let mut inputs = ScenarioInputs::new(
        TefInput::direct(RiskFactorEstimate::new(5.0, 12.0, 25.0)),
        RiskFactorEstimate::new(20.0, 50.0, 80.0),
    );
    inputs.loss_forms.productivity = RiskFactorEstimate::new(10_000.0, 50_000.0, 200_000.0);
    inputs.loss_forms.response = RiskFactorEstimate::new(5_000.0, 15_000.0, 50_000.0);
    inputs.loss_forms.replacement = RiskFactorEstimate::new(0.0, 5_000.0, 20_000.0);
    inputs.loss_forms.competitive_advantage = RiskFactorEstimate::new(0.0, 50_000.0, 300_000.0);
    inputs.slef = RiskFactorEstimate::new(0.0, 10.0, 30.0);
    inputs
}

/// Runs the demo: one scenario, its leading sensitivities, and a
/// three-scenario portfolio.
pub fn run() -> Result<()> {
    let config = SimulationConfig::builder()
        .n_simulations(DEMO_SIMULATIONS)
        .seed(DEMO_SEED)
        .build()?;

    info!(
        "Running ransomware demo ({} draws, seed {})",
        DEMO_SIMULATIONS, DEMO_SEED
    );

    let calculator = FairCalculator::new(config);
    let result = calculator.calculate(&ransomware())?;

    println!("=== Scenario: ransomware ===");
    print_json(&result)?;

    println!("=== Sensitivity ===");
    for factor in ["tef.p50", "susceptibility.p50", "productivity.p50", "fines.p50"] {
        let target: SensitivityTarget = factor
            .parse()
            .map_err(|e| crate::CliError::InvalidArgument(format!("{}", e)))?;
        let report = calculator.sensitivity(&ransomware(), target, 20.0)?;
        print_json(&report)?;
    }

    let scenarios = vec![
        Scenario::new("ransomware", ransomware()),
        Scenario::new("data_breach", data_breach()),
        Scenario::new("ddos", ddos()),
    ];
    let aggregator = FairAggregator::new(config);

    println!("=== Portfolio (independent) ===");
    print_json(&aggregator.aggregate_independent(&scenarios)?)?;

    println!("=== Portfolio (rho = 0.3) ===");
    print_json(&aggregator.aggregate_correlated(&scenarios, 0.3)?)?;

    println!("=== Diversification benefit ===");
    print_json(&aggregator.diversification_benefit(&scenarios)?)?;

    info!("Demo complete");
    Ok(())
}
