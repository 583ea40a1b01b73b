//! Sensitivity command implementation
//!
//! Varies one factor by ±v% and prints the elasticity report as JSON.

use tracing::info;

use risk_engine::sensitivity::SensitivityTarget;
use risk_engine::{FairCalculator, ScenarioInputs};

use super::{build_config, load_json, print_json};
use crate::{CliError, Result};

/// Run the sensitivity command
pub fn run(
    scenario_path: &str,
    factor: &str,
    variation: f64,
    simulations: usize,
    seed: Option<u64>,
) -> Result<()> {
    let target: SensitivityTarget = factor
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("{}", e)))?;

    info!("Sensitivity of {} at ±{}%", target, variation);

    let inputs: ScenarioInputs = load_json(scenario_path)?;
    let config = build_config(simulations, seed)?;

    let report = FairCalculator::new(config).sensitivity(&inputs, target, variation)?;

    info!(
        "Elasticity of ALE P50 to {}: {:.3}",
        target, report.average_elasticity
    );
    print_json(&report)
}
