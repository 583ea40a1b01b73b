//! Calculate command implementation
//!
//! Evaluates a single FAIR scenario and prints the result as JSON.

use tracing::info;

use risk_engine::{FairCalculator, ScenarioInputs};

use super::{build_config, load_json, print_json};
use crate::Result;

/// Run the calculate command
pub fn run(scenario_path: &str, simulations: usize, seed: Option<u64>) -> Result<()> {
    info!("Calculating scenario from {}", scenario_path);
    info!("  Monte Carlo draws: {}", simulations);

    let inputs: ScenarioInputs = load_json(scenario_path)?;
    let config = build_config(simulations, seed)?;

    let result = FairCalculator::new(config).calculate(&inputs)?;

    info!(
        "ALE P50 = {:.0} {} over {} year(s)",
        result.ale.p50, result.currency, result.time_horizon_years
    );
    print_json(&result)
}
