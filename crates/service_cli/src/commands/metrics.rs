//! Metrics command implementation
//!
//! Prints linear-expectation portfolio metrics for a scenario set.

use tracing::info;

use risk_engine::{FairAggregator, Scenario};

use super::{build_config, load_json, print_json};
use crate::Result;

/// Run the metrics command
pub fn run(portfolio_path: &str, simulations: usize, seed: Option<u64>) -> Result<()> {
    info!("Computing portfolio metrics from {}", portfolio_path);

    let scenarios: Vec<Scenario> = load_json(portfolio_path)?;
    let config = build_config(simulations, seed)?;

    let metrics = FairAggregator::new(config).portfolio_metrics(&scenarios)?;

    info!(
        "Total ALE = {:.0}, expected events/year = {:.2}",
        metrics.total_ale, metrics.expected_events_per_year
    );
    print_json(&metrics)
}
