//! Aggregate command implementation
//!
//! Combines a portfolio of scenarios into portfolio-level risk, under
//! independence or an assumed correlation.

use tracing::info;

use risk_engine::{FairAggregator, Scenario};

use super::{build_config, load_json, print_json};
use crate::Result;

/// Run the aggregate command
pub fn run(
    portfolio_path: &str,
    correlation: f64,
    diversification: bool,
    simulations: usize,
    seed: Option<u64>,
) -> Result<()> {
    info!("Aggregating portfolio from {}", portfolio_path);
    info!("  Assumed correlation: {}", correlation);

    let scenarios: Vec<Scenario> = load_json(portfolio_path)?;
    let config = build_config(simulations, seed)?;
    let aggregator = FairAggregator::new(config);

    let result = if correlation == 0.0 {
        aggregator.aggregate_independent(&scenarios)?
    } else {
        aggregator.aggregate_correlated(&scenarios, correlation)?
    };

    info!(
        "Portfolio ALE P50 = {:.0} across {} scenarios",
        result.total_ale.p50,
        result.contributions.len()
    );
    print_json(&result)?;

    if diversification {
        let benefit = aggregator.diversification_benefit(&scenarios)?;
        info!(
            "Diversification benefit: {:.0} ({:.1}%)",
            benefit.benefit, benefit.benefit_pct
        );
        print_json(&benefit)?;
    }

    Ok(())
}
