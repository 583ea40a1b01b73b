//! Portfolio-level aggregation across scenarios.
//!
//! Two aggregation modes combine per-scenario ALE sample arrays of equal
//! length into one portfolio distribution:
//!
//! - **Independent**: element-wise summation. Appropriate when scenarios
//!   involve different assets, threat actors, and attack vectors.
//! - **Correlated**: a Gaussian copula with a single assumed coefficient.
//!   Correlated normals are mapped through the standard normal CDF to
//!   uniforms, and each scenario's uniforms are pushed through its own
//!   empirical ALE quantile function — marginals are preserved exactly
//!   while the target rank correlation is induced between scenarios.
//!
//! Every scenario is evaluated with the same base seed (hence the same
//! derived per-purpose seeds). Scenario evaluations are independent of one
//! another, so they fan out across threads; determinism is keyed purely to
//! the seed, never to execution order.
//!
//! The per-scenario "contribution" is the scenario's own unconditional ALE
//! median. Contributions do not sum to the aggregate median in general —
//! the metric is a deliberately simple ranking figure, not an exact
//! decomposition.

use std::collections::BTreeMap;

use rayon::prelude::*;

use risk_core::math::normal::norm_cdf;
use risk_core::stats::percentile_of_sorted;
use risk_models::SimRng;

use crate::calculator::FairCalculator;
use crate::config::SimulationConfig;
use crate::copula::CorrelationMatrix;
use crate::error::EngineError;
use crate::inputs::Scenario;
use crate::result::{AleSummary, ScenarioResult};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One scenario's contribution to the portfolio, in input order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScenarioContribution {
    /// Scenario identifier.
    pub id: String,
    /// The scenario's own median ALE.
    pub ale_p50: f64,
}

/// One entry of the ranked top-scenario list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RankedScenario {
    /// Scenario identifier.
    pub id: String,
    /// The scenario's own median ALE.
    pub ale_p50: f64,
    /// Contribution as a percentage of the aggregate median (zero when the
    /// aggregate median is zero).
    pub pct_of_total: f64,
}

/// Portfolio aggregation result.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PortfolioResult {
    /// Aggregate ALE summary statistics.
    pub total_ale: AleSummary,
    /// Per-scenario contributions, in input order.
    pub contributions: Vec<ScenarioContribution>,
    /// Scenarios ranked by contribution, descending.
    pub top_scenarios: Vec<RankedScenario>,
    /// Correlation coefficient assumed between scenarios (0 = independence).
    pub assumed_correlation: f64,
    /// Aggregate ALE sample array.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub total_ale_samples: Vec<f64>,
}

/// Risk reduction from treating scenarios as independent rather than
/// perfectly correlated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DiversificationBenefit {
    /// Sum of each scenario's own P90 (perfect-correlation proxy).
    pub sum_of_individual_p90: f64,
    /// P90 of the independence-mode aggregate.
    pub aggregate_p90_independent: f64,
    /// Absolute reduction.
    pub benefit: f64,
    /// Reduction as a percentage of the perfect-correlation proxy.
    pub benefit_pct: f64,
}

/// Linear-expectation portfolio metrics.
///
/// Sums of per-scenario means, valid under any dependence structure by
/// linearity of expectation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PortfolioMetrics {
    /// Sum of per-scenario mean ALEs.
    pub total_ale: f64,
    /// Sum of per-scenario mean LEFs.
    pub expected_events_per_year: f64,
    /// LEF-weighted average loss magnitude (zero when total LEF is zero).
    pub weighted_average_lm: f64,
    /// Identifier of the scenario with the largest mean ALE.
    pub top_scenario_id: String,
    /// That scenario's share of the total mean ALE, in percent.
    pub top_scenario_share_pct: f64,
    /// Per-scenario mean ALEs.
    pub scenario_ales: BTreeMap<String, f64>,
    /// Per-scenario mean LEFs.
    pub scenario_lefs: BTreeMap<String, f64>,
    /// Per-scenario mean LMs.
    pub scenario_lms: BTreeMap<String, f64>,
}

/// Aggregates FAIR scenarios into portfolio-level risk.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::RiskFactorEstimate;
/// use risk_engine::aggregation::FairAggregator;
/// use risk_engine::config::SimulationConfig;
/// use risk_engine::inputs::{Scenario, ScenarioInputs, TefInput};
///
/// let config = SimulationConfig::builder()
///     .n_simulations(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut inputs = ScenarioInputs::new(
///     TefInput::direct(RiskFactorEstimate::new(2.0, 5.0, 12.0)),
///     RiskFactorEstimate::new(10.0, 30.0, 60.0),
/// );
/// inputs.loss_forms.productivity = RiskFactorEstimate::new(50_000.0, 180_000.0, 500_000.0);
///
/// let scenarios = vec![Scenario::new("ransomware", inputs)];
/// let portfolio = FairAggregator::new(config)
///     .aggregate_independent(&scenarios)
///     .unwrap();
/// assert_eq!(portfolio.assumed_correlation, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct FairAggregator {
    config: SimulationConfig,
    calculator: FairCalculator,
}

impl FairAggregator {
    /// Creates an aggregator; all scenarios share the configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            calculator: FairCalculator::new(config),
        }
    }

    /// Returns the simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Aggregates scenarios assuming statistical independence: the
    /// portfolio distribution is the element-wise sum of the per-scenario
    /// ALE arrays.
    pub fn aggregate_independent(
        &self,
        scenarios: &[Scenario],
    ) -> Result<PortfolioResult, EngineError> {
        let results = self.evaluate_all(scenarios)?;

        let n = self.config.n_simulations();
        let mut total = vec![0.0; n];
        for result in &results {
            for (acc, ale) in total.iter_mut().zip(&result.ale_samples) {
                *acc += ale;
            }
        }

        Ok(self.assemble(scenarios, &results, total, 0.0))
    }

    /// Aggregates scenarios under an assumed pairwise correlation via a
    /// Gaussian copula.
    ///
    /// At `correlation = 0` this approaches the independent mode (up to
    /// sampling noise); at `correlation = 1` the portfolio P90 approaches
    /// the sum of individual P90s.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidCorrelation`] unless the coefficient lies in
    /// `[0, 1]`, plus any per-scenario calculation error.
    pub fn aggregate_correlated(
        &self,
        scenarios: &[Scenario],
        correlation: f64,
    ) -> Result<PortfolioResult, EngineError> {
        let matrix = CorrelationMatrix::equicorrelated(scenarios.len(), correlation)?;
        let results = self.evaluate_all(scenarios)?;
        let cholesky = matrix.cholesky();

        let n = self.config.n_simulations();
        let k = scenarios.len();

        // Sorted copies back the empirical inverse-CDF transform
        let sorted: Vec<Vec<f64>> = results
            .iter()
            .map(|r| {
                let mut s = r.ale_samples.clone();
                s.sort_by(f64::total_cmp);
                s
            })
            .collect();

        let mut rng = SimRng::from_optional_seed(self.config.seed());
        let mut total = vec![0.0; n];
        let mut z = vec![0.0; k];

        for acc in total.iter_mut() {
            rng.fill_standard_normal(&mut z);
            cholesky.transform_inplace(&mut z);

            let mut sum = 0.0;
            for (j, scenario_sorted) in sorted.iter().enumerate() {
                let u = norm_cdf(z[j]);
                sum += percentile_of_sorted(scenario_sorted, u * 100.0);
            }
            *acc = sum;
        }

        Ok(self.assemble(scenarios, &results, total, correlation))
    }

    /// Compares the sum of individual P90s (perfect-correlation proxy)
    /// against the independence-mode aggregate P90.
    pub fn diversification_benefit(
        &self,
        scenarios: &[Scenario],
    ) -> Result<DiversificationBenefit, EngineError> {
        let results = self.evaluate_all(scenarios)?;

        let sum_of_individual_p90: f64 = results.iter().map(|r| r.ale.p90).sum();

        let n = self.config.n_simulations();
        let mut total = vec![0.0; n];
        for result in &results {
            for (acc, ale) in total.iter_mut().zip(&result.ale_samples) {
                *acc += ale;
            }
        }
        let aggregate_p90 = risk_core::stats::percentile(&total, 90.0);

        let benefit = sum_of_individual_p90 - aggregate_p90;
        let benefit_pct = if sum_of_individual_p90 > 0.0 {
            benefit / sum_of_individual_p90 * 100.0
        } else {
            0.0
        };

        Ok(DiversificationBenefit {
            sum_of_individual_p90,
            aggregate_p90_independent: aggregate_p90,
            benefit,
            benefit_pct,
        })
    }

    /// Computes linear-expectation portfolio metrics: total mean ALE,
    /// expected loss events per year, LEF-weighted average LM, and the top
    /// scenario's share of the total.
    pub fn portfolio_metrics(
        &self,
        scenarios: &[Scenario],
    ) -> Result<PortfolioMetrics, EngineError> {
        let results = self.evaluate_all(scenarios)?;

        let mut scenario_ales = BTreeMap::new();
        let mut scenario_lefs = BTreeMap::new();
        let mut scenario_lms = BTreeMap::new();
        for (scenario, result) in scenarios.iter().zip(&results) {
            scenario_ales.insert(scenario.id.clone(), result.ale.mean);
            scenario_lefs.insert(scenario.id.clone(), result.lef.mean);
            scenario_lms.insert(scenario.id.clone(), result.lm.mean);
        }

        let total_ale: f64 = scenario_ales.values().sum();
        let total_lef: f64 = scenario_lefs.values().sum();

        let weighted_average_lm = if total_lef > 0.0 {
            scenario_lefs
                .iter()
                .map(|(id, lef)| lef * scenario_lms[id])
                .sum::<f64>()
                / total_lef
        } else {
            0.0
        };

        // Ties resolve to the lexicographically first id via BTreeMap order
        let (top_scenario_id, max_ale) = scenario_ales
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, ale)| (id.clone(), *ale))
            .unwrap_or_default();

        let top_scenario_share_pct = if total_ale > 0.0 {
            max_ale / total_ale * 100.0
        } else {
            0.0
        };

        Ok(PortfolioMetrics {
            total_ale,
            expected_events_per_year: total_lef,
            weighted_average_lm,
            top_scenario_id,
            top_scenario_share_pct,
            scenario_ales,
            scenario_lefs,
            scenario_lms,
        })
    }

    /// Evaluates every scenario with the shared configuration, in parallel.
    fn evaluate_all(&self, scenarios: &[Scenario]) -> Result<Vec<ScenarioResult>, EngineError> {
        if scenarios.is_empty() {
            return Err(EngineError::NoScenarios);
        }
        scenarios
            .par_iter()
            .map(|scenario| self.calculator.calculate(&scenario.inputs))
            .collect()
    }

    fn assemble(
        &self,
        scenarios: &[Scenario],
        results: &[ScenarioResult],
        total: Vec<f64>,
        correlation: f64,
    ) -> PortfolioResult {
        let total_ale = AleSummary::from_samples(&total);

        let contributions: Vec<ScenarioContribution> = scenarios
            .iter()
            .zip(results)
            .map(|(scenario, result)| ScenarioContribution {
                id: scenario.id.clone(),
                ale_p50: result.ale.p50,
            })
            .collect();

        let mut top_scenarios: Vec<RankedScenario> = contributions
            .iter()
            .map(|c| RankedScenario {
                id: c.id.clone(),
                ale_p50: c.ale_p50,
                pct_of_total: if total_ale.p50 > 0.0 {
                    c.ale_p50 / total_ale.p50 * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        top_scenarios.sort_by(|a, b| b.ale_p50.total_cmp(&a.ale_p50));

        PortfolioResult {
            total_ale,
            contributions,
            top_scenarios,
            assumed_correlation: correlation,
            total_ale_samples: total,
        }
    }
}
