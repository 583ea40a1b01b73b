//! One-factor-at-a-time sensitivity analysis.
//!
//! A sensitivity run perturbs a single scalar input by ±v% and re-runs the
//! calculator, reporting the elasticity of the median ALE with respect to
//! the factor. Perturbable factors form a closed, compile-time enumerated
//! set — never a runtime field-name lookup — so an unsupported target is a
//! type error, not a surprise at evaluation time.

use std::fmt;
use std::str::FromStr;

use risk_core::types::RiskFactorEstimate;

use crate::calculator::FairCalculator;
use crate::error::EngineError;
use crate::inputs::{LossCategory, ScenarioInputs};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A perturbable scenario factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskFactor {
    /// Threat event frequency.
    Tef,
    /// Contact frequency (decomposed TEF only).
    ContactFrequency,
    /// Probability of action (decomposed TEF only).
    ProbabilityOfAction,
    /// Susceptibility.
    Susceptibility,
    /// One of the six loss forms.
    Loss(LossCategory),
    /// Secondary loss event frequency.
    Slef,
}

impl RiskFactor {
    /// Whether the factor is percentage-valued; perturbed values are
    /// clamped to `[0, 100]` instead of just floored at zero.
    pub fn is_probability(self) -> bool {
        matches!(
            self,
            RiskFactor::Susceptibility | RiskFactor::ProbabilityOfAction | RiskFactor::Slef
        )
    }

    /// Snake-case factor name.
    pub fn name(self) -> &'static str {
        match self {
            RiskFactor::Tef => "tef",
            RiskFactor::ContactFrequency => "contact_frequency",
            RiskFactor::ProbabilityOfAction => "prob_action",
            RiskFactor::Susceptibility => "susceptibility",
            RiskFactor::Loss(category) => category.name(),
            RiskFactor::Slef => "slef",
        }
    }
}

/// Which percentile of the factor's estimate to perturb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PercentileLevel {
    /// The 10th percentile.
    P10,
    /// The median.
    P50,
    /// The 90th percentile.
    P90,
}

impl PercentileLevel {
    fn get(self, estimate: &RiskFactorEstimate) -> f64 {
        match self {
            PercentileLevel::P10 => estimate.p10,
            PercentileLevel::P50 => estimate.p50,
            PercentileLevel::P90 => estimate.p90,
        }
    }

    fn set(self, estimate: &mut RiskFactorEstimate, value: f64) {
        match self {
            PercentileLevel::P10 => estimate.p10 = value,
            PercentileLevel::P50 => estimate.p50 = value,
            PercentileLevel::P90 => estimate.p90 = value,
        }
    }

    fn name(self) -> &'static str {
        match self {
            PercentileLevel::P10 => "p10",
            PercentileLevel::P50 => "p50",
            PercentileLevel::P90 => "p90",
        }
    }
}

/// A factor-and-percentile pair identifying one perturbable scalar.
///
/// Displayed and parsed as `"<factor>.<level>"`, e.g. `"tef.p50"` or
/// `"competitive_advantage.p90"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensitivityTarget {
    /// The factor to perturb.
    pub factor: RiskFactor,
    /// Which of its percentiles to perturb.
    pub level: PercentileLevel,
}

impl SensitivityTarget {
    /// Creates a target.
    pub fn new(factor: RiskFactor, level: PercentileLevel) -> Self {
        Self { factor, level }
    }

    fn estimate_mut<'a>(
        &self,
        inputs: &'a mut ScenarioInputs,
    ) -> Option<&'a mut RiskFactorEstimate> {
        match self.factor {
            RiskFactor::Tef => Some(&mut inputs.tef.estimate),
            RiskFactor::ContactFrequency => inputs.tef.contact_frequency.as_mut(),
            RiskFactor::ProbabilityOfAction => inputs.tef.prob_action.as_mut(),
            RiskFactor::Susceptibility => Some(&mut inputs.susceptibility),
            RiskFactor::Loss(category) => Some(inputs.loss_forms.get_mut(category)),
            RiskFactor::Slef => Some(&mut inputs.slef),
        }
    }

    /// Returns a copy of the scenario with this scalar multiplied by
    /// `1 + pct / 100`, clamped to the factor's admissible range.
    ///
    /// # Errors
    ///
    /// [`EngineError::FactorUnavailable`] if the scenario does not carry
    /// the targeted estimate (decomposition factors without decomposition).
    pub fn perturbed(
        &self,
        inputs: &ScenarioInputs,
        pct: f64,
    ) -> Result<ScenarioInputs, EngineError> {
        let mut adjusted = inputs.clone();
        let estimate = self
            .estimate_mut(&mut adjusted)
            .ok_or(EngineError::FactorUnavailable(*self))?;

        let value = self.level.get(estimate) * (1.0 + pct / 100.0);
        let value = if self.factor.is_probability() {
            value.clamp(0.0, 100.0)
        } else {
            value.max(0.0)
        };
        self.level.set(estimate, value);

        Ok(adjusted)
    }
}

impl fmt::Display for SensitivityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.factor.name(), self.level.name())
    }
}

#[cfg(feature = "serde")]
impl Serialize for SensitivityTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error returned when parsing a [`SensitivityTarget`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTargetError(String);

impl fmt::Display for ParseTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sensitivity target '{}'; expected '<factor>.<p10|p50|p90>'",
            self.0
        )
    }
}

impl std::error::Error for ParseTargetError {}

impl FromStr for SensitivityTarget {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTargetError(s.to_string());
        let (factor_name, level_name) = s.rsplit_once('.').ok_or_else(err)?;

        let factor = match factor_name {
            "tef" => RiskFactor::Tef,
            "contact_frequency" => RiskFactor::ContactFrequency,
            "prob_action" => RiskFactor::ProbabilityOfAction,
            "susceptibility" => RiskFactor::Susceptibility,
            "slef" => RiskFactor::Slef,
            other => {
                let category = LossCategory::ALL
                    .into_iter()
                    .find(|c| c.name() == other)
                    .ok_or_else(err)?;
                RiskFactor::Loss(category)
            }
        };

        let level = match level_name {
            "p10" => PercentileLevel::P10,
            "p50" => PercentileLevel::P50,
            "p90" => PercentileLevel::P90,
            _ => return Err(err()),
        };

        Ok(SensitivityTarget::new(factor, level))
    }
}

/// Result of one sensitivity run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SensitivityReport {
    /// The perturbed factor.
    pub factor: SensitivityTarget,
    /// Variation applied, in percent.
    pub variation_pct: f64,
    /// Median ALE of the unperturbed scenario.
    pub baseline_ale_p50: f64,
    /// Median ALE with the factor reduced by the variation.
    pub ale_down: f64,
    /// Median ALE with the factor raised by the variation.
    pub ale_up: f64,
    /// Elasticity computed from the downward perturbation.
    pub elasticity_down: f64,
    /// Elasticity computed from the upward perturbation.
    pub elasticity_up: f64,
    /// Mean of the two elasticities.
    pub average_elasticity: f64,
}

impl FairCalculator {
    /// Runs baseline, -v%, and +v% calculations for one factor and reports
    /// the elasticity of the median ALE.
    ///
    /// All three runs share the same base seed, so the factor's effect is
    /// isolated from sampling noise. Elasticity is `%ΔALE_P50 / %Δfactor`,
    /// computed separately for each direction; a zero baseline yields zero
    /// elasticities rather than a division by zero.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidVariation`] unless `0 < variation_pct <= 100`.
    /// * Any validation or fitting error from the three underlying runs.
    pub fn sensitivity(
        &self,
        inputs: &ScenarioInputs,
        target: SensitivityTarget,
        variation_pct: f64,
    ) -> Result<SensitivityReport, EngineError> {
        if !(variation_pct > 0.0 && variation_pct <= 100.0) {
            return Err(EngineError::InvalidVariation(variation_pct));
        }

        let baseline = self.calculate(inputs)?;
        let down = self.calculate(&target.perturbed(inputs, -variation_pct)?)?;
        let up = self.calculate(&target.perturbed(inputs, variation_pct)?)?;

        let baseline_ale = baseline.ale.p50;
        let (elasticity_down, elasticity_up) = if baseline_ale == 0.0 {
            (0.0, 0.0)
        } else {
            (
                ((down.ale.p50 - baseline_ale) / baseline_ale) / (-variation_pct / 100.0),
                ((up.ale.p50 - baseline_ale) / baseline_ale) / (variation_pct / 100.0),
            )
        };

        Ok(SensitivityReport {
            factor: target,
            variation_pct,
            baseline_ale_p50: baseline_ale,
            ale_down: down.ale.p50,
            ale_up: up.ale.p50,
            elasticity_down,
            elasticity_up,
            average_elasticity: (elasticity_down + elasticity_up) / 2.0,
        })
    }
}
