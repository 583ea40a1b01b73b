//! Scenario input types for a FAIR calculation.

use risk_core::types::RiskFactorEstimate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parametric family used to model a frequency factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrequencyModel {
    /// Discrete event counts (the usual choice for TEF).
    #[default]
    Poisson,
    /// Continuous positive rates with a heavy right tail.
    Lognormal,
}

/// Threat event frequency block of a scenario.
///
/// TEF can be estimated three ways, checked in this order by the
/// calculator:
/// 1. **Decomposed**: contact frequency × probability of action, when
///    `decompose` is set and both sub-estimates are present.
/// 2. **Zero-inflated**: a zero-inflated Poisson with the structural zero
///    rate `p_zero`, when `zero_inflation` is set.
/// 3. **Direct**: plain Poisson or lognormal per `model`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TefInput {
    /// The (P10, P50, P90) estimate of events per year.
    pub estimate: RiskFactorEstimate,
    /// Distribution family for the direct and decomposed paths.
    #[cfg_attr(feature = "serde", serde(default))]
    pub model: FrequencyModel,
    /// Whether to build TEF from contact frequency × probability of action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub decompose: bool,
    /// Contact frequency estimate (events per year), for the decomposed path.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub contact_frequency: Option<RiskFactorEstimate>,
    /// Probability of action estimate in percent, for the decomposed path.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub prob_action: Option<RiskFactorEstimate>,
    /// Whether to model structural zero years.
    #[cfg_attr(feature = "serde", serde(default))]
    pub zero_inflation: bool,
    /// Structural zero probability for the zero-inflated path.
    #[cfg_attr(feature = "serde", serde(default))]
    pub p_zero: f64,
}

impl TefInput {
    /// Direct TEF estimate with the default (Poisson) model.
    pub fn direct(estimate: RiskFactorEstimate) -> Self {
        Self {
            estimate,
            model: FrequencyModel::default(),
            decompose: false,
            contact_frequency: None,
            prob_action: None,
            zero_inflation: false,
            p_zero: 0.0,
        }
    }
}

/// One of the six FAIR loss forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LossCategory {
    /// Lost productivity while operations are degraded.
    Productivity,
    /// Incident response costs.
    Response,
    /// Asset replacement costs.
    Replacement,
    /// Fines and judgments (secondary).
    Fines,
    /// Lost competitive advantage (secondary).
    CompetitiveAdvantage,
    /// Reputation damage (secondary).
    Reputation,
}

impl LossCategory {
    /// All six categories, primary first, in seed-offset order.
    pub const ALL: [LossCategory; 6] = [
        LossCategory::Productivity,
        LossCategory::Response,
        LossCategory::Replacement,
        LossCategory::Fines,
        LossCategory::CompetitiveAdvantage,
        LossCategory::Reputation,
    ];

    /// Position within [`LossCategory::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            LossCategory::Productivity => 0,
            LossCategory::Response => 1,
            LossCategory::Replacement => 2,
            LossCategory::Fines => 3,
            LossCategory::CompetitiveAdvantage => 4,
            LossCategory::Reputation => 5,
        }
    }

    /// Whether the loss form is secondary (gated by SLEF).
    #[inline]
    pub fn is_secondary(self) -> bool {
        matches!(
            self,
            LossCategory::Fines | LossCategory::CompetitiveAdvantage | LossCategory::Reputation
        )
    }

    /// Snake-case name, used in diagnostics and factor identifiers.
    pub fn name(self) -> &'static str {
        match self {
            LossCategory::Productivity => "productivity",
            LossCategory::Response => "response",
            LossCategory::Replacement => "replacement",
            LossCategory::Fines => "fines",
            LossCategory::CompetitiveAdvantage => "competitive_advantage",
            LossCategory::Reputation => "reputation",
        }
    }
}

/// Percentile estimates for all six loss forms, in currency units.
///
/// Forms the caller does not estimate default to the all-zero estimate,
/// which the calculator short-circuits to a zero sample array.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LossFormEstimates {
    /// Lost productivity.
    pub productivity: RiskFactorEstimate,
    /// Incident response.
    pub response: RiskFactorEstimate,
    /// Asset replacement.
    pub replacement: RiskFactorEstimate,
    /// Fines and judgments.
    pub fines: RiskFactorEstimate,
    /// Lost competitive advantage.
    pub competitive_advantage: RiskFactorEstimate,
    /// Reputation damage.
    pub reputation: RiskFactorEstimate,
}

impl LossFormEstimates {
    /// Returns the estimate for a category.
    pub fn get(&self, category: LossCategory) -> &RiskFactorEstimate {
        match category {
            LossCategory::Productivity => &self.productivity,
            LossCategory::Response => &self.response,
            LossCategory::Replacement => &self.replacement,
            LossCategory::Fines => &self.fines,
            LossCategory::CompetitiveAdvantage => &self.competitive_advantage,
            LossCategory::Reputation => &self.reputation,
        }
    }

    /// Returns the estimate for a category, mutably.
    pub fn get_mut(&mut self, category: LossCategory) -> &mut RiskFactorEstimate {
        match category {
            LossCategory::Productivity => &mut self.productivity,
            LossCategory::Response => &mut self.response,
            LossCategory::Replacement => &mut self.replacement,
            LossCategory::Fines => &mut self.fines,
            LossCategory::CompetitiveAdvantage => &mut self.competitive_advantage,
            LossCategory::Reputation => &mut self.reputation,
        }
    }

    /// Whether any secondary loss form has a positive median.
    ///
    /// Controls whether SLEF is validated: without secondary exposure the
    /// SLEF estimate is irrelevant and left unchecked.
    pub fn has_secondary_losses(&self) -> bool {
        LossCategory::ALL
            .iter()
            .filter(|c| c.is_secondary())
            .any(|c| self.get(*c).p50 > 0.0)
    }
}

fn default_horizon() -> f64 {
    1.0
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Complete inputs for one FAIR scenario calculation.
///
/// Immutable once constructed; the sensitivity engine derives perturbed
/// copies rather than mutating in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioInputs {
    /// Threat event frequency block.
    pub tef: TefInput,
    /// Susceptibility estimate in percent.
    pub susceptibility: RiskFactorEstimate,
    /// The six loss form estimates.
    #[cfg_attr(feature = "serde", serde(default))]
    pub loss_forms: LossFormEstimates,
    /// Secondary loss event frequency estimate in percent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slef: RiskFactorEstimate,
    /// Time horizon in years; ALE and LEF are scaled by it when not 1.
    #[cfg_attr(feature = "serde", serde(default = "default_horizon"))]
    pub time_horizon_years: f64,
    /// Currency tag carried through to the result, never interpreted.
    #[cfg_attr(feature = "serde", serde(default = "default_currency"))]
    pub currency: String,
}

impl ScenarioInputs {
    /// Creates scenario inputs with defaults for the optional blocks.
    pub fn new(tef: TefInput, susceptibility: RiskFactorEstimate) -> Self {
        Self {
            tef,
            susceptibility,
            loss_forms: LossFormEstimates::default(),
            slef: RiskFactorEstimate::zero(),
            time_horizon_years: default_horizon(),
            currency: default_currency(),
        }
    }
}

/// A named scenario, the unit of portfolio aggregation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    /// Caller-chosen identifier, echoed in contributions and rankings.
    pub id: String,
    /// The scenario's inputs.
    pub inputs: ScenarioInputs,
}

impl Scenario {
    /// Creates a named scenario.
    pub fn new(id: impl Into<String>, inputs: ScenarioInputs) -> Self {
        Self {
            id: id.into(),
            inputs,
        }
    }
}
