//! FAIR Monte Carlo calculation engine.
//!
//! One scenario evaluation runs through eight strictly ordered stages:
//!
//! 1. Validate the TEF, susceptibility, and (if secondary losses exist)
//!    SLEF estimates; fail fast on the first invalid group.
//! 2. Sample TEF — decomposed, zero-inflated, or direct.
//! 3. Sample susceptibility (Beta-PERT over percent).
//! 4. LEF = TEF x susceptibility / 100, element-wise.
//! 5. Sample the six loss forms independently.
//! 6. LM = primary + secondary x SLEF.
//! 7. ALE = LEF x LM, then scale ALE and LEF by the time horizon.
//! 8. Summarise.
//!
//! All stages after validation are deterministic pure functions of the
//! validated inputs and the derived seeds; recoverable numeric
//! degeneracies are clamped inside the fitters.

use risk_core::types::{FactorBounds, RiskFactorEstimate};
use risk_core::validate::validate_percentiles;
use risk_models::fit::{
    fit_beta_pert, fit_lognormal, fit_lognormal_from_quantiles, fit_poisson,
    fit_zero_inflated_poisson,
};
use risk_models::FittedDistribution;

use crate::config::SimulationConfig;
use crate::error::{EngineError, FieldGroup};
use crate::inputs::{FrequencyModel, LossCategory, ScenarioInputs};
use crate::result::{AleSummary, BandSummary, LossFormMedians, ScenarioResult};
use crate::seed::{derive_seed, SamplePurpose};

/// Structural zero rate assumed for a loss form whose P10 is zero when the
/// estimate does not carry an explicit rate. A policy default, not a
/// derived quantity.
pub const DEFAULT_ZERO_RATE: f64 = 0.10;

/// Floor applied to TEF percentiles on the lognormal path.
const MIN_TEF_PERCENTILE: f64 = 0.01;

/// Floor applied to loss percentiles before lognormal fitting.
const MIN_LOSS_PERCENTILE: f64 = 1e-6;

/// FAIR Monte Carlo calculator for single scenarios.
///
/// Owns a validated [`SimulationConfig`]; each [`calculate`] call is
/// independent and side-effect free, so one calculator can evaluate any
/// number of scenarios (in parallel, if the caller wishes — the aggregator
/// does exactly that).
///
/// [`calculate`]: FairCalculator::calculate
///
/// # Examples
///
/// ```rust
/// use risk_core::types::RiskFactorEstimate;
/// use risk_engine::calculator::FairCalculator;
/// use risk_engine::config::SimulationConfig;
/// use risk_engine::inputs::{ScenarioInputs, TefInput};
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
/// let result = FairCalculator::new(config).calculate(&inputs).unwrap();
/// assert!(result.ale.p50 > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct FairCalculator {
    config: SimulationConfig,
}

impl FairCalculator {
    /// Creates a calculator from a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Stage 1: validates the scenario's frequency and probability
    /// estimates without sampling anything.
    ///
    /// SLEF is only checked when at least one secondary loss form has a
    /// positive median; otherwise its estimate is irrelevant.
    ///
    /// # Errors
    ///
    /// [`EngineError::Validation`] for the first field group that fails,
    /// carrying every violated rule of that group.
    pub fn validate_inputs(&self, inputs: &ScenarioInputs) -> Result<(), EngineError> {
        check_group(
            FieldGroup::Tef,
            &inputs.tef.estimate,
            FactorBounds::non_negative(),
        )?;
        check_group(
            FieldGroup::Susceptibility,
            &inputs.susceptibility,
            FactorBounds::percentage(),
        )?;

        if inputs.loss_forms.has_secondary_losses() {
            check_group(FieldGroup::Slef, &inputs.slef, FactorBounds::percentage())?;
        }

        Ok(())
    }

    /// Runs the full eight-stage scenario evaluation.
    ///
    /// With a base seed in the configuration the result is bit-reproducible;
    /// without one every draw is independently nondeterministic.
    ///
    /// # Errors
    ///
    /// Validation and fitting failures, both raised before or during the
    /// sampling stage they belong to; nothing after stage 5 can fail.
    pub fn calculate(&self, inputs: &ScenarioInputs) -> Result<ScenarioResult, EngineError> {
        self.validate_inputs(inputs)?;

        let n = self.config.n_simulations();
        let horizon = inputs.time_horizon_years;

        // Stages 2-3
        let tef_samples = self.sample_tef(inputs)?;
        let susceptibility_samples = self.sample_percentage(
            &inputs.susceptibility,
            SamplePurpose::Susceptibility,
            "susceptibility",
        )?;

        // Stage 4
        let mut lef_samples: Vec<f64> = tef_samples
            .iter()
            .zip(&susceptibility_samples)
            .map(|(tef, susc)| tef * (susc / 100.0))
            .collect();

        // Stage 5
        let mut loss_samples: Vec<Vec<f64>> = Vec::with_capacity(LossCategory::ALL.len());
        for category in LossCategory::ALL {
            loss_samples.push(self.sample_loss_form(inputs.loss_forms.get(category), category)?);
        }

        // Stage 6: secondary losses are gated to zero when SLEF's median is
        // zero, regardless of the secondary estimates themselves.
        let slef_samples = if inputs.slef.p50 > 0.0 {
            self.sample_percentage(&inputs.slef, SamplePurpose::SecondaryFrequency, "slef")?
        } else {
            vec![0.0; n]
        };

        let mut lm_samples = vec![0.0; n];
        for i in 0..n {
            let primary = loss_samples[LossCategory::Productivity.index()][i]
                + loss_samples[LossCategory::Response.index()][i]
                + loss_samples[LossCategory::Replacement.index()][i];
            let secondary = loss_samples[LossCategory::Fines.index()][i]
                + loss_samples[LossCategory::CompetitiveAdvantage.index()][i]
                + loss_samples[LossCategory::Reputation.index()][i];
            lm_samples[i] = primary + secondary * (slef_samples[i] / 100.0);
        }

        // Stage 7
        let mut ale_samples: Vec<f64> = lef_samples
            .iter()
            .zip(&lm_samples)
            .map(|(lef, lm)| lef * lm)
            .collect();

        if horizon != 1.0 {
            for value in ale_samples.iter_mut() {
                *value *= horizon;
            }
            for value in lef_samples.iter_mut() {
                *value *= horizon;
            }
        }

        // Stage 8
        let mut loss_forms = LossFormMedians::default();
        for category in LossCategory::ALL {
            loss_forms.set(
                category,
                risk_core::stats::percentile(&loss_samples[category.index()], 50.0),
            );
        }

        Ok(ScenarioResult {
            ale: AleSummary::from_samples(&ale_samples),
            lef: BandSummary::from_samples(&lef_samples),
            lm: BandSummary::from_samples(&lm_samples),
            loss_forms,
            n_simulations: n,
            time_horizon_years: horizon,
            currency: inputs.currency.clone(),
            tef_samples,
            susceptibility_samples,
            lef_samples,
            lm_samples,
            ale_samples,
        })
    }

    /// Stage 2: samples the TEF distribution.
    fn sample_tef(&self, inputs: &ScenarioInputs) -> Result<Vec<f64>, EngineError> {
        let n = self.config.n_simulations();
        let base = self.config.seed();
        let tef = &inputs.tef;

        if tef.decompose {
            // TEF = contact frequency x probability of action
            let contact = tef
                .contact_frequency
                .as_ref()
                .ok_or(EngineError::MissingDecomposition)?;
            let action = tef
                .prob_action
                .as_ref()
                .ok_or(EngineError::MissingDecomposition)?;

            let contact_dist = self.fit_frequency(contact, tef.model, "contact_frequency")?;
            let contact_samples =
                contact_dist.sample(n, derive_seed(base, SamplePurpose::ThreatFrequency));

            let action_samples =
                self.sample_percentage(action, SamplePurpose::ProbabilityOfAction, "prob_action")?;

            return Ok(contact_samples
                .iter()
                .zip(&action_samples)
                .map(|(cf, poa)| cf * (poa / 100.0))
                .collect());
        }

        if tef.zero_inflation {
            let est = &tef.estimate;
            let dist = fit_zero_inflated_poisson(est.p10, est.p50, est.p90, tef.p_zero).map_err(
                |source| EngineError::Fit {
                    factor: "tef",
                    source,
                },
            )?;
            return Ok(dist.sample(n, derive_seed(base, SamplePurpose::ThreatFrequency)));
        }

        let dist = self.fit_frequency(&tef.estimate, tef.model, "tef")?;
        Ok(dist.sample(n, derive_seed(base, SamplePurpose::ThreatFrequency)))
    }

    /// Fits a frequency estimate with the configured model.
    fn fit_frequency(
        &self,
        estimate: &RiskFactorEstimate,
        model: FrequencyModel,
        factor: &'static str,
    ) -> Result<FittedDistribution, EngineError> {
        let result = match model {
            FrequencyModel::Poisson => fit_poisson(estimate.p10, estimate.p50, estimate.p90),
            // Floor the inputs so an estimate touching zero still has a
            // positive support to fit on
            FrequencyModel::Lognormal => fit_lognormal(
                estimate.p10.max(MIN_TEF_PERCENTILE),
                estimate.p50.max(MIN_TEF_PERCENTILE),
                estimate.p90.max(MIN_TEF_PERCENTILE),
            ),
        };
        result.map_err(|source| EngineError::Fit { factor, source })
    }

    /// Samples a percentage-valued factor as Beta-PERT over `[0, 100]`.
    ///
    /// An estimate with no spread is a point mass at its median — this is
    /// what keeps an all-zero susceptibility from contributing any loss
    /// events at all.
    fn sample_percentage(
        &self,
        estimate: &RiskFactorEstimate,
        purpose: SamplePurpose,
        factor: &'static str,
    ) -> Result<Vec<f64>, EngineError> {
        let n = self.config.n_simulations();

        let dist = if estimate.is_point() {
            FittedDistribution::PointMass {
                value: estimate.p50,
            }
        } else {
            fit_beta_pert(estimate.p10, estimate.p50, estimate.p90, 0.0, 100.0)
                .map_err(|source| EngineError::Fit { factor, source })?
        };

        Ok(dist.sample(n, derive_seed(self.config.seed(), purpose)))
    }

    /// Stage 5 policy for a single loss form:
    /// - median 0: all-zero array, no fitting;
    /// - P10 = 0: zero-inflated lognormal with the overall percentiles
    ///   remapped into conditional quantiles of the non-zero component;
    /// - P10 > 0: plain three-percentile lognormal.
    fn sample_loss_form(
        &self,
        estimate: &RiskFactorEstimate,
        category: LossCategory,
    ) -> Result<Vec<f64>, EngineError> {
        let n = self.config.n_simulations();

        if estimate.p50 == 0.0 {
            return Ok(vec![0.0; n]);
        }

        let seed = derive_seed(self.config.seed(), SamplePurpose::LossForm(category));

        if estimate.p10 == 0.0 {
            let p_zero = estimate.p_zero.unwrap_or(DEFAULT_ZERO_RATE);

            // Remap the overall quantiles into the non-zero component:
            // q* = (q - p_zero) / (1 - p_zero), kept inside the open interval
            let denom = (1.0 - p_zero).max(1e-6);
            let q50 = ((0.50 - p_zero) / denom).clamp(1e-6, 1.0 - 1e-6);
            let q90 = ((0.90 - p_zero) / denom)
                .min(1.0 - 1e-6)
                .max(q50 + 1e-6);

            let x50 = estimate.p50.max(1.0);
            let x90 = estimate.p90.max(1.0);

            let base = fit_lognormal_from_quantiles(x50, q50, x90, q90)
                .map_err(|source| EngineError::loss_fit(category, source))?;
            let FittedDistribution::Lognormal { mu, sigma } = base else {
                unreachable!("two-quantile fit always yields a lognormal");
            };

            let dist = FittedDistribution::ZeroInflatedLognormal { p_zero, mu, sigma };
            return Ok(dist.sample(n, seed));
        }

        let dist = fit_lognormal(
            estimate.p10.max(MIN_LOSS_PERCENTILE),
            estimate.p50.max(MIN_LOSS_PERCENTILE),
            estimate.p90.max(MIN_LOSS_PERCENTILE),
        )
        .map_err(|source| EngineError::loss_fit(category, source))?;

        Ok(dist.sample(n, seed))
    }
}

fn check_group(
    field: FieldGroup,
    estimate: &RiskFactorEstimate,
    bounds: FactorBounds,
) -> Result<(), EngineError> {
    let violations = validate_percentiles(estimate, bounds);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(EngineError::Validation { field, violations })
    }
}
