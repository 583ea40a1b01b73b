//! Scenario calculation results.

use risk_core::stats::{mean, percentile_of_sorted};

use crate::inputs::LossCategory;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Summary statistics for the ALE distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AleSummary {
    /// Mean annual loss expectancy.
    pub mean: f64,
    /// 10th percentile.
    pub p10: f64,
    /// Median.
    pub p50: f64,
    /// 90th percentile.
    pub p90: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
}

impl AleSummary {
    /// Computes the summary from an unsorted sample array.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self {
            mean: mean(samples),
            p10: percentile_of_sorted(&sorted, 10.0),
            p50: percentile_of_sorted(&sorted, 50.0),
            p90: percentile_of_sorted(&sorted, 90.0),
            p95: percentile_of_sorted(&sorted, 95.0),
            p99: percentile_of_sorted(&sorted, 99.0),
        }
    }
}

/// Summary statistics for the LEF and LM distributions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BandSummary {
    /// Mean of the distribution.
    pub mean: f64,
    /// 10th percentile.
    pub p10: f64,
    /// Median.
    pub p50: f64,
    /// 90th percentile.
    pub p90: f64,
}

impl BandSummary {
    /// Computes the summary from an unsorted sample array.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self {
            mean: mean(samples),
            p10: percentile_of_sorted(&sorted, 10.0),
            p50: percentile_of_sorted(&sorted, 50.0),
            p90: percentile_of_sorted(&sorted, 90.0),
        }
    }
}

/// Median of each raw loss-form sample array.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LossFormMedians {
    /// Lost productivity median.
    pub productivity: f64,
    /// Incident response median.
    pub response: f64,
    /// Asset replacement median.
    pub replacement: f64,
    /// Fines and judgments median.
    pub fines: f64,
    /// Lost competitive advantage median.
    pub competitive_advantage: f64,
    /// Reputation damage median.
    pub reputation: f64,
}

impl LossFormMedians {
    /// Returns the median for a category.
    pub fn get(&self, category: LossCategory) -> f64 {
        match category {
            LossCategory::Productivity => self.productivity,
            LossCategory::Response => self.response,
            LossCategory::Replacement => self.replacement,
            LossCategory::Fines => self.fines,
            LossCategory::CompetitiveAdvantage => self.competitive_advantage,
            LossCategory::Reputation => self.reputation,
        }
    }

    /// Sets the median for a category.
    pub(crate) fn set(&mut self, category: LossCategory, value: f64) {
        match category {
            LossCategory::Productivity => self.productivity = value,
            LossCategory::Response => self.response = value,
            LossCategory::Replacement => self.replacement = value,
            LossCategory::Fines => self.fines = value,
            LossCategory::CompetitiveAdvantage => self.competitive_advantage = value,
            LossCategory::Reputation => self.reputation = value,
        }
    }

    /// Sum of the three primary medians.
    pub fn primary_total(&self) -> f64 {
        self.productivity + self.response + self.replacement
    }
}

/// Result of one FAIR scenario calculation.
///
/// Carries the derived summaries plus owned copies of the underlying sample
/// arrays; the aggregator consumes the ALE array for portfolio composition.
/// The arrays are not serialised.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScenarioResult {
    /// ALE summary statistics.
    pub ale: AleSummary,
    /// LEF summary statistics (events per horizon).
    pub lef: BandSummary,
    /// Loss magnitude summary statistics (per event).
    pub lm: BandSummary,
    /// Per-category loss form medians.
    pub loss_forms: LossFormMedians,
    /// Number of Monte Carlo draws.
    pub n_simulations: usize,
    /// Time horizon the ALE/LEF figures are scaled to.
    pub time_horizon_years: f64,
    /// Currency tag from the inputs.
    pub currency: String,

    /// TEF sample array.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub tef_samples: Vec<f64>,
    /// Susceptibility sample array (percent).
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub susceptibility_samples: Vec<f64>,
    /// LEF sample array.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub lef_samples: Vec<f64>,
    /// Loss magnitude sample array.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub lm_samples: Vec<f64>,
    /// ALE sample array.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub ale_samples: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ale_summary_from_samples() {
        let samples: Vec<f64> = (1..=100).map(|i| i as f64).collect();
        let summary = AleSummary::from_samples(&samples);
        assert_relative_eq!(summary.mean, 50.5);
        assert_relative_eq!(summary.p10, 10.9);
        assert_relative_eq!(summary.p50, 50.5);
        assert_relative_eq!(summary.p99, 99.01);
    }

    #[test]
    fn test_band_summary_constant_array() {
        let summary = BandSummary::from_samples(&[3.0; 50]);
        assert_relative_eq!(summary.mean, 3.0);
        assert_relative_eq!(summary.p10, 3.0);
        assert_relative_eq!(summary.p90, 3.0);
    }

    #[test]
    fn test_loss_form_medians_accessors() {
        let mut medians = LossFormMedians::default();
        medians.set(LossCategory::Fines, 42.0);
        assert_eq!(medians.get(LossCategory::Fines), 42.0);
        medians.set(LossCategory::Productivity, 10.0);
        medians.set(LossCategory::Response, 20.0);
        medians.set(LossCategory::Replacement, 30.0);
        assert_eq!(medians.primary_total(), 60.0);
    }
}
