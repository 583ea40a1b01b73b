//! Percentile estimate validation.
//!
//! Checks monotonicity and bounds of a (P10, P50, P90) triple and reports
//! *every* violated rule, so that callers can surface all problems with an
//! estimate at once instead of fixing them one round-trip at a time.

use std::fmt;

use crate::types::{FactorBounds, RiskFactorEstimate};

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum PercentileRule {
    /// `p10 > p50`.
    MedianBelowP10,
    /// `p50 > p90`.
    P90BelowMedian,
    /// `p10` lies below the admissible minimum.
    BelowMinimum(f64),
    /// `p90` lies above the admissible maximum.
    AboveMaximum(f64),
    /// A probability-valued factor lies outside `[0, 100]`.
    OutsideProbabilityRange,
}

impl fmt::Display for PercentileRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentileRule::MedianBelowP10 => write!(f, "P10 must be <= P50"),
            PercentileRule::P90BelowMedian => write!(f, "P50 must be <= P90"),
            PercentileRule::BelowMinimum(min) => write!(f, "P10 must be >= {}", min),
            PercentileRule::AboveMaximum(max) => write!(f, "P90 must be <= {}", max),
            PercentileRule::OutsideProbabilityRange => {
                write!(f, "Probabilities must be in [0, 100]%")
            }
        }
    }
}

/// Validates an estimate against its bounds, returning every violated rule.
///
/// An empty vector means the estimate is admissible. Rules are checked in a
/// fixed order: monotonicity first, then the lower and upper bounds, then
/// the probability range.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::{FactorBounds, RiskFactorEstimate};
/// use risk_core::validate::{validate_percentiles, PercentileRule};
///
/// let est = RiskFactorEstimate::new(50.0, 30.0, 120.0);
/// let violations = validate_percentiles(&est, FactorBounds::percentage());
/// assert_eq!(
///     violations,
///     vec![
///         PercentileRule::MedianBelowP10,
///         PercentileRule::AboveMaximum(100.0),
///         PercentileRule::OutsideProbabilityRange,
///     ],
/// );
/// ```
pub fn validate_percentiles(
    estimate: &RiskFactorEstimate,
    bounds: FactorBounds,
) -> Vec<PercentileRule> {
    let mut violations = Vec::new();

    if estimate.p10 > estimate.p50 {
        violations.push(PercentileRule::MedianBelowP10);
    }
    if estimate.p50 > estimate.p90 {
        violations.push(PercentileRule::P90BelowMedian);
    }

    if let Some(min) = bounds.min {
        if estimate.p10 < min {
            violations.push(PercentileRule::BelowMinimum(min));
        }
    }
    if let Some(max) = bounds.max {
        if estimate.p90 > max {
            violations.push(PercentileRule::AboveMaximum(max));
        }
    }

    if bounds.probability && (estimate.p10 < 0.0 || estimate.p90 > 100.0) {
        violations.push(PercentileRule::OutsideProbabilityRange);
    }

    violations
}
