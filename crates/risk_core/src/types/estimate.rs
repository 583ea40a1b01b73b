//! Three-point percentile estimates for risk factors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound accepted for the structural zero rate of an estimate.
///
/// Rates above this describe factors that are "almost always zero", which
/// degenerate the zero-inflated fits; callers supplying a larger value get
/// it clamped here.
pub const MAX_ZERO_RATE: f64 = 0.9;

/// A human-supplied (P10, P50, P90) percentile triple for one risk factor.
///
/// The triple is expected to satisfy `p10 <= p50 <= p90`; this is checked by
/// [`validate_percentiles`](crate::validate::validate_percentiles), not by
/// the constructors, so that the validator can report every violated rule at
/// once rather than rejecting construction on the first.
///
/// An estimate may carry an optional structural zero rate (`p_zero`): the
/// probability that the factor is exactly zero when an event occurs. It is
/// only meaningful for loss-magnitude factors whose P10 is zero.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::RiskFactorEstimate;
///
/// let tef = RiskFactorEstimate::new(2.0, 5.0, 12.0);
/// assert!(tef.is_strictly_increasing());
///
/// let fines = RiskFactorEstimate::new(0.0, 50_000.0, 500_000.0)
///     .with_zero_rate(0.25);
/// assert_eq!(fines.p_zero, Some(0.25));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiskFactorEstimate {
    /// 10th percentile.
    pub p10: f64,
    /// 50th percentile (median).
    pub p50: f64,
    /// 90th percentile.
    pub p90: f64,
    /// Optional structural zero rate in `[0, 0.9]`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub p_zero: Option<f64>,
}

impl RiskFactorEstimate {
    /// Creates an estimate from its three percentiles.
    #[inline]
    pub fn new(p10: f64, p50: f64, p90: f64) -> Self {
        Self {
            p10,
            p50,
            p90,
            p_zero: None,
        }
    }

    /// Returns the all-zero estimate (the conventional "factor absent" value).
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Attaches a structural zero rate, clamped into `[0, 0.9]`.
    #[inline]
    pub fn with_zero_rate(mut self, p_zero: f64) -> Self {
        self.p_zero = Some(p_zero.clamp(0.0, MAX_ZERO_RATE));
        self
    }

    /// Whether the three percentiles are strictly increasing.
    #[inline]
    pub fn is_strictly_increasing(&self) -> bool {
        self.p10 < self.p50 && self.p50 < self.p90
    }

    /// Whether the estimate carries no spread at all (`p10 == p90`).
    ///
    /// Under the monotonicity invariant this means all three percentiles
    /// coincide; such a factor is a point mass, not a distribution to fit.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.p90 - self.p10 == 0.0
    }
}

impl Default for RiskFactorEstimate {
    fn default() -> Self {
        Self::zero()
    }
}
