//! Beta-PERT fitting for bounded, percentage-like factors.

use super::FitError;
use crate::FittedDistribution;

/// Floor applied to both Beta shape parameters.
pub const MIN_SHAPE: f64 = 0.5;

/// Fits a Beta-PERT distribution from a (P10, P50, P90) triple on
/// `[lower, upper]`.
///
/// The triple is rescaled into the unit interval and the scaled median is
/// treated as the PERT mode. From the PERT moments
/// `mean = (4 * mode + 1) / 6` and `variance = mean * (1 - mean) / 7`, the
/// Beta shapes follow by method of moments:
/// `k = mean * (1 - mean) / variance - 1`, `alpha = mean * k`,
/// `beta = (1 - mean) * k`.
///
/// If the moment solution degenerates (non-positive variance or a mean on
/// the boundary) the fit falls back to the near-uniform `Beta(2, 2)`. Both
/// shapes are floored at [`MIN_SHAPE`].
///
/// # Errors
///
/// * [`FitError::NotStrictlyIncreasing`] unless `p10 < p50 < p90`.
/// * [`FitError::OutOfBounds`] unless `lower <= p10` and `p90 <= upper`.
///
/// # Examples
///
/// ```rust
/// use risk_models::fit::fit_beta_pert;
///
/// // Susceptibility estimated at 10/30/60%
/// let dist = fit_beta_pert(10.0, 30.0, 60.0, 0.0, 100.0).unwrap();
/// let samples = dist.sample(10_000, Some(7));
/// assert!(samples.iter().all(|x| (0.0..=100.0).contains(x)));
/// ```
pub fn fit_beta_pert(
    p10: f64,
    p50: f64,
    p90: f64,
    lower: f64,
    upper: f64,
) -> Result<FittedDistribution, FitError> {
    if !(p10 < p50 && p50 < p90) {
        return Err(FitError::NotStrictlyIncreasing);
    }
    if !(lower <= p10 && p90 <= upper) {
        return Err(FitError::OutOfBounds { lower, upper });
    }

    let range = upper - lower;
    let mode = (p50 - lower) / range;

    let mean = (4.0 * mode + 1.0) / 6.0;
    let variance = mean * (1.0 - mean) / 7.0;

    let (alpha, beta) = if variance <= 0.0 || mean <= 0.0 || mean >= 1.0 {
        // Moment solution degenerated; near-uniform fallback
        (2.0, 2.0)
    } else {
        let k = mean * (1.0 - mean) / variance - 1.0;
        (mean * k, (1.0 - mean) * k)
    };

    Ok(FittedDistribution::BetaPert {
        alpha: alpha.max(MIN_SHAPE),
        beta: beta.max(MIN_SHAPE),
        lower,
        upper,
    })
}
