//! Poisson fitting from percentiles.

use risk_core::math::poisson::poisson_quantile;
use risk_core::math::solvers::GoldenSectionMinimiser;

use super::FitError;
use crate::FittedDistribution;

/// Floor applied to every fitted Poisson rate.
pub const MIN_RATE: f64 = 0.1;

/// Weight on the median term of the percentile-matching objective.
const MEDIAN_WEIGHT: f64 = 4.0;

/// Fits a Poisson rate from a (P10, P50, P90) triple.
///
/// Minimises the weighted squared error between the target percentiles and
/// those implied by a trial rate, with the median term weighted 4x the tail
/// terms, searching `lambda` over `[0.1, max(100, 2 * p90)]`. The result is
/// floored at [`MIN_RATE`].
///
/// # Errors
///
/// * [`FitError::NegativePercentile`] if any percentile is negative.
/// * [`FitError::NotMonotone`] unless `p10 <= p50 <= p90`.
///
/// # Examples
///
/// ```rust
/// use risk_models::fit::fit_poisson;
/// use risk_models::FittedDistribution;
///
/// let dist = fit_poisson(2.0, 5.0, 12.0).unwrap();
/// if let FittedDistribution::Poisson { lambda } = dist {
///     assert!(lambda > 3.0 && lambda < 9.0);
/// } else {
///     unreachable!();
/// }
/// ```
pub fn fit_poisson(p10: f64, p50: f64, p90: f64) -> Result<FittedDistribution, FitError> {
    if p10 < 0.0 || p50 < 0.0 || p90 < 0.0 {
        return Err(FitError::NegativePercentile);
    }
    if !(p10 <= p50 && p50 <= p90) {
        return Err(FitError::NotMonotone);
    }

    let objective = |lambda: f64| {
        let q10 = poisson_quantile(lambda, 0.10);
        let q50 = poisson_quantile(lambda, 0.50);
        let q90 = poisson_quantile(lambda, 0.90);
        (q10 - p10).powi(2) + MEDIAN_WEIGHT * (q50 - p50).powi(2) + (q90 - p90).powi(2)
    };

    let upper = 100.0_f64.max(2.0 * p90);
    let solver = GoldenSectionMinimiser::with_defaults();
    let lambda = solver.minimise(objective, MIN_RATE, upper)?;

    Ok(FittedDistribution::Poisson {
        lambda: lambda.max(MIN_RATE),
    })
}

/// Fits a zero-inflated Poisson from a triple and a structural zero rate.
///
/// The zero rate is user-supplied, not estimated. The rate of the Poisson
/// component is approximated from the estimate:
/// - median 0, p90 0: fully degenerate, rate floored at [`MIN_RATE`];
/// - median 0, p90 > 0: structural zeros dominate, `lambda ~ p90 / 2`;
/// - median > 0: `lambda ~ p50`.
///
/// # Errors
///
/// * [`FitError::InvalidZeroRate`] unless `p_zero` lies in `[0, 1)`.
pub fn fit_zero_inflated_poisson(
    _p10: f64,
    p50: f64,
    p90: f64,
    p_zero: f64,
) -> Result<FittedDistribution, FitError> {
    if !(0.0..1.0).contains(&p_zero) {
        return Err(FitError::InvalidZeroRate { p_zero });
    }

    let lambda = if p50 == 0.0 {
        if p90 == 0.0 {
            MIN_RATE
        } else {
            (p90 / 2.0).max(MIN_RATE)
        }
    } else {
        p50.max(MIN_RATE)
    };

    Ok(FittedDistribution::ZeroInflatedPoisson { p_zero, lambda })
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_core::stats::percentile;

    fn rate(dist: FittedDistribution) -> f64 {
        match dist {
            FittedDistribution::Poisson { lambda } => lambda,
            FittedDistribution::ZeroInflatedPoisson { lambda, .. } => lambda,
            other => panic!("expected a poisson family, got {:?}", other),
        }
    }

    #[test]
    fn test_fit_recovers_plausible_rate() {
        let lambda = rate(fit_poisson(2.0, 5.0, 12.0).unwrap());
        assert!(lambda > 3.0 && lambda < 9.0, "lambda = {}", lambda);
    }

    #[test]
    fn test_fit_matches_median_for_tight_estimates() {
        // With p10 = p50 = p90 = k the best rate sits near k
        let lambda = rate(fit_poisson(5.0, 5.0, 5.0).unwrap());
        assert!((lambda - 5.0).abs() < 1.5, "lambda = {}", lambda);
    }

    #[test]
    fn test_fit_floors_tiny_rates() {
        let lambda = rate(fit_poisson(0.0, 0.0, 0.0).unwrap());
        assert!(lambda >= MIN_RATE);
    }

    #[test]
    fn test_fit_rejects_invalid_input() {
        assert_eq!(
            fit_poisson(-1.0, 2.0, 3.0),
            Err(FitError::NegativePercentile)
        );
        assert_eq!(fit_poisson(5.0, 2.0, 3.0), Err(FitError::NotMonotone));
    }

    #[test]
    fn test_fit_and_sample_median_is_close() {
        let dist = fit_poisson(2.0, 5.0, 12.0).unwrap();
        let samples = dist.sample(100_000, Some(42));
        let p50 = percentile(&samples, 50.0);
        assert!((p50 - 5.0).abs() <= 2.0, "median = {}", p50);
    }

    #[test]
    fn test_zip_median_dominant_rate() {
        let lambda = rate(fit_zero_inflated_poisson(0.0, 2.0, 8.0, 0.2).unwrap());
        assert_eq!(lambda, 2.0);
    }

    #[test]
    fn test_zip_structural_zero_dominant_rate() {
        let lambda = rate(fit_zero_inflated_poisson(0.0, 0.0, 8.0, 0.5).unwrap());
        assert_eq!(lambda, 4.0);
    }

    #[test]
    fn test_zip_fully_degenerate() {
        let lambda = rate(fit_zero_inflated_poisson(0.0, 0.0, 0.0, 0.5).unwrap());
        assert_eq!(lambda, MIN_RATE);
    }

    #[test]
    fn test_zip_rejects_bad_zero_rate() {
        assert!(matches!(
            fit_zero_inflated_poisson(0.0, 2.0, 8.0, 1.0),
            Err(FitError::InvalidZeroRate { .. })
        ));
        assert!(matches!(
            fit_zero_inflated_poisson(0.0, 2.0, 8.0, -0.1),
            Err(FitError::InvalidZeroRate { .. })
        ));
    }

    #[test]
    fn test_zip_sampling_zero_rate() {
        let dist = fit_zero_inflated_poisson(0.0, 2.0, 8.0, 0.2).unwrap();
        let samples = dist.sample(100_000, Some(42));
        let zero_rate = samples.iter().filter(|x| **x == 0.0).count() as f64 / 100_000.0;
        let expected = 0.2 + 0.8 * (-2.0_f64).exp();
        assert!((zero_rate - expected).abs() < 0.01);
    }
}
