//! Lognormal fitting from percentiles.

use risk_core::math::normal::norm_ppf;

use super::FitError;
use crate::FittedDistribution;

/// Floor applied to the fitted sigma so downstream sampling never sees a
/// zero-spread lognormal.
pub const MIN_SIGMA: f64 = 1e-6;

/// Floor applied to quantile values before taking logs.
const MIN_QUANTILE_VALUE: f64 = 1e-6;

/// Fits a lognormal from a (P10, P50, P90) triple.
///
/// The median anchors the location: `mu = ln(p50)`. The spread comes from
/// the outer percentiles through the standard normal quantiles at 0.10 and
/// 0.90: `sigma = (ln(p90) - ln(p10)) / (z_90 - z_10)`. Location is fixed
/// at zero.
///
/// # Errors
///
/// * [`FitError::NonPositivePercentile`] unless all three are > 0.
/// * [`FitError::NotStrictlyIncreasing`] unless `p10 < p50 < p90`.
///
/// # Examples
///
/// ```rust
/// use risk_models::fit::fit_lognormal;
/// use risk_models::FittedDistribution;
///
/// let dist = fit_lognormal(50_000.0, 150_000.0, 500_000.0).unwrap();
/// if let FittedDistribution::Lognormal { mu, .. } = dist {
///     assert!((mu - 150_000.0_f64.ln()).abs() < 1e-12);
/// } else {
///     unreachable!();
/// }
/// ```
pub fn fit_lognormal(p10: f64, p50: f64, p90: f64) -> Result<FittedDistribution, FitError> {
    if p10 <= 0.0 || p50 <= 0.0 || p90 <= 0.0 {
        return Err(FitError::NonPositivePercentile);
    }
    if !(p10 < p50 && p50 < p90) {
        return Err(FitError::NotStrictlyIncreasing);
    }

    let z10 = norm_ppf(0.10);
    let z90 = norm_ppf(0.90);

    let mu = p50.ln();
    let sigma = (p90.ln() - p10.ln()) / (z90 - z10);

    Ok(FittedDistribution::Lognormal { mu, sigma })
}

/// Fits a lognormal from two arbitrary (value, quantile) points.
///
/// Given `(x1, q1)` and `(x2, q2)` with distinct probabilities in the open
/// unit interval, solves `sigma = (ln x2 - ln x1) / (z(q2) - z(q1))` and
/// `mu = ln x1 - z(q1) * sigma`. Values are floored at 1e-6 before the log
/// and sigma is floored at [`MIN_SIGMA`], so near-degenerate inputs yield a
/// tight but valid distribution instead of an error.
///
/// Used by the zero-inflated loss composition, where overall percentiles
/// are first remapped to conditional quantiles of the non-zero component.
///
/// # Errors
///
/// * [`FitError::InvalidQuantileProbability`] if a probability leaves (0, 1).
/// * [`FitError::QuantilesCoincide`] if `q1 == q2`.
pub fn fit_lognormal_from_quantiles(
    x1: f64,
    q1: f64,
    x2: f64,
    q2: f64,
) -> Result<FittedDistribution, FitError> {
    for q in [q1, q2] {
        if !(0.0 < q && q < 1.0) {
            return Err(FitError::InvalidQuantileProbability { q });
        }
    }

    let z1 = norm_ppf(q1);
    let z2 = norm_ppf(q2);
    if z1 == z2 {
        return Err(FitError::QuantilesCoincide);
    }

    let x1 = x1.max(MIN_QUANTILE_VALUE);
    let x2 = x2.max(MIN_QUANTILE_VALUE);

    let sigma = ((x2.ln() - x1.ln()) / (z2 - z1)).max(MIN_SIGMA);
    let mu = x1.ln() - z1 * sigma;

    Ok(FittedDistribution::Lognormal { mu, sigma })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use risk_core::stats::percentile;

    fn params(dist: FittedDistribution) -> (f64, f64) {
        match dist {
            FittedDistribution::Lognormal { mu, sigma } => (mu, sigma),
            other => panic!("expected lognormal, got {:?}", other),
        }
    }

    #[test]
    fn test_median_anchors_mu() {
        let (mu, sigma) = params(fit_lognormal(50_000.0, 150_000.0, 500_000.0).unwrap());
        assert_relative_eq!(mu, 150_000.0_f64.ln(), epsilon = 1e-12);
        // sigma = ln(p90/p10) / (2 * 1.2816)
        assert_relative_eq!(
            sigma,
            (500_000.0_f64 / 50_000.0).ln() / (2.0 * 1.2815515655446004),
            epsilon = 1e-7,
        );
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            fit_lognormal(0.0, 2.0, 3.0),
            Err(FitError::NonPositivePercentile)
        );
        assert_eq!(
            fit_lognormal(-1.0, 2.0, 3.0),
            Err(FitError::NonPositivePercentile)
        );
    }

    #[test]
    fn test_rejects_non_increasing() {
        assert_eq!(
            fit_lognormal(2.0, 2.0, 3.0),
            Err(FitError::NotStrictlyIncreasing)
        );
        assert_eq!(
            fit_lognormal(3.0, 2.0, 1.0),
            Err(FitError::NotStrictlyIncreasing)
        );
    }

    #[test]
    fn test_fit_and_sample_round_trips_percentiles() {
        // Spec property: >= 100k samples reproduce the inputs within 5%
        let dist = fit_lognormal(50_000.0, 150_000.0, 500_000.0).unwrap();
        let samples = dist.sample(100_000, Some(42));

        for (pct, target) in [(10.0, 50_000.0), (50.0, 150_000.0), (90.0, 500_000.0)] {
            let observed = percentile(&samples, pct);
            assert!(
                ((observed - target) / target).abs() < 0.05,
                "P{} {} vs {}",
                pct,
                observed,
                target
            );
        }
    }

    #[test]
    fn test_two_quantile_fit_matches_three_point_fit() {
        // Feeding the 10/90 points of a 3-point fit back in recovers it
        let (mu3, sigma3) = params(fit_lognormal(10.0, 50.0, 250.0).unwrap());
        let (mu2, sigma2) = params(fit_lognormal_from_quantiles(10.0, 0.10, 250.0, 0.90).unwrap());
        assert_relative_eq!(sigma2, sigma3, epsilon = 1e-9);
        assert_relative_eq!(mu2, mu3, epsilon = 1e-7);
    }

    #[test]
    fn test_two_quantile_fit_rejects_bad_probabilities() {
        assert!(matches!(
            fit_lognormal_from_quantiles(1.0, 0.0, 2.0, 0.9),
            Err(FitError::InvalidQuantileProbability { .. })
        ));
        assert!(matches!(
            fit_lognormal_from_quantiles(1.0, 0.1, 2.0, 1.0),
            Err(FitError::InvalidQuantileProbability { .. })
        ));
        assert_eq!(
            fit_lognormal_from_quantiles(1.0, 0.5, 2.0, 0.5),
            Err(FitError::QuantilesCoincide)
        );
    }

    #[test]
    fn test_two_quantile_fit_floors_values_and_sigma() {
        // x values at or below zero are floored rather than rejected
        let (_, sigma) = params(fit_lognormal_from_quantiles(0.0, 0.4, 0.0, 0.9).unwrap());
        assert_eq!(sigma, MIN_SIGMA);

        // Decreasing values would give negative sigma; floored too
        let (_, sigma) = params(fit_lognormal_from_quantiles(10.0, 0.4, 5.0, 0.9).unwrap());
        assert_eq!(sigma, MIN_SIGMA);
    }

    proptest! {
        // Fitting any strictly increasing positive triple keeps the median
        // exactly and produces positive spread.
        #[test]
        fn prop_fit_preserves_median(p10 in 1.0..1e6f64, r1 in 1.01..50.0f64, r2 in 1.01..50.0f64) {
            let p50 = p10 * r1;
            let p90 = p50 * r2;
            let (mu, sigma) = params(fit_lognormal(p10, p50, p90).unwrap());
            prop_assert!((mu.exp() - p50).abs() / p50 < 1e-9);
            prop_assert!(sigma > 0.0);
        }
    }
}
