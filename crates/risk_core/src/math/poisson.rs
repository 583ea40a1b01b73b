//! Poisson quantile function.
//!
//! The Poisson percentile fit needs the quantiles implied by a trial rate;
//! this module computes them by walking the CDF exactly for moderate rates
//! and switching to a normal approximation where `exp(-lambda)` would
//! underflow.

use super::normal::norm_ppf;

/// Largest rate for which the CDF walk is used; above this the pmf seed
/// `exp(-lambda)` loses too much precision and the normal approximation
/// takes over.
const EXACT_LAMBDA_LIMIT: f64 = 500.0;

/// Poisson quantile function: smallest k with `P(X <= k) >= q`.
///
/// Returns the quantile as `f64` (it is always a non-negative integer
/// value). `q <= 0` yields 0; `q` is clamped below 1 so the walk always
/// terminates.
///
/// # Examples
///
/// ```rust
/// use risk_core::math::poisson::poisson_quantile;
///
/// // Median of Poisson(5) is 5
/// assert_eq!(poisson_quantile(5.0, 0.5), 5.0);
/// // 90th percentile of Poisson(5) is 8
/// assert_eq!(poisson_quantile(5.0, 0.9), 8.0);
/// ```
pub fn poisson_quantile(lambda: f64, q: f64) -> f64 {
    if q <= 0.0 || lambda <= 0.0 {
        return 0.0;
    }
    let q = q.min(1.0 - 1e-12);

    if lambda > EXACT_LAMBDA_LIMIT {
        // Normal approximation with continuity correction
        let approx = lambda + norm_ppf(q) * lambda.sqrt() + 0.5;
        return approx.floor().max(0.0);
    }

    // Walk the CDF using pmf(k+1) = pmf(k) * lambda / (k+1)
    let mut pmf = (-lambda).exp();
    let mut cdf = pmf;
    let mut k: u64 = 0;
    let cap = (lambda + 20.0 * lambda.sqrt() + 100.0) as u64;

    while cdf < q && k < cap {
        k += 1;
        pmf *= lambda / k as f64;
        cdf += pmf;
    }

    k as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_quantiles() {
        // Values cross-checked against standard Poisson tables
        assert_eq!(poisson_quantile(1.0, 0.5), 1.0);
        assert_eq!(poisson_quantile(2.0, 0.1), 0.0);
        assert_eq!(poisson_quantile(2.0, 0.9), 4.0);
        assert_eq!(poisson_quantile(5.0, 0.1), 2.0);
        assert_eq!(poisson_quantile(5.0, 0.5), 5.0);
        assert_eq!(poisson_quantile(5.0, 0.9), 8.0);
        assert_eq!(poisson_quantile(10.0, 0.9), 14.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(poisson_quantile(5.0, 0.0), 0.0);
        assert_eq!(poisson_quantile(5.0, -0.5), 0.0);
        assert_eq!(poisson_quantile(0.0, 0.9), 0.0);
        assert_eq!(poisson_quantile(-1.0, 0.9), 0.0);
    }

    #[test]
    fn test_monotone_in_q() {
        for lambda in [0.5, 3.0, 20.0, 150.0] {
            let mut prev = 0.0;
            for i in 1..20 {
                let k = poisson_quantile(lambda, i as f64 / 20.0);
                assert!(k >= prev, "not monotone at lambda={}", lambda);
                prev = k;
            }
        }
    }

    #[test]
    fn test_large_lambda_uses_normal_approximation() {
        // Median of Poisson(lambda) is within ~1 of lambda
        let median = poisson_quantile(10_000.0, 0.5);
        assert!((median - 10_000.0).abs() <= 2.0);

        // 90th percentile near lambda + 1.2816 * sqrt(lambda)
        let p90 = poisson_quantile(10_000.0, 0.9);
        let expected = 10_000.0 + 1.2815515655446004 * 100.0;
        assert!((p90 - expected).abs() < 3.0);
    }

    #[test]
    fn test_q_near_one_terminates() {
        let k = poisson_quantile(3.0, 1.0);
        assert!(k.is_finite());
        assert!(k >= 3.0);
    }
}
