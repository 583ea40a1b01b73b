//! Standard normal distribution functions.
//!
//! Provides the CDF (via a complementary error function approximation), the
//! PDF, and the inverse CDF (quantile function) used by the percentile
//! fitting algorithms.

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation using Horner's method.
///
/// Abramowitz and Stegun formula 7.1.26; maximum error 1.5e-7 for all x.
#[inline]
fn erfc_approx(x: f64) -> f64 {
    let abs_x = x.abs();

    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let t = 1.0 / (1.0 + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes `P(X <= x)` for `X ~ N(0, 1)`. Accurate to about 1e-7 for all
/// finite x.
///
/// # Examples
///
/// ```rust
/// use risk_core::math::normal::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc_approx(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Inverse standard normal CDF (quantile function).
///
/// Acklam's rational approximation, absolute error below 1.2e-8 over the
/// open unit interval. Inputs are clamped into `[1e-12, 1 - 1e-12]` so the
/// function always returns a finite value; the fitting pipeline only ever
/// evaluates it at interior quantiles.
///
/// # Examples
///
/// ```rust
/// use risk_core::math::normal::norm_ppf;
///
/// assert!(norm_ppf(0.5).abs() < 1e-8);
/// assert!((norm_ppf(0.90) - 1.2815515655446004).abs() < 1e-7);
/// assert!((norm_ppf(0.10) + norm_ppf(0.90)).abs() < 1e-7);
/// ```
pub fn norm_ppf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];

    const P_LOW: f64 = 0.02425;

    let p = p.clamp(1e-12, 1.0 - 1e-12);

    if p < P_LOW {
        // Lower tail
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        // Upper tail, by symmetry
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -((((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -1.5, -0.5, 0.5, 1.5, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for i in -100..=100 {
            let c = norm_cdf(i as f64 * 0.1);
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(1.0), 0.24197072451914337, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_ppf_reference_values() {
        // Standard normal quantile table values
        assert_relative_eq!(norm_ppf(0.10), -1.2815515655446004, epsilon = 1e-7);
        assert_relative_eq!(norm_ppf(0.90), 1.2815515655446004, epsilon = 1e-7);
        assert_relative_eq!(norm_ppf(0.975), 1.959963984540054, epsilon = 1e-7);
        assert_relative_eq!(norm_ppf(0.5), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn test_norm_ppf_tails() {
        assert_relative_eq!(norm_ppf(0.001), -3.090232306167813, epsilon = 1e-6);
        assert_relative_eq!(norm_ppf(0.999), 3.090232306167813, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_ppf_inverts_cdf() {
        for p in [0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            // Absolute tolerance: the erfc approximation caps the round
            // trip at roughly 1e-7
            assert!((norm_cdf(norm_ppf(p)) - p).abs() < 5e-7, "p = {}", p);
        }
    }

    #[test]
    fn test_norm_ppf_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        for i in 1..100 {
            let z = norm_ppf(i as f64 / 100.0);
            assert!(z > prev);
            prev = z;
        }
    }

    #[test]
    fn test_norm_ppf_out_of_range_is_finite() {
        assert!(norm_ppf(0.0).is_finite());
        assert!(norm_ppf(1.0).is_finite());
        assert!(norm_ppf(-0.3).is_finite());
    }
}
