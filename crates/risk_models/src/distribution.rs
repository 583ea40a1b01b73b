//! Fitted distribution families and sampling.

use rand_distr::{Beta, LogNormal, Poisson};

use crate::rng::SimRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zero rates above this would push a lognormal mixture's conditional
/// quantile remap into its degenerate region, so sampling clamps here.
pub const MAX_LOGNORMAL_ZERO_RATE: f64 = 0.49;

/// A distribution fitted from a percentile estimate.
///
/// Stateless value: derived deterministically from its source estimate and
/// carrying no identity beyond its parameters. The closed set of variants
/// is exactly the family the FAIR pipeline composes; dispatch is by `match`
/// rather than trait objects so the sampling loops stay monomorphic.
///
/// # Examples
///
/// ```rust
/// use risk_models::FittedDistribution;
///
/// let dist = FittedDistribution::PointMass { value: 3.0 };
/// assert_eq!(dist.sample(4, Some(1)), vec![3.0; 4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FittedDistribution {
    /// Lognormal with location fixed at zero: `ln X ~ N(mu, sigma)`.
    Lognormal {
        /// Mean of the underlying normal.
        mu: f64,
        /// Standard deviation of the underlying normal (positive).
        sigma: f64,
    },

    /// Beta-PERT: `Beta(alpha, beta)` affinely rescaled to `[lower, upper]`.
    BetaPert {
        /// First Beta shape parameter.
        alpha: f64,
        /// Second Beta shape parameter.
        beta: f64,
        /// Lower bound of the rescaled support.
        lower: f64,
        /// Upper bound of the rescaled support.
        upper: f64,
    },

    /// Poisson counts at the given rate.
    Poisson {
        /// Rate parameter (events per period).
        lambda: f64,
    },

    /// Poisson with a structural point mass at zero.
    ZeroInflatedPoisson {
        /// Structural zero probability in `[0, 1)`.
        p_zero: f64,
        /// Rate of the Poisson component.
        lambda: f64,
    },

    /// Lognormal with a structural point mass at zero.
    ZeroInflatedLognormal {
        /// Structural zero probability; clamped to `[0, 0.49]` at sampling.
        p_zero: f64,
        /// Mean of the underlying normal.
        mu: f64,
        /// Standard deviation of the underlying normal (positive).
        sigma: f64,
    },

    /// Degenerate distribution concentrated at a single value.
    ///
    /// Used for estimates with no spread (all three percentiles equal) and
    /// for loss forms whose median is zero.
    PointMass {
        /// The single value taken with probability one.
        value: f64,
    },
}

impl FittedDistribution {
    /// Short family name, for diagnostics.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Lognormal { .. } => "lognormal",
            Self::BetaPert { .. } => "beta-pert",
            Self::Poisson { .. } => "poisson",
            Self::ZeroInflatedPoisson { .. } => "zero-inflated-poisson",
            Self::ZeroInflatedLognormal { .. } => "zero-inflated-lognormal",
            Self::PointMass { .. } => "point-mass",
        }
    }

    /// Draws `n` samples under an optional seed.
    ///
    /// An absent seed means entropy seeding: two such calls produce
    /// unrelated arrays. With a seed the output is a pure function of
    /// `(self, n, seed)`.
    pub fn sample(&self, n: usize, seed: Option<u64>) -> Vec<f64> {
        let mut rng = SimRng::from_optional_seed(seed);
        self.sample_with(n, &mut rng)
    }

    /// Draws `n` samples from an existing generator.
    pub fn sample_with(&self, n: usize, rng: &mut SimRng) -> Vec<f64> {
        match *self {
            Self::Lognormal { mu, sigma } => sample_lognormal(mu, sigma, n, rng),

            Self::BetaPert {
                alpha,
                beta,
                lower,
                upper,
            } => {
                // Fitters floor the shapes at 0.5; the max here keeps a
                // hand-built variant from panicking inside rand_distr.
                let dist = Beta::new(alpha.max(f64::MIN_POSITIVE), beta.max(f64::MIN_POSITIVE))
                    .expect("positive Beta shapes");
                let mut buffer = vec![0.0; n];
                rng.fill_with(&dist, &mut buffer);
                for value in buffer.iter_mut() {
                    *value = lower + *value * (upper - lower);
                }
                buffer
            }

            Self::Poisson { lambda } => sample_poisson(lambda, n, rng),

            Self::ZeroInflatedPoisson { p_zero, lambda } => {
                // Mask before base draws: the consumed draw count must not
                // depend on the mask outcome.
                let mut mask = vec![false; n];
                rng.fill_bernoulli(p_zero.clamp(0.0, 1.0), &mut mask);
                let mut buffer = sample_poisson(lambda, n, rng);
                apply_zero_mask(&mut buffer, &mask);
                buffer
            }

            Self::ZeroInflatedLognormal { p_zero, mu, sigma } => {
                let p_zero = p_zero.clamp(0.0, MAX_LOGNORMAL_ZERO_RATE);
                let mut mask = vec![false; n];
                rng.fill_bernoulli(p_zero, &mut mask);
                let mut buffer = sample_lognormal(mu, sigma, n, rng);
                apply_zero_mask(&mut buffer, &mask);
                buffer
            }

            Self::PointMass { value } => vec![value; n],
        }
    }
}

fn sample_lognormal(mu: f64, sigma: f64, n: usize, rng: &mut SimRng) -> Vec<f64> {
    // Fitters guarantee sigma > 0; abs keeps a hand-built variant valid.
    let dist = LogNormal::new(mu, sigma.abs()).expect("non-negative lognormal sigma");
    let mut buffer = vec![0.0; n];
    rng.fill_with(&dist, &mut buffer);
    buffer
}

fn sample_poisson(lambda: f64, n: usize, rng: &mut SimRng) -> Vec<f64> {
    // Fitters floor lambda at 0.1.
    let dist = Poisson::new(lambda.max(f64::MIN_POSITIVE)).expect("positive Poisson rate");
    let mut buffer = vec![0.0; n];
    rng.fill_with(&dist, &mut buffer);
    buffer
}

fn apply_zero_mask(buffer: &mut [f64], mask: &[bool]) {
    for (value, is_zero) in buffer.iter_mut().zip(mask) {
        if *is_zero {
            *value = 0.0;
        }
    }
}
