//! Fitting errors.

use risk_core::types::SolverError;
use thiserror::Error;

/// Errors from the distribution fitters.
///
/// These mark inputs the requested family cannot represent (wrong sign,
/// wrong ordering, outside bounds). Numeric degeneracies that have a
/// defined fallback are handled inside the fitters and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Lognormal fitting requires all three percentiles to be positive.
    #[error("lognormal requires all percentiles > 0")]
    NonPositivePercentile,

    /// The family requires strictly increasing percentiles.
    #[error("percentiles must satisfy p10 < p50 < p90")]
    NotStrictlyIncreasing,

    /// The family requires non-decreasing percentiles.
    #[error("percentiles must satisfy p10 <= p50 <= p90")]
    NotMonotone,

    /// Poisson fitting requires non-negative percentiles.
    #[error("poisson requires non-negative percentiles")]
    NegativePercentile,

    /// Percentiles fall outside the declared support.
    #[error("percentiles must be within [{lower}, {upper}]")]
    OutOfBounds {
        /// Declared lower bound.
        lower: f64,
        /// Declared upper bound.
        upper: f64,
    },

    /// A quantile probability lies outside the open unit interval.
    #[error("quantile probability {q} must lie in (0, 1)")]
    InvalidQuantileProbability {
        /// The offending probability.
        q: f64,
    },

    /// The two quantile probabilities coincide, so no spread is defined.
    #[error("quantile probabilities must differ")]
    QuantilesCoincide,

    /// The structural zero rate lies outside `[0, 1)`.
    #[error("zero rate {p_zero} must lie in [0, 1)")]
    InvalidZeroRate {
        /// The offending rate.
        p_zero: f64,
    },

    /// The bounded rate search failed to converge.
    #[error("rate search failed: {0}")]
    Solver(#[from] SolverError),
}
