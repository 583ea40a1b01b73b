//! Percentile-to-parameter fitting algorithms.
//!
//! Each fitter is a pure numeric function from a percentile estimate (plus
//! bounds or quantile pairs where applicable) to a [`FittedDistribution`].
//! Recoverable numeric degeneracies (zero PERT variance, vanishing spread,
//! log of a near-zero value) are clamped to documented fallbacks so the
//! pipeline always produces finite parameters; genuine input violations are
//! reported as [`FitError`]s.
//!
//! [`FittedDistribution`]: crate::FittedDistribution

mod beta_pert;
mod error;
mod lognormal;
mod poisson;

pub use beta_pert::{fit_beta_pert, MIN_SHAPE};
pub use error::FitError;
pub use lognormal::{fit_lognormal, fit_lognormal_from_quantiles, MIN_SIGMA};
pub use poisson::{fit_poisson, fit_zero_inflated_poisson, MIN_RATE};
