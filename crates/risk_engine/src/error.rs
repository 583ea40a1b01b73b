//! Engine error taxonomy.
//!
//! Three classes, mirroring how failures propagate:
//! - **Validation**: bad inputs, reported before any sampling with every
//!   violated rule for the offending field group.
//! - **Fit**: an estimate the requested distribution family cannot
//!   represent; also surfaced to the caller as an input problem.
//! - **Configuration**: simulation count or correlation outside bounds.
//!
//! Numeric degeneracies with defined fallbacks (zero PERT variance,
//! quantile remap clamps, near-zero logs) are recovered inside the fitters
//! and never reach this type.

use std::fmt;

use risk_core::validate::PercentileRule;
use risk_models::fit::FitError;

use crate::config::ConfigError;
use crate::inputs::LossCategory;
use crate::sensitivity::SensitivityTarget;

/// Field group named in a validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldGroup {
    /// Threat event frequency.
    Tef,
    /// Susceptibility.
    Susceptibility,
    /// Secondary loss event frequency.
    Slef,
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldGroup::Tef => write!(f, "TEF"),
            FieldGroup::Susceptibility => write!(f, "Susceptibility"),
            FieldGroup::Slef => write!(f, "SLEF"),
        }
    }
}

/// Errors surfaced by the calculator, sensitivity engine, and aggregator.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Percentile validation failed for one field group; carries every
    /// violated rule for that group.
    Validation {
        /// Which field group failed.
        field: FieldGroup,
        /// All violated rules, in check order.
        violations: Vec<PercentileRule>,
    },

    /// A distribution could not be fitted from the named factor's estimate.
    Fit {
        /// Factor whose estimate was being fitted.
        factor: &'static str,
        /// The underlying fitting error.
        source: FitError,
    },

    /// Invalid simulation configuration.
    Config(ConfigError),

    /// Correlation coefficient outside `[0, 1]`.
    InvalidCorrelation(f64),

    /// Sensitivity variation percentage outside `(0, 100]`.
    InvalidVariation(f64),

    /// TEF decomposition was requested without both sub-estimates.
    MissingDecomposition,

    /// The sensitivity target refers to an estimate the scenario does not
    /// carry (decomposition factors of a non-decomposed scenario).
    FactorUnavailable(SensitivityTarget),

    /// Aggregation was invoked with no scenarios.
    NoScenarios,
}

impl EngineError {
    /// Convenience constructor used by loss-form fitting sites.
    pub(crate) fn loss_fit(category: LossCategory, source: FitError) -> Self {
        EngineError::Fit {
            factor: category.name(),
            source,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Validation { field, violations } => {
                write!(f, "Invalid {} percentiles: ", field)?;
                for (i, rule) in violations.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", rule)?;
                }
                Ok(())
            }
            EngineError::Fit { factor, source } => {
                write!(f, "Cannot fit {} distribution: {}", factor, source)
            }
            EngineError::Config(err) => write!(f, "{}", err),
            EngineError::InvalidCorrelation(rho) => {
                write!(f, "Correlation {} must be between 0 and 1", rho)
            }
            EngineError::InvalidVariation(pct) => {
                write!(f, "Variation percentage {} must be in (0, 100]", pct)
            }
            EngineError::MissingDecomposition => write!(
                f,
                "TEF decomposition requires contact frequency and probability of action estimates"
            ),
            EngineError::FactorUnavailable(target) => {
                write!(f, "Factor {} is not present in the scenario", target)
            }
            EngineError::NoScenarios => write!(f, "At least one scenario is required"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Fit { source, .. } => Some(source),
            EngineError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}
