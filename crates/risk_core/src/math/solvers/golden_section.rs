//! Golden-section search for bounded scalar minimisation.

use super::SolverConfig;
use crate::types::SolverError;

/// Inverse golden ratio, (sqrt(5) - 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Derivative-free minimiser for a unimodal function on a closed interval.
///
/// Golden-section search shrinks the bracket by the inverse golden ratio
/// each iteration, reusing one interior evaluation per step. It needs no
/// derivatives and converges unconditionally for unimodal objectives, which
/// makes it the right tool for the percentile-matching objectives in this
/// workspace: smooth, single-minimum, and cheap to evaluate.
///
/// # Example
///
/// ```
/// use risk_core::math::solvers::{GoldenSectionMinimiser, SolverConfig};
///
/// let solver = GoldenSectionMinimiser::new(SolverConfig::default());
///
/// // Minimise (x - 2)^2 on [0, 10]
/// let x = solver.minimise(|x| (x - 2.0) * (x - 2.0), 0.0, 10.0).unwrap();
/// assert!((x - 2.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct GoldenSectionMinimiser {
    config: SolverConfig,
}

impl GoldenSectionMinimiser {
    /// Creates a minimiser with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Creates a minimiser with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds the minimiser of `f` on `[a, b]`.
    ///
    /// The bracket may be given in either order. Returns the midpoint of
    /// the final bracket once its width drops below the configured
    /// tolerance.
    ///
    /// # Errors
    ///
    /// * [`SolverError::InvalidBracket`] if the bracket is empty or has
    ///   non-finite endpoints.
    /// * [`SolverError::MaxIterationsExceeded`] if the bracket does not
    ///   shrink to tolerance within the iteration budget.
    pub fn minimise<F>(&self, f: F, a: f64, b: f64) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };

        if !a.is_finite() || !b.is_finite() || a == b {
            return Err(SolverError::InvalidBracket { a, b });
        }

        let mut x1 = b - INV_PHI * (b - a);
        let mut x2 = a + INV_PHI * (b - a);
        let mut f1 = f(x1);
        let mut f2 = f(x2);

        for _ in 0..self.config.max_iterations {
            if (b - a).abs() <= self.config.tolerance {
                return Ok(0.5 * (a + b));
            }

            if f1 < f2 {
                b = x2;
                x2 = x1;
                f2 = f1;
                x1 = b - INV_PHI * (b - a);
                f1 = f(x1);
            } else {
                a = x1;
                x1 = x2;
                f1 = f2;
                x2 = a + INV_PHI * (b - a);
                f2 = f(x2);
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}
