//! Solver configuration.

/// Tolerance and iteration budget shared by the scalar solvers.
///
/// # Examples
///
/// ```rust
/// use risk_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::new(1e-8, 300);
/// assert_eq!(config.max_iterations, 300);
///
/// let default = SolverConfig::default();
/// assert!(default.tolerance > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the bracket width.
    pub tolerance: f64,
    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl SolverConfig {
    /// Creates a configuration from a tolerance and an iteration budget.
    #[inline]
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 500,
        }
    }
}
