//! Simulation configuration.

use std::fmt;

/// Smallest admissible simulation count.
pub const MIN_SIMULATIONS: usize = 10_000;

/// Largest admissible simulation count.
pub const MAX_SIMULATIONS: usize = 1_000_000;

/// Default simulation count used by the builder.
pub const DEFAULT_SIMULATIONS: usize = 100_000;

/// Configuration error for the simulation setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Simulation count outside `[MIN_SIMULATIONS, MAX_SIMULATIONS]`.
    InvalidSimulationCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSimulationCount(count) => {
                write!(
                    f,
                    "Invalid simulation count {}: must be in range [{}, {}]",
                    count, MIN_SIMULATIONS, MAX_SIMULATIONS
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable Monte Carlo simulation configuration.
///
/// Carries the simulation count and the optional base seed. The seed is an
/// explicit value threaded through every sampling site via
/// [`derive_seed`](crate::seed::derive_seed) — the engine never reads
/// process-wide state. An absent seed makes every draw nondeterministic.
///
/// Use [`SimulationConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use risk_engine::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_simulations(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_simulations(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    n_simulations: usize,
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the simulation count.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the optional base seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfigBuilder {
    n_simulations: usize,
    seed: Option<u64>,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_simulations: DEFAULT_SIMULATIONS,
            seed: None,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the simulation count.
    #[inline]
    pub fn n_simulations(mut self, n: usize) -> Self {
        self.n_simulations = n;
        self
    }

    /// Sets the base seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the base seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSimulationCount`] if the count lies outside
    /// `[MIN_SIMULATIONS, MAX_SIMULATIONS]`.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        if !(MIN_SIMULATIONS..=MAX_SIMULATIONS).contains(&self.n_simulations) {
            return Err(ConfigError::InvalidSimulationCount(self.n_simulations));
        }
        Ok(SimulationConfig {
            n_simulations: self.n_simulations,
            seed: self.seed,
        })
    }
}
