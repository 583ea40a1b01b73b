//! # risk_engine: FAIR Monte Carlo Engine (Layer 3)
//!
//! Quantifies cyber-risk exposure with the FAIR (Factor Analysis of
//! Information Risk) model: percentile estimates for threat frequency,
//! susceptibility, and the six loss forms are fitted to distributions and
//! composed through Monte Carlo simulation into a full Annual Loss
//! Expectancy distribution.
//!
//! The FAIR algebra, per draw:
//!
//! ```text
//! LEF = TEF x Susceptibility / 100
//! LM  = (productivity + response + replacement)
//!     + (fines + competitive advantage + reputation) x SLEF / 100
//! ALE = LEF x LM
//! ```
//!
//! ## Modules
//!
//! - [`calculator`]: the eight-stage single-scenario evaluation
//! - [`sensitivity`]: ±v% one-factor elasticity analysis
//! - [`aggregation`]: portfolio summation, Gaussian-copula correlation,
//!   diversification benefit, and expectation metrics
//! - [`config`]: validated simulation count and explicit base seed
//! - [`seed`]: per-purpose deterministic seed derivation
//! - [`inputs`] / [`result`]: the value types flowing through the engine
//! - [`copula`]: equicorrelation matrices and PSD-tolerant Cholesky
//! - [`error`]: the validation / fit / configuration error taxonomy
//!
//! ## Reproducibility contract
//!
//! Every sampling site derives its seed as `base + purpose offset`
//! ([`seed::derive_seed`]); two runs with identical inputs, simulation
//! count, and base seed produce identical results. Parallel scenario
//! evaluation inside the aggregator does not affect this — determinism is
//! keyed to the seed, not to execution order.
//!
//! ## Example
//!
//! ```rust
//! use risk_core::types::RiskFactorEstimate;
//! use risk_engine::{FairCalculator, ScenarioInputs, SimulationConfig, TefInput};
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut inputs = ScenarioInputs::new(
//!     TefInput::direct(RiskFactorEstimate::new(2.0, 5.0, 12.0)),
//!     RiskFactorEstimate::new(10.0, 30.0, 60.0),
//! );
//! inputs.loss_forms.productivity = RiskFactorEstimate::new(50_000.0, 180_000.0, 500_000.0);
//!
//! let result = FairCalculator::new(config).calculate(&inputs).unwrap();
//! assert!(result.ale.p10 < result.ale.p50 && result.ale.p50 < result.ale.p90);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregation;
pub mod calculator;
pub mod config;
pub mod copula;
pub mod error;
pub mod inputs;
pub mod result;
pub mod seed;
pub mod sensitivity;

pub use aggregation::{FairAggregator, PortfolioResult};
pub use calculator::FairCalculator;
pub use config::SimulationConfig;
pub use error::EngineError;
pub use inputs::{LossCategory, Scenario, ScenarioInputs, TefInput};
pub use result::ScenarioResult;
pub use sensitivity::{SensitivityReport, SensitivityTarget};

// Re-exported so service-layer callers need only this crate.
pub use risk_core::types::{FactorBounds, RiskFactorEstimate};
