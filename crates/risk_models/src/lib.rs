//! # risk_models: Distribution Fitting and Sampling (Layer 2)
//!
//! Converts sparse percentile estimates into parametric distributions and
//! draws reproducible Monte Carlo samples from them.
//!
//! The crate covers exactly the distribution families the FAIR model
//! needs — it is not a general-purpose statistics library:
//! - Lognormal, fitted from three percentiles or from two arbitrary
//!   quantiles (`fit::lognormal`)
//! - Beta-PERT over an explicit `[lower, upper]` range (`fit::beta_pert`)
//! - Poisson, fitted by bounded percentile matching (`fit::poisson`)
//! - Zero-inflated Poisson and lognormal mixtures
//! - Point masses for estimates that carry no spread
//!
//! ## Reproducibility
//!
//! Sampling goes through [`SimRng`], a seeded generator: the same fitted
//! distribution, sample count, and seed always produce the same array.
//! Zero-inflated sampling draws its Bernoulli mask for all N entries before
//! the base distribution, so the number of consumed random draws never
//! depends on the mask outcome.
//!
//! ## Example
//!
//! ```rust
//! use risk_models::fit::fit_lognormal;
//!
//! let dist = fit_lognormal(50_000.0, 150_000.0, 500_000.0).unwrap();
//! let samples = dist.sample(10_000, Some(42));
//! assert_eq!(samples.len(), 10_000);
//! assert!(samples.iter().all(|x| *x > 0.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod distribution;
pub mod fit;
mod rng;

pub use distribution::FittedDistribution;
pub use rng::SimRng;
