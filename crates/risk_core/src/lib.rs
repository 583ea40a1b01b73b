//! # risk_core: Mathematical Foundation for FAIR Risk Quantification
//!
//! ## Layer 1 (Foundation) Role
//!
//! risk_core is the bottom layer of the workspace, providing:
//! - Percentile estimate types: `RiskFactorEstimate`, `FactorBounds` (`types`)
//! - Percentile validation returning every violated rule (`validate`)
//! - Standard normal CDF/PDF/inverse CDF (`math::normal`)
//! - Poisson quantile function (`math::poisson`)
//! - Bounded scalar minimisation (`math::solvers`)
//! - Empirical summary statistics (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other risk_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use risk_core::types::{FactorBounds, RiskFactorEstimate};
//! use risk_core::validate::validate_percentiles;
//!
//! let estimate = RiskFactorEstimate::new(10.0, 30.0, 60.0);
//! let violations = validate_percentiles(&estimate, FactorBounds::percentage());
//! assert!(violations.is_empty());
//!
//! // Inverse standard normal CDF, used for quantile matching
//! let z90 = risk_core::math::normal::norm_ppf(0.90);
//! assert!((z90 - 1.2815515655).abs() < 1e-8);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod stats;
pub mod types;
pub mod validate;
