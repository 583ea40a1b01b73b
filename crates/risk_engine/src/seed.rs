//! Deterministic seed derivation.
//!
//! Every distinct random draw within a scenario gets its own seed, derived
//! from the scenario's base seed by a fixed per-purpose offset. Two
//! calculations with the same inputs and base seed are therefore
//! bit-reproducible, while the sub-draws of one calculation stay
//! decorrelated from each other. Without a base seed, derivation is
//! disabled and every draw is independently entropy-seeded.

use crate::inputs::LossCategory;

/// Identifies one sampling site within a scenario calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplePurpose {
    /// TEF itself, or its contact-frequency component when decomposed.
    ThreatFrequency,
    /// Probability of action (decomposed TEF only).
    ProbabilityOfAction,
    /// Susceptibility.
    Susceptibility,
    /// One of the six loss forms.
    LossForm(LossCategory),
    /// Secondary loss event frequency.
    SecondaryFrequency,
}

impl SamplePurpose {
    /// Offset added to the base seed for this purpose.
    ///
    /// Offsets are spaced so no two purposes collide: 0 and 1 for the
    /// frequency pair, 10 for susceptibility, 20-25 for the loss forms,
    /// 30 for SLEF.
    pub fn offset(self) -> u64 {
        match self {
            SamplePurpose::ThreatFrequency => 0,
            SamplePurpose::ProbabilityOfAction => 1,
            SamplePurpose::Susceptibility => 10,
            SamplePurpose::LossForm(category) => 20 + category.index() as u64,
            SamplePurpose::SecondaryFrequency => 30,
        }
    }
}

/// Derives the seed for one sampling site from the scenario's base seed.
///
/// `None` in, `None` out: with no base seed every draw is nondeterministic.
///
/// # Examples
///
/// ```rust
/// use risk_engine::seed::{derive_seed, SamplePurpose};
///
/// assert_eq!(derive_seed(Some(42), SamplePurpose::Susceptibility), Some(52));
/// assert_eq!(derive_seed(None, SamplePurpose::Susceptibility), None);
/// ```
#[inline]
pub fn derive_seed(base: Option<u64>, purpose: SamplePurpose) -> Option<u64> {
    base.map(|b| b.wrapping_add(purpose.offset()))
}
