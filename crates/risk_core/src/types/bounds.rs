//! Admissible ranges for percentile estimates.

/// Bounds applied to a percentile estimate during validation.
///
/// `min`/`max` constrain the outer percentiles (`p10 >= min`, `p90 <= max`)
/// when present. The `probability` flag marks percentage-valued factors,
/// which are additionally confined to `[0, 100]`.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::FactorBounds;
///
/// let freq = FactorBounds::non_negative();
/// assert_eq!(freq.min, Some(0.0));
/// assert!(!freq.probability);
///
/// let pct = FactorBounds::percentage();
/// assert_eq!(pct.max, Some(100.0));
/// assert!(pct.probability);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FactorBounds {
    /// Minimum admissible value for `p10`, if any.
    pub min: Option<f64>,
    /// Maximum admissible value for `p90`, if any.
    pub max: Option<f64>,
    /// Whether the factor is a percentage-valued probability.
    pub probability: bool,
}

impl FactorBounds {
    /// No bounds at all.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Lower-bounded at zero (frequencies, monetary amounts).
    #[inline]
    pub fn non_negative() -> Self {
        Self {
            min: Some(0.0),
            max: None,
            probability: false,
        }
    }

    /// Percentage-valued probability, confined to `[0, 100]`.
    #[inline]
    pub fn percentage() -> Self {
        Self {
            min: Some(0.0),
            max: Some(100.0),
            probability: true,
        }
    }
}
