//! # adapter_benchmarks: Industry Benchmark Library
//!
//! Read-only reference data for calibrating FAIR estimates: loss event
//! frequency (LEF) and loss magnitude (LM) baselines keyed by industry and
//! revenue tier, loaded once from a static JSON document and never mutated.
//!
//! A query always returns the overall baseline; industry and revenue
//! lookups return matched entries or an explicit no-data marker, so the
//! caller can distinguish "not requested" from "requested but unknown".
//!
//! ## Example
//!
//! ```rust
//! use adapter_benchmarks::{BenchmarkLibrary, IndustryMatch};
//!
//! let library = BenchmarkLibrary::bundled();
//! let result = library.lef_benchmark(Some("Healthcare"), Some("$1B to $10B"));
//!
//! assert!(result.overall_baseline.probability.is_some());
//! assert!(matches!(result.industry, Some(IndustryMatch::Found(_))));
//! assert!(result.revenue.is_some());
//!
//! let miss = library.lef_benchmark(Some("Shipping"), None);
//! assert!(matches!(miss.industry, Some(IndustryMatch::NoData { .. })));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bundled reference dataset, shipped with the crate.
const BUNDLED_JSON: &str = include_str!("../data/iris_benchmarks.json");

/// Errors from loading a benchmark document.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The document could not be read.
    #[error("cannot read benchmark data: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid benchmark JSON.
    #[error("cannot parse benchmark data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Provenance of the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Name of the study the data comes from.
    pub source: String,
    /// Publication year.
    pub year: u32,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

/// One benchmark entry.
///
/// LEF entries carry an annual `probability`; LM entries carry percentile
/// loss amounts. Fields not applicable to the entry's kind are absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Annual loss-event probability (LEF entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// 10th percentile loss amount (LM entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p10: Option<f64>,
    /// Median loss amount (LM entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p50: Option<f64>,
    /// 90th percentile loss amount (LM entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p90: Option<f64>,
    /// Confidence grade for the entry ("high", "medium", "low").
    pub confidence: String,
    /// Human-readable description.
    pub description: String,
}

/// Outcome of an industry lookup.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IndustryMatch {
    /// The industry key matched an entry.
    Found(BenchmarkEntry),
    /// The industry key is not in the dataset.
    NoData {
        /// The key that was requested.
        industry: String,
        /// Source of the dataset consulted.
        source: String,
    },
}

/// Result of one benchmark query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkResult {
    /// The overall baseline, always present.
    pub overall_baseline: BenchmarkEntry,
    /// Industry lookup outcome, when an industry was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<IndustryMatch>,
    /// Revenue tier entry, when requested and present in the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<BenchmarkEntry>,
}

#[derive(Clone, Debug, Deserialize)]
struct BenchmarkDocument {
    metadata: Metadata,
    lef_overall_baseline: BenchmarkEntry,
    lef_by_industry: BTreeMap<String, BenchmarkEntry>,
    lef_by_revenue: BTreeMap<String, BenchmarkEntry>,
    lm_overall_baseline: BenchmarkEntry,
    lm_by_industry: BTreeMap<String, BenchmarkEntry>,
    lm_by_revenue: BTreeMap<String, BenchmarkEntry>,
}

/// The loaded benchmark library.
#[derive(Clone, Debug)]
pub struct BenchmarkLibrary {
    doc: BenchmarkDocument,
}

impl BenchmarkLibrary {
    /// Loads the dataset bundled with the crate.
    pub fn bundled() -> Self {
        // The bundled document is validated by this crate's tests
        Self::from_json_str(BUNDLED_JSON).expect("bundled benchmark data is valid")
    }

    /// Parses a benchmark document from a JSON string.
    ///
    /// # Errors
    ///
    /// [`BenchmarkError::Parse`] if the document does not match the schema.
    pub fn from_json_str(json: &str) -> Result<Self, BenchmarkError> {
        let doc: BenchmarkDocument = serde_json::from_str(json)?;
        Ok(Self { doc })
    }

    /// Loads a benchmark document from a file.
    ///
    /// # Errors
    ///
    /// [`BenchmarkError::Io`] or [`BenchmarkError::Parse`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BenchmarkError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Dataset provenance.
    pub fn metadata(&self) -> &Metadata {
        &self.doc.metadata
    }

    /// Queries LEF benchmarks by optional industry and revenue tier.
    pub fn lef_benchmark(
        &self,
        industry: Option<&str>,
        revenue: Option<&str>,
    ) -> BenchmarkResult {
        self.query(
            &self.doc.lef_overall_baseline,
            &self.doc.lef_by_industry,
            &self.doc.lef_by_revenue,
            industry,
            revenue,
        )
    }

    /// Queries LM benchmarks by optional industry and revenue tier.
    pub fn lm_benchmark(&self, industry: Option<&str>, revenue: Option<&str>) -> BenchmarkResult {
        self.query(
            &self.doc.lm_overall_baseline,
            &self.doc.lm_by_industry,
            &self.doc.lm_by_revenue,
            industry,
            revenue,
        )
    }

    fn query(
        &self,
        baseline: &BenchmarkEntry,
        by_industry: &BTreeMap<String, BenchmarkEntry>,
        by_revenue: &BTreeMap<String, BenchmarkEntry>,
        industry: Option<&str>,
        revenue: Option<&str>,
    ) -> BenchmarkResult {
        let industry = industry.map(|key| match by_industry.get(key) {
            Some(entry) => IndustryMatch::Found(entry.clone()),
            None => IndustryMatch::NoData {
                industry: key.to_string(),
                source: self.doc.metadata.source.clone(),
            },
        });

        let revenue = revenue.and_then(|key| by_revenue.get(key).cloned());

        BenchmarkResult {
            overall_baseline: baseline.clone(),
            industry,
            revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_parses() {
        let library = BenchmarkLibrary::bundled();
        assert_eq!(library.metadata().source, "IRIS 2025");
    }

    #[test]
    fn test_baseline_always_present() {
        let library = BenchmarkLibrary::bundled();
        let result = library.lef_benchmark(None, None);
        assert!(result.overall_baseline.probability.is_some());
        assert!(result.industry.is_none());
        assert!(result.revenue.is_none());
    }

    #[test]
    fn test_industry_hit() {
        let library = BenchmarkLibrary::bundled();
        let result = library.lef_benchmark(Some("Healthcare"), None);
        match result.industry {
            Some(IndustryMatch::Found(entry)) => {
                assert!(entry.probability.unwrap() > 0.0);
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_industry_miss_is_marked() {
        let library = BenchmarkLibrary::bundled();
        let result = library.lm_benchmark(Some("Shipping"), None);
        match result.industry {
            Some(IndustryMatch::NoData { industry, source }) => {
                assert_eq!(industry, "Shipping");
                assert_eq!(source, "IRIS 2025");
            }
            other => panic!("expected no-data marker, got {:?}", other),
        }
    }

    #[test]
    fn test_revenue_lookup() {
        let library = BenchmarkLibrary::bundled();
        let result = library.lm_benchmark(None, Some("$1B to $10B"));
        let entry = result.revenue.unwrap();
        assert!(entry.p50.unwrap() > entry.p10.unwrap());
        assert!(entry.p90.unwrap() > entry.p50.unwrap());

        // Unknown tier is simply absent
        let result = library.lm_benchmark(None, Some("$0 to $1"));
        assert!(result.revenue.is_none());
    }

    #[test]
    fn test_lm_entries_carry_percentiles_not_probabilities() {
        let library = BenchmarkLibrary::bundled();
        let result = library.lm_benchmark(Some("Retail"), None);
        match result.industry.unwrap() {
            IndustryMatch::Found(entry) => {
                assert!(entry.probability.is_none());
                assert!(entry.p50.is_some());
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_document_round_trip() {
        let json = r#"{
            "metadata": { "source": "Test", "year": 2024 },
            "lef_overall_baseline": { "probability": 0.1, "confidence": "low", "description": "x" },
            "lef_by_industry": {},
            "lef_by_revenue": {},
            "lm_overall_baseline": { "p50": 100.0, "confidence": "low", "description": "x" },
            "lm_by_industry": {},
            "lm_by_revenue": {}
        }"#;
        let library = BenchmarkLibrary::from_json_str(json).unwrap();
        assert_eq!(library.metadata().year, 2024);
        let result = library.lef_benchmark(Some("Anything"), None);
        assert!(matches!(
            result.industry,
            Some(IndustryMatch::NoData { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            BenchmarkLibrary::from_json_str("{"),
            Err(BenchmarkError::Parse(_))
        ));
    }
}
