//! Benchmark command implementation
//!
//! Looks up LEF or LM industry benchmarks from the bundled reference data
//! or an alternative JSON document.

use tracing::info;

use adapter_benchmarks::BenchmarkLibrary;

use super::print_json;
use crate::{CliError, Result};

/// Run the benchmark command
pub fn run(
    category: &str,
    industry: Option<&str>,
    revenue: Option<&str>,
    data_path: Option<&str>,
) -> Result<()> {
    let library = match data_path {
        Some(path) => BenchmarkLibrary::from_path(path)?,
        None => BenchmarkLibrary::bundled(),
    };

    info!(
        "Looking up {} benchmarks from {}",
        category,
        library.metadata().source
    );

    let result = match category {
        "lef" => library.lef_benchmark(industry, revenue),
        "lm" => library.lm_benchmark(industry, revenue),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown category: {}. Supported: lef, lm",
                other
            )));
        }
    };

    print_json(&result)
}
