//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared helpers for
//! JSON file loading and output live here.

use serde::de::DeserializeOwned;
use serde::Serialize;

use risk_engine::config::SimulationConfig;

use crate::{CliError, Result};

pub mod aggregate;
pub mod benchmark;
pub mod calculate;
pub mod demo;
pub mod metrics;
pub mod sensitivity;

/// Loads and decodes a JSON input file.
pub fn load_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::InvalidArgument(format!("cannot serialise output: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Builds the simulation configuration from command-line arguments.
pub fn build_config(simulations: usize, seed: Option<u64>) -> Result<SimulationConfig> {
    Ok(SimulationConfig::builder()
        .n_simulations(simulations)
        .maybe_seed(seed)
        .build()?)
}
