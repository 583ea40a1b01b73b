//! CLI error type.

use thiserror::Error;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An input file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// Offending path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An input file is not valid JSON for the expected type.
    #[error("Cannot parse {path}: {source}")]
    Parse {
        /// Offending path.
        path: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// The engine rejected the inputs or configuration.
    #[error(transparent)]
    Engine(#[from] risk_engine::EngineError),

    /// The simulation configuration is invalid.
    #[error(transparent)]
    Config(#[from] risk_engine::config::ConfigError),

    /// Benchmark data could not be loaded.
    #[error(transparent)]
    Benchmark(#[from] adapter_benchmarks::BenchmarkError),

    /// A command-line argument is invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
