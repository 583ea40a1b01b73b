//! Fairlight CLI - Command Line Operations for FAIR Risk Quantification
//!
//! This is the operational entry point for the Fairlight risk engine.
//!
//! # Commands
//!
//! - `fairlight calculate --scenario <file>` - Evaluate a single scenario
//! - `fairlight sensitivity --scenario <file> --factor tef.p50` - Elasticity analysis
//! - `fairlight aggregate --portfolio <file>` - Portfolio aggregation
//! - `fairlight metrics --portfolio <file>` - Linear-expectation portfolio metrics
//! - `fairlight benchmark --category lef` - Industry benchmark lookup
//! - `fairlight demo` - Run the canonical ransomware scenario
//!
//! # Architecture
//!
//! The service layer: loads JSON inputs, invokes the engine crates, and
//! prints JSON results. No calculation logic lives here.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Fairlight FAIR Risk Quantification CLI
#[derive(Parser)]
#[command(name = "fairlight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single FAIR scenario
    Calculate {
        /// Path to a scenario JSON file
        #[arg(short, long)]
        scenario: String,

        /// Number of Monte Carlo draws
        #[arg(short = 'n', long, default_value = "100000")]
        simulations: usize,

        /// Base seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Vary one factor by ±v% and report ALE elasticity
    Sensitivity {
        /// Path to a scenario JSON file
        #[arg(short, long)]
        scenario: String,

        /// Factor to vary, e.g. tef.p50 or productivity.p90
        #[arg(short, long)]
        factor: String,

        /// Variation percentage
        #[arg(long, default_value = "20.0")]
        variation: f64,

        /// Number of Monte Carlo draws
        #[arg(short = 'n', long, default_value = "100000")]
        simulations: usize,

        /// Base seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Aggregate a portfolio of scenarios
    Aggregate {
        /// Path to a portfolio JSON file (array of named scenarios)
        #[arg(short, long)]
        portfolio: String,

        /// Assumed pairwise correlation (0 = independence)
        #[arg(short, long, default_value = "0.0")]
        correlation: f64,

        /// Also report the diversification benefit
        #[arg(long)]
        diversification: bool,

        /// Number of Monte Carlo draws
        #[arg(short = 'n', long, default_value = "100000")]
        simulations: usize,

        /// Base seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Linear-expectation metrics for a portfolio
    Metrics {
        /// Path to a portfolio JSON file
        #[arg(short, long)]
        portfolio: String,

        /// Number of Monte Carlo draws
        #[arg(short = 'n', long, default_value = "100000")]
        simulations: usize,

        /// Base seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Look up LEF or LM industry benchmarks
    Benchmark {
        /// Benchmark category: lef or lm
        #[arg(short, long)]
        category: String,

        /// Industry sector, e.g. "Healthcare"
        #[arg(short, long)]
        industry: Option<String>,

        /// Revenue tier, e.g. "$1B to $10B"
        #[arg(short, long)]
        revenue: Option<String>,

        /// Alternative benchmark JSON file (defaults to the bundled data)
        #[arg(long)]
        data: Option<String>,
    },

    /// Run the canonical ransomware demo scenario
    Demo,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Calculate {
            scenario,
            simulations,
            seed,
        } => commands::calculate::run(&scenario, simulations, seed),
        Commands::Sensitivity {
            scenario,
            factor,
            variation,
            simulations,
            seed,
        } => commands::sensitivity::run(&scenario, &factor, variation, simulations, seed),
        Commands::Aggregate {
            portfolio,
            correlation,
            diversification,
            simulations,
            seed,
        } => commands::aggregate::run(&portfolio, correlation, diversification, simulations, seed),
        Commands::Metrics {
            portfolio,
            simulations,
            seed,
        } => commands::metrics::run(&portfolio, simulations, seed),
        Commands::Benchmark {
            category,
            industry,
            revenue,
            data,
        } => commands::benchmark::run(
            &category,
            industry.as_deref(),
            revenue.as_deref(),
            data.as_deref(),
        ),
        Commands::Demo => commands::demo::run(),
    }
}
