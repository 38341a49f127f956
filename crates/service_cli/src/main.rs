//! premia CLI - Premium Estimates and Price Charts
//!
//! Operational entry point for the premia estimator and chart generator.
//!
//! # Commands
//!
//! - `premia price --spot <S> --strike <K> --volatility <σ> --expiry <T> --option-type call`
//!   - Estimate an option premium and print its breakdown
//! - `premia charts --input <file.json>` - Render price and support/resistance charts
//! - `premia check` - Print the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires `infra_config` into
//! `premia_pricer` and `premia_report`.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// premia: heuristic option premiums and price charts
#[derive(Parser)]
#[command(name = "premia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "premia.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate an option premium
    Price {
        /// Spot price of the underlying
        #[arg(short, long)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Annualised volatility (0.2 = 20%)
        #[arg(short = 'o', long)]
        volatility: f64,

        /// Time to expiry in years
        #[arg(short, long)]
        expiry: f64,

        /// Option type (call or put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Render charts from a JSON file mapping symbol to chart data
    Charts {
        /// Path to chart data file
        #[arg(short, long)]
        input: String,

        /// Render only this symbol
        #[arg(short, long)]
        symbol: Option<String>,

        /// Output directory (defaults to the configured charts_dir)
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Check configuration and font availability
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_filter(&config, cli.verbose)));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config, "Configuration loaded");

    match cli.command {
        Commands::Price {
            spot,
            strike,
            volatility,
            expiry,
            option_type,
            format,
        } => commands::price::run(spot, strike, volatility, expiry, &option_type, &format),
        Commands::Charts {
            input,
            symbol,
            output_dir,
        } => commands::charts::run(&config, &input, symbol.as_deref(), output_dir.as_deref()),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
