//! Lattice CLI - Command Line Operations for Binomial Option Pricing
//!
//! This is the operational entry point for the lattice-rust pricing
//! workspace.
//!
//! # Commands
//!
//! - `lattice price` - Price a single American-style option
//! - `lattice tree` - Export the binomial lattice as JSON
//! - `lattice run` - Run the scheduled fetch-price-persist pipeline
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! orchestrates the adapter (quotes), infra (persistence), and pricer
//! (kernel) layers behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
pub mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use commands::run::RunArgs;
use commands::tree::TreeArgs;

/// Binomial lattice option pricing CLI
#[derive(Parser)]
#[command(name = "lattice")]
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
    /// Price a single American-style option
    Price(PriceArgs),

    /// Export the binomial lattice as JSON
    Tree(TreeArgs),

    /// Run the scheduled pricing pipeline
    Run(RunArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Price(args) => commands::price::execute(&args)?,
        Commands::Tree(args) => commands::tree::execute(&args)?,
        Commands::Run(args) => commands::run::execute(&args).await?,
    }

    Ok(())
}
