//! lossquant CLI - command line operations for supply-risk quantification.
//!
//! This is the operational entry point for the lossquant library. It stands
//! in for the external persistence/API collaborators: engagements are read
//! from JSON files and reports are written to stdout.
//!
//! # Commands
//!
//! - `lossquant run --engagement <file>` - Run a paired
//!   unmitigated/mitigated quantification study
//! - `lossquant check` - Check settings and report engine defaults

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod input;
mod settings;

pub use error::{CliError, Result};

/// lossquant supply-risk quantification CLI
#[derive(Parser)]
#[command(name = "lossquant")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file path
    #[arg(short, long, global = true, default_value = "lossquant.toml")]
    settings: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a paired unmitigated/mitigated quantification study
    Run {
        /// Path to the engagement JSON file
        #[arg(short, long)]
        engagement: String,

        /// Number of Monte Carlo trials (overrides settings)
        #[arg(short, long)]
        trials: Option<usize>,

        /// Seed for reproducibility (overrides settings)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check settings and report engine defaults
    Check,
}

fn main() -> anyhow::Result<()> {
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
        Commands::Run {
            engagement,
            trials,
            seed,
            format,
        } => commands::run::run(&cli.settings, &engagement, trials, seed, &format)
            .with_context(|| format!("quantification study failed for '{}'", engagement)),
        Commands::Check => {
            commands::check::run(&cli.settings).context("configuration check failed")
        }
    }
}
