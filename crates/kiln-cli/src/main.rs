//! # kiln CLI entry point
//!
//! Parses command-line arguments, loads the optional `kiln.yaml`, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kiln_cli::lint::{run_lint, LintArgs};
use kiln_cli::resolve::{run_resolve, ResolveArgs};
use kiln_cli::stats::{run_stats, StatsArgs};
use kiln_cli::verify::{run_verify, VerifyArgs};
use kiln_cli::KilnConfig;

/// Kiln design-token linter.
///
/// Validates layered design tokens against a component schema and resolves
/// alias chains to concrete values.
#[derive(Parser, Debug)]
#[command(name = "kiln", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./kiln.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint a token document against a component schema.
    Lint(LintArgs),

    /// Resolve a token path to its concrete value.
    Resolve(ResolveArgs),

    /// Lint and print a self-verification report with fixes.
    Verify(VerifyArgs),

    /// Count leaf tokens per layer.
    Stats(StatsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout stays clean for reports and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("kiln CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match KilnConfig::discover(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(
        tokens = %config.tokens.display(),
        schema = %config.schema.display(),
        max_depth = config.max_depth,
        "effective configuration"
    );

    let result = match cli.command {
        Commands::Lint(args) => run_lint(&args, &config),
        Commands::Resolve(args) => run_resolve(&args, &config),
        Commands::Verify(args) => run_verify(&args, &config),
        Commands::Stats(args) => run_stats(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
