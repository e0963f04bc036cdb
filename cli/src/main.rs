//! # ditaot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ditaot CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Run DITA-OT and print its error lines
//! DITA_HOME=/opt/dita-ot ditaot run -- --input=guide.ditamap --format=html5
//!
//! # Same, logging captured stdout as well
//! ditaot -vv run -- --input=guide.ditamap --format=html5
//!
//! # Show the exported function signatures
//! ditaot describe
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "ditaot",
    about = "Runs the DITA Open Toolkit and reports its error lines",
    long_about = "Runs $DITA_HOME/bin/dita with the given parameters and prints each line\n\
                  the toolkit wrote to standard error.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    Describe(commands::describe::DescribeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args).await,
        Commands::Describe(args) => commands::describe::handle_describe(args).await,
    };

    if let Err(e) = command_result {
        tracing::debug!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
