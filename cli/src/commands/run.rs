//! # ditaot Run Command
//!
//! File: cli/src/commands/run.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `ditaot run`, which calls `dita:run-dita-ot` once and prints the
//! returned lines to stdout, one per line.
//!
//! ## Usage
//!
//! ```bash
//! # Parameters after `--` go to the launcher unchanged
//! DITA_HOME=/opt/dita-ot ditaot run -- --input=guide.ditamap --format=html5
//!
//! # Explicit installation directory
//! ditaot run --dita-home ~/dita-ot-3.6 -- -i guide.ditamap -f pdf
//! ```
//!
//! Exit status is 0 whenever the launcher was attempted, even if it reported
//! errors or could not be started; the printed lines carry that information.
//! A missing `DITA_HOME` is an error (exit status 1).
//!
use clap::Parser;
use ditaot::core::config::DITA_HOME;
use ditaot::{DitaConfig, DitaInvoker, InvocationOutcome, Result};
use std::ffi::OsString;
use std::sync::Arc;
use tracing::{info, warn};

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// DITA Open Toolkit installation directory. Taken as given, even when
    /// empty or not UTF-8.
    #[arg(long, env = DITA_HOME, value_name = "DIR")]
    dita_home: Option<OsString>,

    /// Parameters passed verbatim to the DITA-OT launcher.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "PARAM")]
    params: Vec<String>,
}

/// # Handle Run Command (`handle_run`)
///
/// Resolves the installation, runs DITA-OT once on the blocking pool and
/// prints every returned line to stdout.
///
/// ## Arguments
///
/// * `args` - Parsed `RunArgs`. `--dita-home` falls back to `DITA_HOME`.
///
/// ## Returns
///
/// * `Result<()>` - `Ok` when the launcher was attempted, whether it reported
///   errors or failed to start.
///
/// ## Errors
///
/// * `DitaError::MissingHome` - Neither `--dita-home` nor `DITA_HOME` is set.
pub async fn handle_run(args: RunArgs) -> Result<()> {
    let config = DitaConfig::from_home(args.dita_home);
    let invoker = Arc::new(DitaInvoker::new(config));

    let outcome = invoker.invoke_async(args.params).await?;
    match &outcome {
        InvocationOutcome::Reported(lines) if lines.is_empty() => {
            info!("DITA OT reported no errors.")
        }
        InvocationOutcome::Reported(lines) => {
            warn!("DITA OT reported {} error line(s).", lines.len())
        }
        InvocationOutcome::SpawnFailed(_) => warn!("DITA OT could not be started."),
    }

    for line in outcome.into_sequence() {
        println!("{}", line);
    }
    Ok(())
}
