//! # DITA-OT Invoker (`dita::invoker`)
//!
//! File: cli/src/dita/invoker.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs the DITA Open Toolkit launcher once per call and turns its standard
//! error stream into a list of strings.
//!
//! ## Architecture
//!
//! Each call to `DitaInvoker::invoke` goes through these steps:
//!
//! 1. Check the configuration. Without `DITA_HOME` the call fails with
//!    `DitaError::MissingHome` and nothing is spawned.
//! 2. Build the argument vector `[<home>/bin/dita, args...]`. Arguments are
//!    passed verbatim, without quoting, and no shell is used.
//! 3. Run the launcher with `<home>` as working directory and block until it exits.
//! 4. Log stdout at debug level and discard it.
//! 5. Split stderr into lines and return them (`InvocationOutcome::Reported`).
//!
//! If the launcher cannot be started, the I/O error's message is returned as
//! `InvocationOutcome::SpawnFailed` instead of an `Err`. The caller keeps
//! going and inspects the text.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let invoker = DitaInvoker::new(DitaConfig::from_env());
//! let args = vec!["--input=guide.ditamap".to_string(), "--format=html5".to_string()];
//! for line in invoker.invoke(&args)?.into_sequence() {
//!     eprintln!("{line}");
//! }
//! ```
//!
use crate::common::process::{split_lines, ProcessSpawner, SpawnRequest, SystemSpawner};
use crate::core::config::{DitaConfig, Installation};
use crate::core::error::Result;
use anyhow::Context;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Result of one invocation that passed configuration checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The launcher ran. Holds its stderr lines in order (possibly none).
    Reported(Vec<String>),
    /// The launcher could not be run. Holds the error message.
    SpawnFailed(String),
}

impl InvocationOutcome {
    /// Flattens the outcome into the host's string sequence.
    pub fn into_sequence(self) -> Vec<String> {
        match self {
            InvocationOutcome::Reported(lines) => lines,
            InvocationOutcome::SpawnFailed(message) => vec![message],
        }
    }

    /// True when the launcher ran and wrote nothing to stderr.
    pub fn is_clean(&self) -> bool {
        matches!(self, InvocationOutcome::Reported(lines) if lines.is_empty())
    }
}

/// Runs the DITA-OT launcher for a fixed configuration.
pub struct DitaInvoker {
    config: DitaConfig,
    spawner: Box<dyn ProcessSpawner>,
}

impl DitaInvoker {
    /// Creates an invoker that spawns real processes.
    pub fn new(config: DitaConfig) -> Self {
        Self::with_spawner(config, SystemSpawner)
    }

    /// Creates an invoker with a custom spawner.
    pub fn with_spawner(config: DitaConfig, spawner: impl ProcessSpawner + 'static) -> Self {
        Self {
            config,
            spawner: Box::new(spawner),
        }
    }

    pub fn config(&self) -> &DitaConfig {
        &self.config
    }

    /// The argument vector `invoke` would pass to the OS for `args`.
    pub fn command_line(&self, args: &[String]) -> Result<Vec<String>> {
        Ok(self.request(args)?.command_line())
    }

    /// # Invoke DITA-OT (`invoke`)
    ///
    /// Runs the launcher with `args` and waits for it to exit.
    ///
    /// ## Arguments
    ///
    /// * `args` - Launcher parameters, passed in order as separate arguments.
    ///
    /// ## Returns
    ///
    /// * `InvocationOutcome::Reported` - The launcher ran; holds its stderr lines.
    /// * `InvocationOutcome::SpawnFailed` - The launcher could not be run; holds
    ///   the `io::Error` message. The launcher path and working directory are
    ///   logged alongside it.
    ///
    /// ## Errors
    ///
    /// * `DitaError::MissingHome` - `DITA_HOME` is not configured. Nothing is spawned.
    pub fn invoke(&self, args: &[String]) -> Result<InvocationOutcome> {
        let request = self.request(args)?;

        info!("Running DITA OT with parameters: {:?}", args);
        match self.spawner.run(&request) {
            Ok(output) => {
                debug!("DITA OT output:\n{}", output.stdout);
                let errors = split_lines(&output.stderr);
                for line in &errors {
                    error!("{}", line);
                }
                info!(
                    "Completed DITA OT processing (exit status: {:?}, {} error line(s))",
                    output.status,
                    errors.len()
                );
                Ok(InvocationOutcome::Reported(errors))
            }
            Err(e) => {
                error!(
                    executable = %request.program.display(),
                    working_dir = %request.working_dir.display(),
                    "DITA OT process failed: {}",
                    e
                );
                Ok(InvocationOutcome::SpawnFailed(e.to_string()))
            }
        }
    }

    /// # Invoke On The Blocking Pool (`invoke_async`)
    ///
    /// Runs `invoke` via `tokio::task::spawn_blocking`, so async callers do not
    /// stall a runtime worker while the launcher runs.
    ///
    /// ## Errors
    ///
    /// * Whatever `invoke` returns, plus a failure if the blocking task panicked.
    pub async fn invoke_async(self: Arc<Self>, args: Vec<String>) -> Result<InvocationOutcome> {
        tokio::task::spawn_blocking(move || self.invoke(&args))
            .await
            .context("DITA OT invocation task did not complete")?
    }

    fn request(&self, args: &[String]) -> Result<SpawnRequest> {
        let Installation { home, executable } = match self.config.installation() {
            Ok(installation) => installation,
            Err(e) => {
                error!("{}", e);
                return Err(e);
            }
        };
        Ok(SpawnRequest {
            program: executable.clone(),
            args: args.to_vec(),
            working_dir: home.clone(),
        })
    }
}
