//! # ditaot Configuration
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! ditaot has exactly one configuration input: the `DITA_HOME` environment
//! variable, naming the DITA Open Toolkit installation directory. From it the
//! launcher path is derived:
//!
//! ```text
//! $DITA_HOME/bin/dita        (Unix)
//! $DITA_HOME\bin\dita.bat    (Windows)
//! ```
//!
//! ## Architecture
//!
//! - The environment is read once, by `DitaConfig::from_env()`, and the result is
//!   an immutable value passed to the invoker. Nothing else reads `DITA_HOME`.
//! - A missing variable does not fail construction. It is recorded, and every
//!   call to `DitaConfig::installation()` fails with `DitaError::MissingHome`.
//!   Callers check it per invocation, before spawning anything.
//! - Only an absent variable counts as unset. Any value that is present, even
//!   an empty or blank one, is used as given. A bad directory then shows up
//!   when the launcher fails to start, which the invoker reports as a result.
//! - A leading `~` in a UTF-8 value is expanded to the user's home directory.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let config = DitaConfig::from_env();
//! let installation = config.installation()?;
//! println!("{}", installation.executable.display());
//!
//! // Tests inject a location without touching the process environment.
//! let config = DitaConfig::from_home(Some("/opt/dita-ot-3.6"));
//! ```
//!
use crate::core::error::{DitaError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the environment variable holding the toolkit installation directory.
pub const DITA_HOME: &str = "DITA_HOME";

/// Launcher file name inside `<home>/bin`.
const LAUNCHER: &str = "dita";

/// A resolved toolkit installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    /// Installation root. Also the working directory of every invocation.
    pub home: PathBuf,
    /// Absolute launcher path (`<home>/bin/dita[.bat]`).
    pub executable: PathBuf,
}

impl Installation {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let executable = executable_for(&home);
        Self { home, executable }
    }
}

/// Immutable invoker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DitaConfig {
    installation: Option<Installation>,
}

impl DitaConfig {
    /// Reads `DITA_HOME` from the process environment.
    pub fn from_env() -> Self {
        let config = Self::from_home(std::env::var_os(DITA_HOME));
        debug!("Resolved configuration from environment: {:?}", config);
        config
    }

    /// # Build From Explicit Home (`from_home`)
    ///
    /// Builds a configuration from an explicit `DITA_HOME` value, without
    /// touching the process environment.
    ///
    /// ## Arguments
    ///
    /// * `home` - The installation directory, or `None` when it is not set.
    ///   The value is not trimmed or validated. Non-UTF-8 values are accepted
    ///   and used as raw paths.
    ///
    /// ## Returns
    ///
    /// * `DitaConfig` - Unset for `None`; otherwise an installation rooted at
    ///   `home`, with a leading `~` expanded.
    pub fn from_home<P: Into<PathBuf>>(home: Option<P>) -> Self {
        let installation = home.map(|h| Installation::new(expand_tilde(h.into())));
        Self { installation }
    }

    /// A configuration with no installation; every invocation fails.
    pub fn unset() -> Self {
        Self::default()
    }

    /// # Resolved Installation (`installation`)
    ///
    /// Checked by the invoker on every call, before anything is spawned.
    ///
    /// ## Returns
    ///
    /// * `Result<&Installation>` - The installation root and launcher path.
    ///
    /// ## Errors
    ///
    /// * `DitaError::MissingHome` - `DITA_HOME` was not set.
    pub fn installation(&self) -> Result<&Installation> {
        self.installation.as_ref().ok_or_else(|| {
            DitaError::MissingHome {
                var: DITA_HOME.to_string(),
            }
            .into()
        })
    }

    pub fn is_configured(&self) -> bool {
        self.installation.is_some()
    }
}

/// Expands a leading `~`. Paths that are not UTF-8 are returned unchanged.
fn expand_tilde(home: PathBuf) -> PathBuf {
    match home.to_str() {
        Some(s) if s.starts_with('~') => PathBuf::from(shellexpand::tilde(s).into_owned()),
        _ => home,
    }
}

/// Derives the launcher path for an installation root.
pub fn executable_for(home: &Path) -> PathBuf {
    let file_name = if cfg!(windows) {
        format!("{LAUNCHER}.bat")
    } else {
        LAUNCHER.to_string()
    };
    home.join("bin").join(file_name)
}
