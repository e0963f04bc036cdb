//! # ditaot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout ditaot. Only conditions
//! that must stop the caller are errors here. A DITA-OT process that fails to
//! start is *not* one of them: the invoker reports that as a result value
//! (see `dita::invoker::InvocationOutcome`).
//!
//! ## Architecture
//!
//! - `DitaError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! let installation = config.installation()?; // DitaError::MissingHome when unset
//!
//! match module.call("run-dita-ot", &args) {
//!     Ok(lines) => lines.iter().for_each(|l| println!("{l}")),
//!     Err(e) if e.downcast_ref::<DitaError>().is_some_and(DitaError::is_configuration) => {
//!         // Integration unusable; abort evaluation.
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for ditaot.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DitaError {
    /// The toolkit installation directory is not configured.
    #[error("{var} environmental variable is not found")]
    MissingHome { var: String },

    #[error("Function '{name}' is not exported by this module.")]
    UnknownFunction { name: String },

    #[error("Failed to describe function signatures: {0}")]
    Describe(String),
}

impl DitaError {
    /// True for errors that mean the integration cannot be used at all.
    pub fn is_configuration(&self) -> bool {
        matches!(self, DitaError::MissingHome { .. })
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let missing = DitaError::MissingHome {
            var: "DITA_HOME".into(),
        };
        assert_eq!(
            missing.to_string(),
            "DITA_HOME environmental variable is not found"
        );

        let unknown = DitaError::UnknownFunction {
            name: "dita:nope".into(),
        };
        assert_eq!(
            unknown.to_string(),
            "Function 'dita:nope' is not exported by this module."
        );
    }

    #[test]
    fn test_is_configuration() {
        assert!(DitaError::MissingHome {
            var: "DITA_HOME".into()
        }
        .is_configuration());
        assert!(!DitaError::UnknownFunction { name: "x".into() }.is_configuration());
    }
}
