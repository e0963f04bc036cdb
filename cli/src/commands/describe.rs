//! # ditaot Describe Command
//!
//! File: cli/src/commands/describe.rs
//! Author: Christi Mahu
//!
//! Implements `ditaot describe`: prints the `dita` module's namespace and the
//! signatures of its functions as TOML. Does not need `DITA_HOME`.
//!
use clap::Parser;
use ditaot::{DitaConfig, DitaInvoker, DitaModule, Result};
use std::sync::Arc;

/// Arguments for the `describe` command.
#[derive(Parser, Debug)]
pub struct DescribeArgs {}

/// # Handle Describe Command (`handle_describe`)
///
/// Prints the module description to stdout as TOML.
///
/// ## Errors
///
/// * `DitaError::Describe` - The signatures could not be serialized.
pub async fn handle_describe(_args: DescribeArgs) -> Result<()> {
    let module = DitaModule::new(Arc::new(DitaInvoker::new(DitaConfig::from_env())));
    print!("{}", module.describe()?);
    Ok(())
}
