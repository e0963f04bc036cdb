//! # ditaot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs the DITA Open Toolkit (`$DITA_HOME/bin/dita`) with caller-supplied
//! arguments and returns the lines it wrote to standard error. The library is
//! what a host query engine links against. The `ditaot` binary is a thin CLI
//! over the same API.
//!
//! - `core`: configuration (`DITA_HOME`) and error types
//! - `common`: process spawning and output capture
//! - `dita`: the invoker, the `run-dita-ot` function and its module metadata
//!
//! ```rust,ignore
//! use ditaot::{DitaConfig, DitaInvoker, DitaModule};
//! use std::sync::Arc;
//!
//! let invoker = Arc::new(DitaInvoker::new(DitaConfig::from_env()));
//! let module = DitaModule::new(invoker);
//! let errors = module.call("dita:run-dita-ot", &["--format=html5".into()])?;
//! ```
//!
pub mod common;
pub mod core;
pub mod dita;

pub use crate::core::config::DitaConfig;
pub use crate::core::error::{DitaError, Result};
pub use crate::dita::function::HostFunction;
pub use crate::dita::invoker::{DitaInvoker, InvocationOutcome};
pub use crate::dita::module::DitaModule;
