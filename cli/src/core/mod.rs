//! # ditaot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by the invoker, the module metadata and the CLI:
//! - `config`: `DITA_HOME` resolution and the derived launcher path
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config::DitaConfig;
//! use crate::core::error::{DitaError, Result};
//! ```
//!
pub mod config;
pub mod error;
