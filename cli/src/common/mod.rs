//! # ditaot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities that are not specific to DITA-OT. At present this is only
//! process execution; the invoker in `dita::invoker` builds on it.
//!

/// Utilities for executing external processes and capturing their output.
pub mod process;
