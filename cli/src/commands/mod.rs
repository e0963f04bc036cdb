//! # ditaot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level commands of the `ditaot` binary. Each module defines a Clap
//! arguments struct and an async `handle_*` function called from `main.rs`.
//!
//! - `run`: invoke DITA-OT and print its error lines
//! - `describe`: print the exported function signatures
//!

/// `ditaot describe`: module and signature listing.
pub mod describe;
/// `ditaot run`: one DITA-OT invocation.
pub mod run;
