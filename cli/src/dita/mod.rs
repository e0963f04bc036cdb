//! # ditaot DITA Integration (`dita`)
//!
//! File: cli/src/dita/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything specific to the DITA Open Toolkit:
//!
//! - **`invoker`**: runs `$DITA_HOME/bin/dita` and collects its error lines.
//! - **`function`**: the `HostFunction` contract and `run-dita-ot`.
//! - **`module`**: the `dita` namespace grouping exported functions.
//! - **`signature`**: serializable function signatures.
//!

/// Host-facing function contract and `run-dita-ot`.
pub mod function;
/// Launcher invocation and outcome classification.
pub mod invoker;
/// Function registry for the `dita` namespace.
pub mod module;
/// Qualified names and sequence types for exported functions.
pub mod signature;

/// Namespace URI of the exported functions.
pub const NAMESPACE_URI: &str = "http://exist-db.org/xquery/dita";
/// Conventional prefix bound to `NAMESPACE_URI`.
pub const PREFIX: &str = "dita";
