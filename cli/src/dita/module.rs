//! # DITA Module (`dita::module`)
//!
//! File: cli/src/dita/module.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Groups the exported functions under one namespace so a host can register
//! them in a single step, look them up by name and list their signatures.
//!
//! ```rust,ignore
//! let module = DitaModule::new(Arc::new(DitaInvoker::new(DitaConfig::from_env())));
//! let errors = module.call("dita:run-dita-ot", &args)?;
//! println!("{}", module.describe()?);
//! ```
//!
use crate::core::error::{DitaError, Result};
use crate::dita::function::{HostFunction, RunDitaOt};
use crate::dita::invoker::DitaInvoker;
use crate::dita::signature::FunctionSignature;
use crate::dita::{NAMESPACE_URI, PREFIX};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// The `dita` function module.
pub struct DitaModule {
    functions: Vec<Box<dyn HostFunction>>,
}

/// Serializable view of the module for `describe`.
#[derive(Serialize)]
struct ModuleDescription<'a> {
    namespace_uri: &'a str,
    prefix: &'a str,
    description: &'a str,
    functions: Vec<&'a FunctionSignature>,
}

impl DitaModule {
    pub const DESCRIPTION: &'static str = "A module for DITA Open Toolkit processing";

    /// Builds the module with every function bound to `invoker`.
    pub fn new(invoker: Arc<DitaInvoker>) -> Self {
        Self {
            functions: vec![Box::new(RunDitaOt::new(invoker))],
        }
    }

    pub fn namespace_uri(&self) -> &'static str {
        NAMESPACE_URI
    }

    pub fn prefix(&self) -> &'static str {
        PREFIX
    }

    pub fn signatures(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.functions.iter().map(|f| f.signature())
    }

    /// # Look Up Function (`lookup`)
    ///
    /// Finds an exported function by `local`, `prefix:local` or `Q{uri}local` name.
    ///
    /// ## Errors
    ///
    /// * `DitaError::UnknownFunction` - No exported function has that name.
    pub fn lookup(&self, name: &str) -> Result<&dyn HostFunction> {
        self.functions
            .iter()
            .find(|f| f.signature().name.matches(name))
            .map(|f| f.as_ref())
            .ok_or_else(|| {
                warn!("Lookup of unknown function '{}'", name);
                DitaError::UnknownFunction {
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// # Call Function (`call`)
    ///
    /// Looks up `name` and evaluates it with `args`.
    ///
    /// ## Arguments
    ///
    /// * `name` - Any name form accepted by `lookup`.
    /// * `args` - The host's string arguments, in order.
    ///
    /// ## Returns
    ///
    /// * `Result<Vec<String>>` - The function's string sequence. For
    ///   `run-dita-ot` that is the stderr lines, or one spawn-failure message.
    ///
    /// ## Errors
    ///
    /// * `DitaError::UnknownFunction` - `name` is not exported.
    /// * `DitaError::MissingHome` - `run-dita-ot` was called without `DITA_HOME`.
    pub fn call(&self, name: &str, args: &[String]) -> Result<Vec<String>> {
        let function = self.lookup(name)?;
        debug!("Calling {} with {} argument(s)", function.signature().name, args.len());
        function.eval(args)
    }

    /// Renders the module and its signatures as TOML.
    pub fn describe(&self) -> Result<String> {
        let description = ModuleDescription {
            namespace_uri: NAMESPACE_URI,
            prefix: PREFIX,
            description: Self::DESCRIPTION,
            functions: self.signatures().collect(),
        };
        toml::to_string_pretty(&description)
            .map_err(|e| DitaError::Describe(e.to_string()).into())
    }
}
