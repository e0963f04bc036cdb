//! # Host Functions (`dita::function`)
//!
//! File: cli/src/dita/function.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The contract between this crate and a host query engine: a function has a
//! signature and maps a sequence of strings to a sequence of strings. The host
//! converts its own value types to and from `String` on its side.
//!
//! `RunDitaOt` is the only function exported today. It hands its arguments to
//! `DitaInvoker` and flattens the outcome:
//!
//! | Situation                   | Host sees                     |
//! |-----------------------------|-------------------------------|
//! | `DITA_HOME` not configured  | `Err` (evaluation aborts)     |
//! | launcher could not start    | one string, the error message |
//! | launcher ran                | its stderr lines (maybe none) |
//!
use crate::core::error::Result;
use crate::dita::invoker::DitaInvoker;
use crate::dita::signature::{
    Cardinality, FunctionSignature, ParameterType, QName, ReturnType, SequenceType,
};
use crate::dita::{NAMESPACE_URI, PREFIX};
use std::sync::Arc;

/// A function callable from the host engine.
pub trait HostFunction: Send + Sync {
    fn signature(&self) -> &FunctionSignature;

    /// Evaluates the function. `Err` aborts the host's evaluation.
    fn eval(&self, args: &[String]) -> Result<Vec<String>>;
}

/// `dita:run-dita-ot($parameters as xs:string*) as xs:string*`
pub struct RunDitaOt {
    signature: FunctionSignature,
    invoker: Arc<DitaInvoker>,
}

impl RunDitaOt {
    pub const LOCAL_NAME: &'static str = "run-dita-ot";

    pub fn new(invoker: Arc<DitaInvoker>) -> Self {
        Self {
            signature: Self::describe(),
            invoker,
        }
    }

    /// The registered signature of `run-dita-ot`.
    pub fn describe() -> FunctionSignature {
        FunctionSignature {
            name: QName::new(Self::LOCAL_NAME, NAMESPACE_URI, PREFIX),
            description: "A function to run DITA OT processing.".to_string(),
            parameters: vec![ParameterType {
                name: "parameters".to_string(),
                sequence_type: SequenceType::strings(Cardinality::ZeroOrMore),
                description: "The parameters in format 'ant-parameter-name=value'. \
                    The documentation is available here: \
                    https://www.dita-ot.org/3.6/parameters/parameters_intro.html"
                    .to_string(),
            }],
            returns: ReturnType {
                sequence_type: SequenceType::strings(Cardinality::ZeroOrMore),
                description: "DITA-OT error messages".to_string(),
            },
        }
    }
}

impl HostFunction for RunDitaOt {
    fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    fn eval(&self, args: &[String]) -> Result<Vec<String>> {
        Ok(self.invoker.invoke(args)?.into_sequence())
    }
}
