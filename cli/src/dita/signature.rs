//! # Function Signatures (`dita::signature`)
//!
//! File: cli/src/dita/signature.rs
//! Author: Christi Mahu
//!
//! Describes functions exported to the host query engine: qualified name,
//! documentation, parameter and return sequence types. Signatures serialize
//! with `serde`, which is how `ditaot describe` renders them as TOML.
//!
use serde::{Serialize, Serializer};
use std::fmt;

/// Namespace-qualified function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QName {
    pub local_name: String,
    pub namespace_uri: String,
    pub prefix: String,
}

impl QName {
    pub fn new(local_name: &str, namespace_uri: &str, prefix: &str) -> Self {
        Self {
            local_name: local_name.to_string(),
            namespace_uri: namespace_uri.to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// Accepts `local`, `prefix:local` or `Q{uri}local`.
    pub fn matches(&self, name: &str) -> bool {
        if name == self.local_name {
            return true;
        }
        if let Some(local) = name
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
        {
            return local == self.local_name;
        }
        name.strip_prefix("Q{")
            .and_then(|rest| rest.split_once('}'))
            .is_some_and(|(uri, local)| uri == self.namespace_uri && local == self.local_name)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local_name)
    }
}

impl Serialize for QName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Occurrence indicator of a sequence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinality {
    #[serde(rename = "1")]
    ExactlyOne,
    #[serde(rename = "?")]
    ZeroOrOne,
    #[serde(rename = "*")]
    ZeroOrMore,
    #[serde(rename = "+")]
    OneOrMore,
}

impl Cardinality {
    pub fn indicator(self) -> &'static str {
        match self {
            Cardinality::ExactlyOne => "",
            Cardinality::ZeroOrOne => "?",
            Cardinality::ZeroOrMore => "*",
            Cardinality::OneOrMore => "+",
        }
    }
}

/// Item type plus occurrence, e.g. `xs:string*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceType {
    pub item_type: String,
    pub cardinality: Cardinality,
}

impl SequenceType {
    pub fn strings(cardinality: Cardinality) -> Self {
        Self {
            item_type: "xs:string".to_string(),
            cardinality,
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.item_type, self.cardinality.indicator())
    }
}

/// A documented function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterType {
    pub name: String,
    #[serde(flatten)]
    pub sequence_type: SequenceType,
    pub description: String,
}

/// A documented return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnType {
    #[serde(flatten)]
    pub sequence_type: SequenceType,
    pub description: String,
}

/// Everything the host needs to register and document a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: QName,
    pub description: String,
    pub parameters: Vec<ParameterType>,
    pub returns: ReturnType,
}

impl FunctionSignature {
    /// Arity-annotated display form, e.g. `dita:run-dita-ot($parameters as xs:string*) as xs:string*`.
    pub fn prototype(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("${} as {}", p.name, p.sequence_type))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}) as {}", self.name, params, self.returns.sequence_type)
    }
}
