//! Defines the error type shared by the schema model and its collaborators.
//!
//! The algebra functions never fail; every variant here is raised while a
//! relvar is being built, parsed, or loaded.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizationError {
    /// The text does not follow the `{A, B} -> {C}` / `{A} ->-> {B}` grammar.
    #[error("invalid dependency expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    /// A dependency mentions an attribute the relvar's heading does not contain.
    #[error("{attribute} is not contained in relvar's heading (dependency {dependency})")]
    InvalidDependency { attribute: String, dependency: String },

    #[error("attribute names must not be empty")]
    EmptyAttributeName,

    #[error("the {side} of a dependency must contain at least one attribute")]
    EmptyAttributeSet { side: &'static str },

    #[error("malformed relvar document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("could not read relvar document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;

impl NormalizationError {
    pub(crate) fn expression(expression: &str, reason: impl Into<String>) -> Self {
        Self::InvalidExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}
