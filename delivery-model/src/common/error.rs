use thiserror::Error;

use crate::domain::conformance::Violation;

/// Errors raised while building or decoding content fragments.
///
/// Accessors on a finished [`crate::ContentFragment`] never fail; every
/// variant here belongs to the build phase or to a decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required attribute was never set on the draft.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("content fragment id must not be empty")]
    EmptyId,

    #[error("unknown item type: {0}")]
    UnknownItemType(String),

    #[error("unknown content namespace: {0}")]
    UnknownNamespace(String),

    /// The upstream payload could not be read as a fragment record.
    #[error("decode error: {0}")]
    Decode(String),

    /// Strict decoding found invariant violations.
    #[error("content fragment violates {} invariant(s): {}", .0.len(), join_violations(.0))]
    NonConformant(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Decode(e.to_string())
    }
}
