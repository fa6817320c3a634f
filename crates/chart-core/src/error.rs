// File: crates/chart-core/src/error.rs
// Summary: Error type for path parsing, resolution and field assignment.

use thiserror::Error;

use crate::schema::NodeKind;

pub type Result<T> = std::result::Result<T, ChartError>;

/// Reasons a path or a field assignment cannot be carried out.
///
/// The permissive builder API turns every one of these into a no-op; the
/// `try_*` variants surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("malformed path segment '{0}'")]
    MalformedSegment(String),

    #[error("{kind} has no field '{field}'")]
    UnknownField { kind: NodeKind, field: String },

    #[error("field '{field}' of {kind} is not a child node")]
    NotANode { kind: NodeKind, field: String },

    #[error("field '{field}' of {kind} is not an indexed collection")]
    NotIndexed { kind: NodeKind, field: String },

    #[error("field '{field}' of {kind} takes {expected} index(es), got {got}")]
    IndexArity { kind: NodeKind, field: String, expected: usize, got: usize },

    #[error("index {index} on field '{field}' of {kind} is past the largest allowed index")]
    IndexOutOfRange { kind: NodeKind, field: String, index: usize },

    #[error("field '{field}' of {kind} does not hold a value")]
    NotAValue { kind: NodeKind, field: String },

    #[error("field '{field}' of {kind} holds {expected} nodes, got {got}")]
    KindMismatch { kind: NodeKind, field: String, expected: NodeKind, got: NodeKind },
}
