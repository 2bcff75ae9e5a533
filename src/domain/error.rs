//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent contract violations on the value tree.
/// These are independent of how the tree was loaded.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("malformed data: {0}")]
    MalformedData(String),

    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    #[error("requested child {key:?} on a leaf")]
    ChildOnLeaf { key: String },

    #[error("requested scalar value on a node")]
    ValueOnNode,

    #[error("cannot set a title on a leaf")]
    TitleOnLeaf,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
