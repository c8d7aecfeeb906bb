//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::VampireId;

/// Domain errors represent structural violations of a lineage.
/// Lookups that simply find nothing are `Ok(None)`, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown vampire handle: {0:?}")]
    UnknownVampire(VampireId),

    #[error("vampire not declared: {0}")]
    UnknownName(String),

    #[error("duplicate vampire name: {0}")]
    DuplicateName(String),

    #[error("{child} was already sired by {creator}")]
    AlreadySired { child: String, creator: String },

    #[error("cycle detected: {child} cannot be sired by its own descendant {parent}")]
    CycleDetected { parent: String, child: String },
}

/// Result type for lineage operations.
pub type DomainResult<T> = Result<T, DomainError>;
