//! Crate-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Top-level error: lineage faults plus configuration loading.
#[derive(Error, Debug)]
pub enum VampireError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for crate-level operations.
pub type VampireResult<T> = Result<T, VampireError>;
