//! Domain layer: lineage entities, the arena and its queries
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod lineage;

pub use arena::{Ancestors, Descendants, VampireArena, VampireId, VampireNode};
pub use builder::LineageBuilder;
pub use entities::*;
pub use error::{DomainError, DomainResult};
