//! Vampire lineage trees.
//!
//! Every vampire has at most one creator and any number of offspring. Nodes
//! live in a [`VampireArena`](domain::VampireArena) and refer to each other by
//! [`VampireId`](domain::VampireId); the arena answers seniority, descent and
//! common-ancestor queries.
//!
//! ```
//! use vampires::domain::VampireArena;
//!
//! let mut coven = VampireArena::new();
//! let ansel = coven.add_vampire("Ansel", 1700);
//! let sarah = coven.add_offspring(ansel, "Sarah", 1985)?;
//! let andrew = coven.add_offspring(sarah, "Andrew", 1990)?;
//!
//! assert_eq!(coven.total_descendants(ansel)?, 2);
//! assert_eq!(coven.closest_common_ancestor(sarah, andrew)?, Some(sarah));
//! # Ok::<(), vampires::domain::DomainError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod tree_traits;
pub mod util;

pub use error::{VampireError, VampireResult};
