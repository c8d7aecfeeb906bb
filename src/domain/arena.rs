use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::Vampire;
use crate::domain::error::{DomainError, DomainResult};

/// Handle of a vampire inside a [`VampireArena`].
pub type VampireId = Index;

/// Lineage node in the arena-based hierarchy.
#[derive(Debug)]
pub struct VampireNode {
    /// Name and conversion year
    pub data: Vampire,
    /// Index of the creator in the arena, None for originals
    pub creator: Option<VampireId>,
    /// Indices of sired vampires, in siring order
    pub offspring: Vec<VampireId>,
}

/// Arena-based lineage forest.
///
/// The arena owns every node; creators and offspring refer to each other by
/// generational index, so the back-link to the creator never owns anything.
/// Several unrelated lineages may live in the same arena.
#[derive(Debug)]
pub struct VampireArena {
    arena: Arena<VampireNode>,
    /// Insertion order, used to list originals deterministically
    order: Vec<VampireId>,
}

impl Default for VampireArena {
    fn default() -> Self {
        Self::new()
    }
}

impl VampireArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            order: Vec::new(),
        }
    }

    /// Creates an unlinked vampire: no creator, no offspring.
    #[instrument(level = "trace", skip(self, name))]
    pub fn add_vampire(&mut self, name: impl Into<String>, year_converted: i32) -> VampireId {
        let data = Vampire::new(name, year_converted);
        let idx = self.arena.insert(VampireNode {
            data,
            creator: None,
            offspring: Vec::new(),
        });
        self.order.push(idx);
        idx
    }

    /// Creates a vampire and links it under `parent` in one step.
    #[instrument(level = "trace", skip(self, name))]
    pub fn add_offspring(
        &mut self,
        parent: VampireId,
        name: impl Into<String>,
        year_converted: i32,
    ) -> DomainResult<VampireId> {
        self.node(parent)?;
        let child = self.add_vampire(name, year_converted);
        self.link(parent, child)?;
        Ok(child)
    }

    /// Makes `parent` the creator of `child` and appends `child` to its offspring.
    ///
    /// Rejects unknown handles, a child that already has a creator, and any
    /// link that would make a vampire its own ancestor. The arena is unchanged
    /// on error.
    #[instrument(level = "debug", skip(self))]
    pub fn link(&mut self, parent: VampireId, child: VampireId) -> DomainResult<()> {
        let parent_name = self.node(parent)?.data.name.clone();
        let child_node = self.node(child)?;

        if let Some(creator) = child_node.creator {
            return Err(DomainError::AlreadySired {
                child: child_node.data.name.clone(),
                creator: self.node(creator)?.data.name.clone(),
            });
        }
        // A creator-less vampire without offspring cannot be anyone's ancestor
        let may_be_ancestor = !child_node.offspring.is_empty();
        if parent == child || (may_be_ancestor && self.ancestors(parent).any(|a| a == child)) {
            return Err(DomainError::CycleDetected {
                parent: parent_name,
                child: child_node.data.name.clone(),
            });
        }

        debug!("{} sired {}", parent_name, child_node.data.name);
        if let Some(node) = self.arena.get_mut(parent) {
            node.offspring.push(child);
        }
        if let Some(node) = self.arena.get_mut(child) {
            node.creator = Some(parent);
        }
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: VampireId) -> Option<&VampireNode> {
        self.arena.get(idx)
    }

    /// Like [`get`](Self::get), but an unknown handle is an error.
    pub fn node(&self, idx: VampireId) -> DomainResult<&VampireNode> {
        self.arena.get(idx).ok_or(DomainError::UnknownVampire(idx))
    }

    pub fn vampire(&self, idx: VampireId) -> DomainResult<&Vampire> {
        Ok(&self.node(idx)?.data)
    }

    pub fn creator(&self, idx: VampireId) -> DomainResult<Option<VampireId>> {
        Ok(self.node(idx)?.creator)
    }

    pub fn offspring(&self, idx: VampireId) -> DomainResult<&[VampireId]> {
        Ok(&self.node(idx)?.offspring)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Vampires without a creator, in insertion order.
    pub fn originals(&self) -> impl Iterator<Item = VampireId> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|&idx| matches!(self.get(idx), Some(node) if node.creator.is_none()))
    }

    /// Creator chain of `idx`, nearest first, excluding `idx` itself.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors(&self, idx: VampireId) -> Ancestors<'_> {
        Ancestors::new(self, idx)
    }

    /// Pre-order walk of the subtree below `idx`, excluding `idx` itself.
    #[instrument(level = "trace", skip(self))]
    pub fn descendants(&self, idx: VampireId) -> Descendants<'_> {
        Descendants::new(self, idx)
    }
}

pub struct Ancestors<'a> {
    arena: &'a VampireArena,
    current: Option<VampireId>,
}

impl<'a> Ancestors<'a> {
    fn new(arena: &'a VampireArena, start: VampireId) -> Self {
        let current = arena.get(start).and_then(|node| node.creator);
        Self { arena, current }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = VampireId;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        self.current = self.arena.get(idx).and_then(|node| node.creator);
        Some(idx)
    }
}

pub struct Descendants<'a> {
    arena: &'a VampireArena,
    stack: Vec<VampireId>,
}

impl<'a> Descendants<'a> {
    fn new(arena: &'a VampireArena, start: VampireId) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = arena.get(start) {
            stack.extend(node.offspring.iter().rev());
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = VampireId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if let Some(node) = self.arena.get(current) {
            // Push offspring in reverse order for left-to-right traversal
            self.stack.extend(node.offspring.iter().rev());
        }
        Some(current)
    }
}
