//! Seniority, descent and ancestry queries over a [`VampireArena`].
//!
//! All traversals are iterative; deep lineages do not grow the call stack.

use std::collections::HashSet;
use std::iter;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::arena::{VampireArena, VampireId};
use crate::domain::entities::MILLENNIAL_YEAR;
use crate::domain::error::DomainResult;

impl VampireArena {
    /// Number of creator hops between `idx` and its original (0 for an original).
    #[instrument(level = "trace", skip(self))]
    pub fn depth_from_root(&self, idx: VampireId) -> DomainResult<usize> {
        self.node(idx)?;
        Ok(self.ancestors(idx).count())
    }

    /// True if `a` is strictly closer to its original than `b`.
    #[instrument(level = "trace", skip(self))]
    pub fn is_more_senior_than(&self, a: VampireId, b: VampireId) -> DomainResult<bool> {
        Ok(self.depth_from_root(a)? < self.depth_from_root(b)?)
    }

    /// Number of vampires sired directly by `idx`.
    pub fn offspring_count(&self, idx: VampireId) -> DomainResult<usize> {
        Ok(self.node(idx)?.offspring.len())
    }

    /// Pre-order search of the subtree rooted at `root`, `root` included.
    ///
    /// With duplicate names the first vampire in pre-order wins.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_name(&self, root: VampireId, name: &str) -> DomainResult<Option<VampireId>> {
        self.node(root)?;
        Ok(iter::once(root)
            .chain(self.descendants(root))
            .find(|&idx| matches!(self.get(idx), Some(node) if node.data.name == name)))
    }

    /// Size of the subtree below `idx`, excluding `idx`.
    #[instrument(level = "debug", skip(self))]
    pub fn total_descendants(&self, idx: VampireId) -> DomainResult<usize> {
        self.node(idx)?;
        Ok(self.descendants(idx).count())
    }

    /// Descendants of `idx` converted strictly after `year`, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn descendants_converted_after(
        &self,
        idx: VampireId,
        year: i32,
    ) -> DomainResult<Vec<VampireId>> {
        self.node(idx)?;
        let found: Vec<VampireId> = self
            .descendants(idx)
            .filter(|&d| matches!(self.get(d), Some(node) if node.data.converted_after(year)))
            .collect();
        debug!("{} descendants converted after {}", found.len(), year);
        Ok(found)
    }

    /// Descendants converted after [`MILLENNIAL_YEAR`].
    pub fn millennial_vampires(&self, idx: VampireId) -> DomainResult<Vec<VampireId>> {
        self.descendants_converted_after(idx, MILLENNIAL_YEAR)
    }

    /// Descendants converted after the configured `millennial_year`.
    pub fn millennial_vampires_with(
        &self,
        idx: VampireId,
        settings: &Settings,
    ) -> DomainResult<Vec<VampireId>> {
        self.descendants_converted_after(idx, settings.millennial_year)
    }

    /// Closest common ancestor of `a` and `b`.
    ///
    /// The same vampire, a direct creator of the other, or an original
    /// short-circuits to itself. Otherwise the creator chains of both are
    /// compared and the first of `a`'s ancestors found among `b`'s wins.
    /// Vampires from unrelated lineages yield `None`.
    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(
        &self,
        a: VampireId,
        b: VampireId,
    ) -> DomainResult<Option<VampireId>> {
        let node_a = self.node(a)?;
        let node_b = self.node(b)?;

        if a == b {
            return Ok(Some(a));
        }
        if node_b.creator == Some(a) {
            return Ok(Some(a));
        }
        if node_a.creator == Some(b) {
            return Ok(Some(b));
        }
        if node_a.creator.is_none() {
            return Ok(Some(a));
        }
        if node_b.creator.is_none() {
            return Ok(Some(b));
        }

        let theirs: HashSet<VampireId> = self.ancestors(b).collect();
        Ok(self.ancestors(a).find(|idx| theirs.contains(idx)))
    }

    /// Names from `idx` up to its original, e.g. `Andrew <- Sarah <- Ansel`.
    pub fn lineage(&self, idx: VampireId) -> DomainResult<String> {
        iter::once(idx)
            .chain(self.ancestors(idx))
            .map(|i| self.vampire(i).map(|v| v.name.as_str()))
            .process_results(|mut names| names.join(" <- "))
    }
}
