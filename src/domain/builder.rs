//! Lineage builder: assembles an arena from name-based declarations.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::domain::arena::{VampireArena, VampireId};
use crate::domain::error::{DomainError, DomainResult};

/// Constructs a [`VampireArena`] from vampires and siring relations given by name.
///
/// Declarations can arrive in any order; `build` validates them as a whole.
#[derive(Debug, Default)]
pub struct LineageBuilder {
    vampires: Vec<(String, i32)>,
    relations: Vec<(String, String)>,
}

impl LineageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a vampire.
    pub fn vampire(mut self, name: impl Into<String>, year_converted: i32) -> Self {
        self.vampires.push((name.into(), year_converted));
        self
    }

    /// Declare that `creator` sired `child`.
    pub fn sired(mut self, creator: impl Into<String>, child: impl Into<String>) -> Self {
        self.relations.push((creator.into(), child.into()));
        self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build(&self) -> DomainResult<VampireArena> {
        let years = self.index_vampires()?;
        let (children, creators) = self.index_relations(&years)?;

        let mut arena = VampireArena::new();
        let mut visited: HashSet<&str> = HashSet::new();

        for (name, _) in &self.vampires {
            if creators.contains_key(name.as_str()) {
                continue;
            }
            let mut stack: Vec<(&str, Option<VampireId>)> = vec![(name.as_str(), None)];

            while let Some((current, parent)) = stack.pop() {
                // Each name has at most one creator, so no name is pushed twice
                visited.insert(current);

                let year = years
                    .get(current)
                    .copied()
                    .ok_or_else(|| DomainError::UnknownName(current.to_string()))?;
                let idx = arena.add_vampire(current, year);
                if let Some(parent_idx) = parent {
                    arena.link(parent_idx, idx)?;
                }

                // Push in reverse so offspring are sired in declaration order
                if let Some(offspring) = children.get(current) {
                    for &child in offspring.iter().rev() {
                        stack.push((child, Some(idx)));
                    }
                }
            }
        }

        // Declared vampires never reached from an original sit on a cycle
        if let Some((name, _)) = self
            .vampires
            .iter()
            .find(|(name, _)| !visited.contains(name.as_str()))
        {
            return Err(DomainError::CycleDetected {
                parent: creators
                    .get(name.as_str())
                    .copied()
                    .unwrap_or(name.as_str())
                    .to_string(),
                child: name.clone(),
            });
        }

        debug!("built lineage with {} vampires", arena.len());
        Ok(arena)
    }

    fn index_vampires(&self) -> DomainResult<HashMap<&str, i32>> {
        let mut years = HashMap::new();
        for (name, year) in &self.vampires {
            if years.insert(name.as_str(), *year).is_some() {
                return Err(DomainError::DuplicateName(name.clone()));
            }
        }
        Ok(years)
    }

    #[allow(clippy::type_complexity)]
    fn index_relations<'a>(
        &'a self,
        years: &HashMap<&str, i32>,
    ) -> DomainResult<(HashMap<&'a str, Vec<&'a str>>, HashMap<&'a str, &'a str>)> {
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut creators: HashMap<&str, &str> = HashMap::new();

        for (creator, child) in &self.relations {
            for name in [creator, child] {
                if !years.contains_key(name.as_str()) {
                    return Err(DomainError::UnknownName(name.clone()));
                }
            }
            if let Some(existing) = creators.insert(child.as_str(), creator.as_str()) {
                return Err(DomainError::AlreadySired {
                    child: child.clone(),
                    creator: existing.to_string(),
                });
            }
            children
                .entry(creator.as_str())
                .or_default()
                .push(child.as_str());
        }
        Ok((children, creators))
    }
}
