/*
Rendering of a lineage as a `termtree::Tree`.

The arena only stores handles, so the display tree is rebuilt top-down,
one child tree per offspring handle, in siring order.
 */
use termtree::Tree;
use tracing::instrument;

use crate::config::Settings;
use crate::domain::{DomainResult, VampireArena, VampireId};

pub trait LineageTree {
    fn to_tree_string(&self, root: VampireId, show_years: bool) -> DomainResult<Tree<String>>;

    /// Render with the label style chosen in `settings`.
    fn render(&self, root: VampireId, settings: &Settings) -> DomainResult<Tree<String>> {
        self.to_tree_string(root, settings.show_years)
    }
}

impl LineageTree for VampireArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: VampireId, show_years: bool) -> DomainResult<Tree<String>> {
        let label = |idx: VampireId| -> DomainResult<String> {
            let vampire = self.vampire(idx)?;
            Ok(if show_years {
                vampire.to_string()
            } else {
                vampire.name.clone()
            })
        };

        fn build_tree(
            arena: &VampireArena,
            idx: VampireId,
            parent_tree: &mut Tree<String>,
            label: &dyn Fn(VampireId) -> DomainResult<String>,
        ) -> DomainResult<()> {
            for &child in arena.offspring(idx)? {
                let mut child_tree = Tree::new(label(child)?);
                build_tree(arena, child, &mut child_tree, label)?;
                parent_tree.push(child_tree);
            }
            Ok(())
        }

        let mut tree = Tree::new(label(root)?);
        build_tree(self, root, &mut tree, &label)?;
        Ok(tree)
    }
}
