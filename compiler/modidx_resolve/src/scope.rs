//! Current-scope tracking during the tree walk.

use modidx_tree::{NodeTag, TreeNode};

use crate::{ModuleName, ResolveError};

/// Tracks which module declarations belong to.
///
/// The scope is the last `module`/`program` opened in document order. Before
/// any is opened, declarations fall back to the entry point: the first
/// `program` in the tree, found up front by [`ScopeTracker::for_tree`].
#[derive(Debug)]
pub(crate) struct ScopeTracker {
    current: Option<ModuleName>,
    entry_point: Option<ModuleName>,
}

impl ScopeTracker {
    pub(crate) fn new(entry_point: Option<ModuleName>) -> Self {
        ScopeTracker {
            current: None,
            entry_point,
        }
    }

    /// Tracker seeded with `root`'s entry point.
    pub(crate) fn for_tree<N: TreeNode>(root: N) -> Result<Self, ResolveError> {
        let program = root
            .descendants()
            .find(|node| node.node_tag() == Some(NodeTag::Program));
        let entry_point = match program {
            Some(node) => Some(ModuleName::canonical(&required_attr(
                node,
                NodeTag::Program,
                "name",
            )?)),
            None => None,
        };
        if let Some(entry) = &entry_point {
            tracing::debug!(%entry, "entry point");
        }
        Ok(Self::new(entry_point))
    }

    pub(crate) fn enter(&mut self, name: ModuleName) {
        self.current = Some(name);
    }

    /// Scope for a declaration-bearing node tagged `tag`.
    pub(crate) fn resolve(&self, tag: NodeTag) -> Result<ModuleName, ResolveError> {
        self.current
            .as_ref()
            .or(self.entry_point.as_ref())
            .cloned()
            .ok_or(ResolveError::Unscoped { tag })
    }
}

/// Lower-cased value of a required attribute.
pub(crate) fn required_attr<N: TreeNode>(
    node: N,
    tag: NodeTag,
    attribute: &'static str,
) -> Result<String, ResolveError> {
    node.attr(attribute)
        .map(str::to_lowercase)
        .ok_or(ResolveError::MissingAttribute { tag, attribute })
}

#[cfg(test)]
mod tests;
