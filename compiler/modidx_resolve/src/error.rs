//! Resolution failures.
//!
//! Only malformed trees fail. Unknown tags are skipped and unknown import
//! targets resolve to nothing, neither is an error.

use modidx_tree::NodeTag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A node the resolver depends on lacks a required attribute.
    #[error("`{tag}` node is missing required attribute `{attribute}`")]
    MissingAttribute {
        tag: NodeTag,
        attribute: &'static str,
    },

    /// A declaration appeared outside any module while the tree has no
    /// `program` node to fall back to.
    #[error("`{tag}` node appears before any module or program, and the tree has no program to fall back to")]
    Unscoped { tag: NodeTag },
}
