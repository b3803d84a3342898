//! The node capability the resolver is written against.

use crate::NodeTag;

/// Read-only view of one node in a tagged tree.
///
/// Implementors are cheap handles (`&Element`, a wrapped parser node id,
/// ...). The resolver copies them freely while walking.
pub trait TreeNode: Copy {
    /// Raw tag name, exactly as the producer spelled it.
    fn tag(&self) -> &str;

    /// Attribute lookup. Keys are case-sensitive.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Direct children in document order.
    fn children(&self) -> impl Iterator<Item = Self>;

    /// The tag, if it belongs to the resolver's vocabulary.
    #[inline]
    fn node_tag(&self) -> Option<NodeTag> {
        NodeTag::from_tag(self.tag())
    }

    /// Pre-order traversal: this node first, then its subtree in document order.
    fn descendants(self) -> Descendants<Self> {
        Descendants { stack: vec![self] }
    }
}

/// Document-order depth-first iterator returned by [`TreeNode::descendants`].
///
/// Uses an explicit stack, so tree depth is bounded by heap, not call stack.
#[derive(Clone, Debug)]
pub struct Descendants<N> {
    stack: Vec<N>,
}

impl<N: TreeNode> Iterator for Descendants<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        // Children go on reversed so the first child is popped next.
        let start = self.stack.len();
        self.stack.extend(node.children());
        self.stack[start..].reverse();
        Some(node)
    }
}
