//! The fixed tag vocabulary.

use std::fmt;

/// Tags the resolver dispatches on.
///
/// Parsing is ASCII-case-insensitive; any other tag yields `None` from
/// [`NodeTag::from_tag`] and is skipped by consumers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// Main program unit; also the fallback scope.
    Program,
    Module,
    Variable,
    Subroutine,
    Function,
    /// Container scanned for `access-spec` / `name` pairs.
    Declaration,
    AccessSpec,
    Use,
    Only,
    Name,
    /// Source file marker, used only for metadata.
    File,
}

impl NodeTag {
    /// Every tag, in declaration order.
    pub const ALL: [NodeTag; 11] = [
        NodeTag::Program,
        NodeTag::Module,
        NodeTag::Variable,
        NodeTag::Subroutine,
        NodeTag::Function,
        NodeTag::Declaration,
        NodeTag::AccessSpec,
        NodeTag::Use,
        NodeTag::Only,
        NodeTag::Name,
        NodeTag::File,
    ];

    /// Canonical (lower-case) spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeTag::Program => "program",
            NodeTag::Module => "module",
            NodeTag::Variable => "variable",
            NodeTag::Subroutine => "subroutine",
            NodeTag::Function => "function",
            NodeTag::Declaration => "declaration",
            NodeTag::AccessSpec => "access-spec",
            NodeTag::Use => "use",
            NodeTag::Only => "only",
            NodeTag::Name => "name",
            NodeTag::File => "file",
        }
    }

    pub fn from_tag(tag: &str) -> Option<NodeTag> {
        Self::ALL
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(tag))
            .copied()
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
