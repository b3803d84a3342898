//! The collection walk: one pass over the tree filling per-module records.
//!
//! Each vocabulary tag maps to one handler (see [`handler`]). The walk
//! visits every node in document order, so declarations nested anywhere
//! under a module are attributed to it, and a `declaration` node is both
//! scanned as a whole and walked into like any other node.

use std::collections::BTreeSet;

use modidx_tree::{NodeTag, TreeNode};
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::metadata::{derive_file_name, derive_project_path, FileMetadata};
use crate::scope::{required_attr, ScopeTracker};
use crate::{IndexConfig, ModuleName, ResolveError};

/// Symbols a `use` clause asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Everything the target exports.
    Wildcard,
    /// An explicit `only` list, in document order with duplicates kept.
    /// Never empty.
    Explicit(Vec<String>),
}

impl Selector {
    /// Selector for the names collected under a clause's `only` children.
    ///
    /// An empty list means no restriction.
    pub fn from_only_list(symbols: Vec<String>) -> Self {
        if symbols.is_empty() {
            Selector::Wildcard
        } else {
            Selector::Explicit(symbols)
        }
    }
}

/// One `use` clause as written, before resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseClause {
    pub target: ModuleName,
    pub selector: Selector,
}

/// Serializes as `{"<target>": ["*"]}` or `{"<target>": ["a", "b"]}`.
impl Serialize for UseClause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const WILDCARD: &[&str] = &["*"];
        let mut map = serializer.serialize_map(Some(1))?;
        match &self.selector {
            Selector::Wildcard => map.serialize_entry(&self.target, WILDCARD)?,
            Selector::Explicit(symbols) => map.serialize_entry(&self.target, symbols)?,
        }
        map.end()
    }
}

/// Everything collected about one module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRecord {
    pub name: ModuleName,
    pub public: BTreeSet<String>,
    pub private: BTreeSet<String>,
    pub subprograms: BTreeSet<String>,
    pub uses: Vec<UseClause>,
}

impl ModuleRecord {
    pub fn new(name: ModuleName) -> Self {
        ModuleRecord {
            name,
            public: BTreeSet::new(),
            private: BTreeSet::new(),
            subprograms: BTreeSet::new(),
            uses: Vec::new(),
        }
    }
}

/// Output of the collection walk. Read-only input to every later phase.
#[derive(Clone, Debug, Default)]
pub struct Collected {
    /// Modules and programs in order of first appearance.
    pub modules: Vec<ModuleName>,
    /// Records for every scope that received a symbol or use clause.
    pub records: FxHashMap<ModuleName, ModuleRecord>,
    pub file: FileMetadata,
}

impl Collected {
    #[inline]
    pub fn record(&self, name: &ModuleName) -> Option<&ModuleRecord> {
        self.records.get(name)
    }
}

/// Walk `root` and collect modules, symbols, use clauses and file metadata.
#[tracing::instrument(level = "debug", skip_all)]
pub fn collect<N: TreeNode>(root: N, config: &IndexConfig) -> Result<Collected, ResolveError> {
    let mut collector = Collector {
        config,
        scope: ScopeTracker::for_tree(root)?,
        out: Collected::default(),
    };
    for node in root.descendants() {
        let Some(tag) = node.node_tag() else {
            continue;
        };
        if let Some(handle) = handler::<N>(tag) {
            handle(&mut collector, tag, node)?;
        }
    }
    tracing::debug!(
        modules = collector.out.modules.len(),
        records = collector.out.records.len(),
        "collection complete"
    );
    Ok(collector.out)
}

type Handler<'c, N> = fn(&mut Collector<'c>, NodeTag, N) -> Result<(), ResolveError>;

/// Handler for each tag. `access-spec`, `only` and `name` are consumed by
/// their enclosing `declaration` / `use` handler and do nothing on their own.
fn handler<'c, N: TreeNode>(tag: NodeTag) -> Option<Handler<'c, N>> {
    match tag {
        NodeTag::Program | NodeTag::Module => Some(Collector::enter_scope::<N>),
        NodeTag::Variable => Some(Collector::variable::<N>),
        NodeTag::Subroutine | NodeTag::Function => Some(Collector::subprogram::<N>),
        NodeTag::Declaration => Some(Collector::declaration::<N>),
        NodeTag::Use => Some(Collector::use_clause::<N>),
        NodeTag::File => Some(Collector::file::<N>),
        NodeTag::AccessSpec | NodeTag::Only | NodeTag::Name => None,
    }
}

struct Collector<'c> {
    config: &'c IndexConfig,
    scope: ScopeTracker,
    out: Collected,
}

impl<'c> Collector<'c> {
    fn record_mut(&mut self, name: ModuleName) -> &mut ModuleRecord {
        self.out
            .records
            .entry(name)
            .or_insert_with_key(|name| ModuleRecord::new(name.clone()))
    }

    fn enter_scope<N: TreeNode>(&mut self, tag: NodeTag, node: N) -> Result<(), ResolveError> {
        let name = ModuleName::canonical(&required_attr(node, tag, "name")?);
        tracing::trace!(%name, %tag, "enter scope");
        if !self.out.modules.contains(&name) {
            self.out.modules.push(name.clone());
        }
        self.scope.enter(name);
        Ok(())
    }

    fn variable<N: TreeNode>(&mut self, tag: NodeTag, node: N) -> Result<(), ResolveError> {
        let Some(symbol) = node.attr("name").map(str::to_lowercase) else {
            return Ok(());
        };
        let scope = self.scope.resolve(tag)?;
        tracing::trace!(%scope, %symbol, "public variable");
        self.record_mut(scope).public.insert(symbol);
        Ok(())
    }

    fn subprogram<N: TreeNode>(&mut self, tag: NodeTag, node: N) -> Result<(), ResolveError> {
        let Some(symbol) = node.attr("name").map(str::to_lowercase) else {
            return Ok(());
        };
        let scope = self.scope.resolve(tag)?;
        tracing::trace!(%scope, %symbol, "subprogram");
        self.record_mut(scope).subprograms.insert(symbol);
        Ok(())
    }

    /// Marks names private in document order: once an `access-spec` with
    /// keyword `private` has been seen, every later `name` in this
    /// declaration is private. Earlier names are left alone.
    fn declaration<N: TreeNode>(&mut self, tag: NodeTag, node: N) -> Result<(), ResolveError> {
        let mut seen_private = false;
        for inner in node.descendants() {
            match inner.node_tag() {
                Some(NodeTag::AccessSpec) => {
                    let keyword = required_attr(inner, NodeTag::AccessSpec, "keyword")?;
                    if keyword == "private" {
                        seen_private = true;
                    }
                }
                Some(NodeTag::Name) if seen_private => {
                    let symbol = required_attr(inner, NodeTag::Name, "id")?;
                    let scope = self.scope.resolve(tag)?;
                    tracing::trace!(%scope, %symbol, "private symbol");
                    self.record_mut(scope).private.insert(symbol);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn use_clause<N: TreeNode>(&mut self, tag: NodeTag, node: N) -> Result<(), ResolveError> {
        let target = ModuleName::canonical(&required_attr(node, tag, "name")?);

        let mut only = Vec::new();
        for list in node
            .children()
            .filter(|child| child.node_tag() == Some(NodeTag::Only))
        {
            for item in list
                .children()
                .filter(|item| item.node_tag() == Some(NodeTag::Name))
            {
                only.push(required_attr(item, NodeTag::Name, "id")?);
            }
        }

        let scope = self.scope.resolve(tag)?;
        let clause = UseClause {
            target,
            selector: Selector::from_only_list(only),
        };
        tracing::trace!(%scope, ?clause, "use clause");
        self.record_mut(scope).uses.push(clause);
        Ok(())
    }

    /// Each derivation succeeds or fails on its own; a later `file` node
    /// overrides only the parts it matches.
    fn file<N: TreeNode>(&mut self, tag: NodeTag, node: N) -> Result<(), ResolveError> {
        let path = node.attr("path").ok_or(ResolveError::MissingAttribute {
            tag,
            attribute: "path",
        })?;
        if let Some(file_name) = derive_file_name(path) {
            self.out.file.file_name = Some(file_name);
        }
        if let Some(dir) = derive_project_path(path, &self.config.project_root) {
            self.out.file.path = Some(dir);
        }
        Ok(())
    }
}
