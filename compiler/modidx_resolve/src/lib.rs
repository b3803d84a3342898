//! Module index resolution.
//!
//! Given the tagged tree of a program made of named modules, builds per
//! module: the symbols it declares, which of them are exported, what it
//! imports through `use` clauses, and the file it came from.
//!
//! # Pipeline
//!
//! ```text
//! tree ──► collect() ──► Collected
//!                           │
//!                           ├──► symbol_table()    ──► SymbolTable
//!                           │          │
//!                           ├──► export_snapshot() ──► ExportTable
//!                           │          │
//!                           └──► resolve_imports() ──► ImportTable
//!                                      │
//!                                      ▼
//!                         ModuleIndex::assemble()
//! ```
//!
//! Every phase is a pure function of the snapshots before it. The export
//! table is computed before any import is resolved and is never revisited:
//! a wildcard import sees the target's own declarations only, never what the
//! target itself imports. Downstream tooling relies on that shape.

mod collect;
mod config;
mod error;
mod index;
mod metadata;
mod name;
mod scope;
mod tables;

#[cfg(test)]
mod test_helpers;

pub use collect::{collect, Collected, ModuleRecord, Selector, UseClause};
pub use config::IndexConfig;
pub use error::ResolveError;
pub use index::ModuleIndex;
pub use metadata::{derive_file_name, derive_project_path, FileMetadata};
pub use name::ModuleName;
pub use tables::{
    export_snapshot, resolve_imports, symbol_table, ExportTable, ImportTable, ResolvedImport,
    SymbolSet, SymbolTable,
};

use modidx_tree::TreeNode;

/// Resolve one tree into its module index.
///
/// Fails only on structurally malformed input (see [`ResolveError`]).
#[tracing::instrument(level = "debug", skip_all)]
pub fn resolve<N: TreeNode>(root: N, config: &IndexConfig) -> Result<ModuleIndex, ResolveError> {
    let collected = collect(root, config)?;
    let symbols = symbol_table(&collected);
    let exports = export_snapshot(&collected, &symbols);
    let imports = resolve_imports(&collected, &exports);
    Ok(ModuleIndex::assemble(collected, symbols, exports, imports))
}
