//! The packaged result handed to downstream tooling.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    Collected, ExportTable, FileMetadata, ImportTable, ModuleName, SymbolSet, SymbolTable,
    UseClause,
};

/// Module index for one tree.
///
/// Field names in the serialized form are fixed; downstream code generators
/// read them by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ModuleIndex {
    #[serde(rename = "FileName")]
    pub file: FileMetadata,
    /// Modules and programs in order of first appearance.
    #[serde(rename = "Modules")]
    pub modules: Vec<ModuleName>,
    #[serde(rename = "Exports")]
    pub exports: ExportTable,
    /// Raw `use` clauses, including the ones import resolution drops.
    #[serde(rename = "Uses")]
    pub uses: BTreeMap<ModuleName, Vec<UseClause>>,
    #[serde(rename = "Imports")]
    pub imports: ImportTable,
    #[serde(rename = "Private")]
    pub private: BTreeMap<ModuleName, SymbolSet>,
    #[serde(rename = "Public")]
    pub public: BTreeMap<ModuleName, SymbolSet>,
    #[serde(rename = "Subpgms")]
    pub subprograms: BTreeMap<ModuleName, SymbolSet>,
    #[serde(rename = "Syms")]
    pub symbols: SymbolTable,
}

impl ModuleIndex {
    /// Package the phase outputs. Bucket and use-clause maps only list
    /// modules that have at least one entry.
    pub fn assemble(
        collected: Collected,
        symbols: SymbolTable,
        exports: ExportTable,
        imports: ImportTable,
    ) -> Self {
        let mut index = ModuleIndex {
            file: collected.file,
            modules: collected.modules,
            exports,
            imports,
            symbols,
            ..ModuleIndex::default()
        };

        for (name, record) in collected.records {
            if !record.uses.is_empty() {
                index.uses.insert(name.clone(), record.uses);
            }
            if !record.private.is_empty() {
                index.private.insert(name.clone(), record.private);
            }
            if !record.public.is_empty() {
                index.public.insert(name.clone(), record.public);
            }
            if !record.subprograms.is_empty() {
                index.subprograms.insert(name, record.subprograms);
            }
        }
        index
    }

    /// Whether the tree declared no modules at all.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests;
