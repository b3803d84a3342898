//! Symbol, export and import tables.
//!
//! Three phases, strictly in this order:
//!
//! 1. [`symbol_table`]: everything a module declares.
//! 2. [`export_snapshot`]: symbol table minus private names.
//! 3. [`resolve_imports`]: `use` clauses resolved against the step 2 snapshot.
//!
//! Exports never include imported symbols. Because the snapshot is fixed
//! before any import is resolved, the order in which modules appear in the
//! tree cannot change the result.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Collected, ModuleName, Selector};

pub type SymbolSet = BTreeSet<String>;

/// All symbols native to each known module: public ∪ private ∪ subprograms.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct SymbolTable(BTreeMap<ModuleName, SymbolSet>);

/// Symbols each known module makes visible to importers.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ExportTable(BTreeMap<ModuleName, SymbolSet>);

/// Resolved `use` clauses per importing module, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ImportTable(BTreeMap<ModuleName, Vec<ResolvedImport>>);

macro_rules! table_accessors {
    ($table:ty, $value:ty) => {
        impl $table {
            #[inline]
            pub fn get(&self, module: &str) -> Option<&$value> {
                self.0.get(module)
            }

            pub fn iter(&self) -> btree_map::Iter<'_, ModuleName, $value> {
                self.0.iter()
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl<'a> IntoIterator for &'a $table {
            type Item = (&'a ModuleName, &'a $value);
            type IntoIter = btree_map::Iter<'a, ModuleName, $value>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

table_accessors!(SymbolTable, SymbolSet);
table_accessors!(ExportTable, SymbolSet);
table_accessors!(ImportTable, Vec<ResolvedImport>);

/// One resolved `use` clause: the target and the symbols it brings in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedImport {
    pub target: ModuleName,
    pub symbols: SymbolSet,
}

/// Serializes as `{"<target>": [symbols...]}`.
impl Serialize for ResolvedImport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.target, &self.symbols)?;
        map.end()
    }
}

/// Phase 1: union of each known module's buckets.
#[tracing::instrument(level = "debug", skip_all, fields(modules = collected.modules.len()))]
pub fn symbol_table(collected: &Collected) -> SymbolTable {
    let table = collected
        .modules
        .iter()
        .map(|module| {
            let symbols = collected
                .record(module)
                .map(|record| {
                    record
                        .public
                        .iter()
                        .chain(&record.private)
                        .chain(&record.subprograms)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            (module.clone(), symbols)
        })
        .collect();
    SymbolTable(table)
}

/// Phase 2: symbols minus private names, for each known module.
///
/// A private name stays hidden even if it is also declared public or as a
/// subprogram.
#[tracing::instrument(level = "debug", skip_all)]
pub fn export_snapshot(collected: &Collected, symbols: &SymbolTable) -> ExportTable {
    let table = symbols
        .iter()
        .map(|(module, declared)| {
            let exported = match collected.record(module) {
                Some(record) => declared.difference(&record.private).cloned().collect(),
                None => declared.clone(),
            };
            (module.clone(), exported)
        })
        .collect();
    ExportTable(table)
}

/// Phase 3: resolve every recorded `use` clause.
///
/// - Wildcard: the target's snapshot exports. Unknown targets give an empty
///   set.
/// - Explicit with two or more names: those names, unchecked.
/// - Explicit with a single name: dropped.
///
/// Modules with no surviving clause get no entry.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resolve_imports(collected: &Collected, exports: &ExportTable) -> ImportTable {
    let mut table: BTreeMap<ModuleName, Vec<ResolvedImport>> = BTreeMap::new();
    for (module, record) in &collected.records {
        for clause in &record.uses {
            let symbols = match &clause.selector {
                Selector::Wildcard => exports.get(clause.target.as_str()).cloned().unwrap_or_default(),
                Selector::Explicit(only) if only.len() > 1 => only.iter().cloned().collect(),
                Selector::Explicit(_) => {
                    tracing::trace!(%module, target = %clause.target, "single-name only list dropped");
                    continue;
                }
            };
            table.entry(module.clone()).or_default().push(ResolvedImport {
                target: clause.target.clone(),
                symbols,
            });
        }
    }
    tracing::debug!(importers = table.len(), "imports resolved");
    ImportTable(table)
}
