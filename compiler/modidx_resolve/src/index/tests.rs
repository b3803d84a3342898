use modidx_tree::Element;
use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::test_helpers::{
    index_of, module, private_decl, program, root, set, subroutine, use_all, use_only, var,
};

#[test]
fn empty_tree_gives_empty_index() {
    let index = index_of(&root([]));
    assert!(index.is_empty());
    assert_eq!(index, ModuleIndex::default());
}

#[test]
fn buckets_only_list_modules_with_entries() {
    let index = index_of(&root([
        module("consts", [var("pi")]),
        module("ops", [subroutine("step")]),
    ]));
    assert_eq!(index.public.len(), 1);
    assert_eq!(index.subprograms.len(), 1);
    assert!(index.private.is_empty());
    assert!(index.uses.is_empty());
    assert_eq!(index.public.get("consts"), Some(&set(&["pi"])));
}

#[test]
fn raw_uses_keep_dropped_clauses() {
    let index = index_of(&root([module("b", [use_only("a", &["x"])])]));
    assert_eq!(index.uses.get("b").map(Vec::len), Some(1));
    assert!(index.imports.is_empty());
}

#[test]
fn serialized_field_names_and_shapes() {
    let tree = root([
        Element::new("file").with_attr("path", "/u/delphi/tests/data_processed.f"),
        module(
            "Consts",
            [var("pi"), var("scratch"), private_decl(&["scratch"])],
        ),
        program(
            "Main",
            [
                use_all("consts"),
                use_only("consts", &["pi"]),
                subroutine("report"),
            ],
        ),
    ]);
    let value = match serde_json::to_value(index_of(&tree)) {
        Ok(value) => value,
        Err(e) => panic!("index failed to serialize: {e}"),
    };

    assert_eq!(
        value,
        json!({
            "FileName": ["data.f", "delphi/tests"],
            "Modules": ["consts", "main"],
            "Exports": {"consts": ["pi"], "main": ["report"]},
            "Uses": {"main": [{"consts": ["*"]}, {"consts": ["pi"]}]},
            "Imports": {"main": [{"consts": ["pi"]}]},
            "Private": {"consts": ["scratch"]},
            "Public": {"consts": ["pi", "scratch"]},
            "Subpgms": {"main": ["report"]},
            "Syms": {"consts": ["pi", "scratch"], "main": ["report"]},
        })
    );
}
