//! Tree builders shared by the unit tests.

use modidx_tree::Element;

use crate::{resolve, IndexConfig, ModuleIndex, SymbolSet};

/// Top-level wrapper, as front ends emit one root element per file.
pub(crate) fn root(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("ofp").with_children(children)
}

pub(crate) fn module(name: &str, body: impl IntoIterator<Item = Element>) -> Element {
    Element::new("module")
        .with_attr("name", name)
        .with_children(body)
}

pub(crate) fn program(name: &str, body: impl IntoIterator<Item = Element>) -> Element {
    Element::new("program")
        .with_attr("name", name)
        .with_children(body)
}

pub(crate) fn var(name: &str) -> Element {
    Element::new("variable").with_attr("name", name)
}

pub(crate) fn subroutine(name: &str) -> Element {
    Element::new("subroutine").with_attr("name", name)
}

pub(crate) fn function(name: &str) -> Element {
    Element::new("function").with_attr("name", name)
}

pub(crate) fn name(id: &str) -> Element {
    Element::new("name").with_attr("id", id)
}

pub(crate) fn access(keyword: &str) -> Element {
    Element::new("access-spec").with_attr("keyword", keyword)
}

pub(crate) fn decl(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("declaration").with_children(children)
}

/// `private :: a, b, ...`
pub(crate) fn private_decl(ids: &[&str]) -> Element {
    decl(std::iter::once(access("private")).chain(ids.iter().map(|id| name(id))))
}

pub(crate) fn use_all(target: &str) -> Element {
    Element::new("use").with_attr("name", target)
}

pub(crate) fn use_only(target: &str, ids: &[&str]) -> Element {
    use_all(target).with_child(Element::new("only").with_children(ids.iter().map(|id| name(id))))
}

pub(crate) fn set(symbols: &[&str]) -> SymbolSet {
    symbols.iter().map(ToString::to_string).collect()
}

/// Resolve with default settings; malformed fixtures are test bugs.
pub(crate) fn index_of(tree: &Element) -> ModuleIndex {
    match resolve(tree, &IndexConfig::default()) {
        Ok(index) => index,
        Err(e) => panic!("fixture failed to resolve: {e}"),
    }
}
