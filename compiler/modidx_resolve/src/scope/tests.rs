use modidx_tree::{Element, NodeTag};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn falls_back_to_entry_point_until_a_scope_opens() {
    let mut scope = ScopeTracker::new(Some(ModuleName::canonical("main")));
    assert_eq!(
        scope.resolve(NodeTag::Variable),
        Ok(ModuleName::canonical("main"))
    );

    scope.enter(ModuleName::canonical("shapes"));
    assert_eq!(
        scope.resolve(NodeTag::Variable),
        Ok(ModuleName::canonical("shapes"))
    );
}

#[test]
fn unscoped_without_entry_point() {
    let scope = ScopeTracker::new(None);
    assert_eq!(
        scope.resolve(NodeTag::Use),
        Err(ResolveError::Unscoped { tag: NodeTag::Use })
    );
}

#[test]
fn entry_point_is_first_program_even_when_declared_late() {
    let tree = Element::new("ofp").with_children([
        Element::new("variable").with_attr("name", "early"),
        Element::new("program").with_attr("name", "Driver"),
        Element::new("program").with_attr("name", "Other"),
    ]);
    let scope = match ScopeTracker::for_tree(&tree) {
        Ok(scope) => scope,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(
        scope.resolve(NodeTag::Variable),
        Ok(ModuleName::canonical("driver"))
    );
}

#[test]
fn program_without_name_is_malformed() {
    let tree = Element::new("ofp").with_child(Element::new("program"));
    let err = ScopeTracker::for_tree(&tree).err();
    assert_eq!(
        err,
        Some(ResolveError::MissingAttribute {
            tag: NodeTag::Program,
            attribute: "name",
        })
    );
}

#[test]
fn required_attr_lowercases() {
    let node = Element::new("use").with_attr("name", "Geometry");
    assert_eq!(
        required_attr(&node, NodeTag::Use, "name"),
        Ok("geometry".to_string())
    );
}
