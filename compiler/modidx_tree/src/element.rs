//! Owned tree nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TreeNode;

/// An owned tagged node.
///
/// Deserializes from JSON shaped like
/// `{"tag": "module", "attrs": {"name": "m"}, "children": [...]}`, with
/// `attrs` and `children` optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

impl<'a> TreeNode for &'a Element {
    #[inline]
    fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let element: &'a Element = *self;
        element.children.iter()
    }
}
