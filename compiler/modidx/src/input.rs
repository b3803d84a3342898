//! Input trees: XML from the front end, or pre-built JSON trees.

use std::path::Path;

use modidx_resolve::{resolve, IndexConfig, ModuleIndex, ResolveError};
use modidx_tree::{Element, TreeNode};

/// Why one input could not be indexed.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("malformed JSON tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// On-disk tree encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Xml,
    /// Serialized [`Element`].
    Json,
}

impl InputFormat {
    /// `.json` files are JSON trees; everything else is read as XML.
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            InputFormat::Json
        } else {
            InputFormat::Xml
        }
    }
}

/// An element node of a parsed XML document.
///
/// Text, comment and processing-instruction nodes are invisible through
/// this view.
#[derive(Copy, Clone, Debug)]
pub struct XmlNode<'a, 'input>(pub roxmltree::Node<'a, 'input>);

impl<'a, 'input> TreeNode for XmlNode<'a, 'input> {
    #[inline]
    fn tag(&self) -> &str {
        self.0.tag_name().name()
    }

    #[inline]
    fn attr(&self, name: &str) -> Option<&str> {
        self.0.attribute(name)
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        self.0
            .children()
            .filter(roxmltree::Node::is_element)
            .map(XmlNode)
    }
}

/// Resolve a tree held in memory.
pub fn index_source(
    text: &str,
    format: InputFormat,
    config: &IndexConfig,
) -> Result<ModuleIndex, InputError> {
    match format {
        InputFormat::Xml => {
            let options = roxmltree::ParsingOptions {
                allow_dtd: true,
                ..roxmltree::ParsingOptions::default()
            };
            let document = roxmltree::Document::parse_with_options(text, options)?;
            Ok(resolve(XmlNode(document.root_element()), config)?)
        }
        InputFormat::Json => {
            let root: Element = serde_json::from_str(text)?;
            Ok(resolve(&root, config)?)
        }
    }
}

/// Read and resolve the tree stored at `path`.
pub fn index_path(path: &Path, config: &IndexConfig) -> Result<ModuleIndex, InputError> {
    let text = std::fs::read_to_string(path)?;
    index_source(&text, InputFormat::from_path(path), config)
}
