//! Tagged tree abstraction for module index resolution.
//!
//! The resolver never parses source text. It walks a tree that some external
//! front end already produced, through the [`TreeNode`] capability:
//!
//! - a tag name
//! - optional string attributes (keys are case-sensitive)
//! - ordered children
//! - a document-order [`Descendants`] traversal
//!
//! Any parser output can be adapted by implementing [`TreeNode`] for a cheap
//! `Copy` handle into its tree. [`Element`] is the owned implementation used
//! for JSON input and tests.
//!
//! [`NodeTag`] is the closed vocabulary of tags the resolver reacts to.
//! Everything else is ignored.

mod element;
mod node;
mod tag;

pub use element::Element;
pub use node::{Descendants, TreeNode};
pub use tag::NodeTag;
