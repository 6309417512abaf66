//! Tree representation of parsed Premark content.
//!
//! This module provides the [`Node`] enum and the [`Element`] struct that make
//! up a parsed tree, plus the [`Tree`] alias for the top-level forest.
//!
//! ## Core Types
//!
//! - [`Node`]: a single unit of content, either a run of plain text or a
//!   tagged element
//! - [`Element`]: a tag name, an ordered attribute map, and child nodes
//! - [`Tree`]: an ordered sequence of nodes; the top level is a forest, since
//!   a document may contain several sibling text runs and elements
//!
//! ## Usage Patterns
//!
//! ### Building trees directly
//!
//! Trees normally come out of [`parse`](crate::parse), but they can also be
//! constructed by hand:
//!
//! ```rust
//! use premark::{Element, Node};
//!
//! let note = Element::new("note")
//!     .with_attr("type", "warn")
//!     .with_child("Be careful");
//!
//! assert_eq!(note.attr("type"), Some("warn"));
//! assert_eq!(note.children.len(), 1);
//! ```
//!
//! ### Inspecting nodes
//!
//! ```rust
//! use premark::parse;
//!
//! let tree = parse("note<remember the milk>");
//! let element = tree[0].as_element().unwrap();
//! assert_eq!(element.tag, "note");
//! assert_eq!(element.children[0].as_text(), Some("remember the milk"));
//! ```
//!
//! ### Serde interop
//!
//! Both types derive `Serialize`/`Deserialize`, so a parsed tree converts to
//! and from JSON with text runs as plain strings:
//!
//! ```rust
//! use premark::parse;
//!
//! let tree = parse("hi<there>");
//! let json = serde_json::to_string(&tree).unwrap();
//! assert_eq!(json, r#"[{"tag":"hi","attributes":{},"children":["there"]}]"#);
//! ```

use crate::AttrMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of nodes.
///
/// The top level of a parsed document is a forest rather than a single root
/// element, so the whole-document type is a sequence.
pub type Tree = Vec<Node>;

/// A single unit of parsed content: a run of plain text or a tagged element.
///
/// # Examples
///
/// ```rust
/// use premark::{Element, Node};
///
/// let text = Node::from("hello");
/// let element = Node::from(Element::new("note"));
///
/// assert!(text.is_text());
/// assert!(element.is_element());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A run of plain text. Never empty in a parser-produced tree.
    Text(String),
    /// A tagged element with attributes and children.
    Element(Element),
}

impl Node {
    /// Returns `true` if this node is plain text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Returns `true` if this node is an element.
    #[inline]
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns the text content if this node is plain text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::Node;
    ///
    /// let node = Node::from("hello");
    /// assert_eq!(node.as_text(), Some("hello"));
    /// ```
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Returns a reference to the element if this node is one.
    #[inline]
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Display for Node {
    /// Renders the node in the bracketed XML-like output form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.write_str(text),
            Node::Element(element) => element.fmt(f),
        }
    }
}

/// A tagged element: a tag name, ordered attributes, and child nodes.
///
/// An element exclusively owns its attribute map and its children; there is
/// no sharing and no parent back-pointer, so trees are plain owned data.
///
/// # Examples
///
/// ```rust
/// use premark::Element;
///
/// let element = Element::new("link")
///     .with_attr("href", "/home")
///     .with_child("Home");
///
/// assert_eq!(element.to_string(), r#"<link href="/home">Home</link>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// The tag name. May be empty for degenerate input such as a bare `<`.
    pub tag: String,
    /// Attributes in document order, keys unique.
    pub attributes: AttrMap,
    /// Child nodes in document order. Empty elements render self-closing.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with the given tag, no attributes, and no children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::Element;
    ///
    /// let element = Element::new("note");
    /// assert_eq!(element.tag, "note");
    /// assert!(element.children.is_empty());
    /// ```
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: AttrMap::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute, returning the element for chaining.
    ///
    /// Re-using a key replaces its value while keeping its position, same as
    /// the parser's duplicate-attribute rule.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Appends a child node, returning the element for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::{Element, Node};
    ///
    /// let element = Element::new("p")
    ///     .with_child("hello ")
    ///     .with_child(Element::new("em").with_child("world"));
    /// assert_eq!(element.children.len(), 2);
    /// ```
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns the value of the named attribute, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::Element;
    ///
    /// let element = Element::new("note").with_attr("type", "warn");
    /// assert_eq!(element.attr("type"), Some("warn"));
    /// assert_eq!(element.attr("missing"), None);
    /// ```
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }
}

impl fmt::Display for Element {
    /// Renders the element in the bracketed XML-like output form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::xml::write_element(&mut out, self);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, Node};

    #[test]
    fn test_node_accessors() {
        let text = Node::from("hello");
        assert!(text.is_text());
        assert!(!text.is_element());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_element().is_none());

        let element = Node::from(Element::new("e"));
        assert!(element.is_element());
        assert_eq!(element.as_element().map(|e| e.tag.as_str()), Some("e"));
        assert!(element.as_text().is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let element = Element::new("note")
            .with_attr("type", "warn")
            .with_attr("type", "error")
            .with_child("text");

        assert_eq!(element.attr("type"), Some("error"));
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.children, vec![Node::from("text")]);
    }

    #[test]
    fn test_display_matches_xml_form() {
        let element = Element::new("e").with_attr("a", "2").with_child("x");
        assert_eq!(element.to_string(), r#"<e a="2">x</e>"#);
        assert_eq!(Node::from(Element::new("e")).to_string(), "<e/>");
        assert_eq!(Node::from("plain").to_string(), "plain");
    }

    #[test]
    fn test_serde_untagged_roundtrip() {
        let tree = vec![
            Node::from("intro "),
            Node::from(Element::new("b").with_child("bold")),
        ];
        let json = serde_json::to_string(&tree).unwrap();
        let back: Vec<Node> = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
