//! # premark
//!
//! Parser and serializer for the Premark inline annotation notation.
//!
//! ## What is Premark?
//!
//! Premark is a compact markup notation for annotating spans of freeform
//! prose. A tag signature — tag name plus optional `key="value"` attributes —
//! is written immediately *before* an opening `<`, and the matching `>`
//! closes the span:
//!
//! ```text
//! Please review this note type="urgent"<by Friday> if you can.
//! ```
//!
//! The tag name is the last token before the bracket, not the first token
//! after it; the annotation reads in place within the prose. See the
//! [`notation`] module for the full notation reference.
//!
//! ## Key Features
//!
//! - **Total parsing**: [`parse`] never fails, whatever the input — malformed
//!   brackets, broken quotes, and stray escapes all degrade into defined
//!   structure instead of errors
//! - **Ordered attributes**: attributes keep document order, with duplicate
//!   keys resolved rightmost-wins, backed by [`indexmap`]
//! - **XML-like rendering**: [`to_xml`] renders a tree into a conventional
//!   bracketed form
//! - **Serde-ready trees**: [`Node`] and [`Element`] derive
//!   `Serialize`/`Deserialize`, so parsed trees convert straight to JSON
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use premark::{parse, to_xml};
//!
//! let tree = parse(r#"call note type="warn"<Alice> today"#);
//!
//! let element = tree[1].as_element().unwrap();
//! assert_eq!(element.tag, "note");
//! assert_eq!(element.attr("type"), Some("warn"));
//!
//! assert_eq!(to_xml(&tree), r#"call <note type="warn">Alice</note> today"#);
//! ```
//!
//! ### Whitespace trimming
//!
//! Trim mode drops whitespace-only fragments and collapses fragment edges to
//! at most one space per side:
//!
//! ```rust
//! use premark::{parse_with_options, Node, ParseOptions};
//!
//! let tree = parse_with_options(" label< hi >", ParseOptions::trimmed());
//! let element = tree[0].as_element().unwrap();
//! assert_eq!(element.children, vec![Node::from(" hi ")]);
//! ```
//!
//! ### Building trees directly
//!
//! ```rust
//! use premark::{to_xml, tree, Element};
//!
//! let forest = tree![
//!     "see ",
//!     Element::new("a").with_attr("href", "/docs").with_child("the docs"),
//! ];
//! assert_eq!(to_xml(&forest), r#"see <a href="/docs">the docs</a>"#);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) in the input length, single forward pass with one
//!   backward signature scan per opening bracket
//! - **Rendering**: O(n) in the tree size
//! - **Memory**: one owned tree, no interning, no shared nodes
//!
//! ## Output is not a round-trip
//!
//! [`to_xml`] produces a *different* concrete syntax from the source
//! notation and performs no escaping, so `to_xml(&parse(s))` is not `s` for
//! any input containing tags, and the output is not guaranteed well-formed
//! XML when text contains reserved characters.

pub mod map;
pub mod node;
pub mod notation;
pub mod options;
pub mod xml;

mod macros;
mod parser;
mod scan;

pub use map::AttrMap;
pub use node::{Element, Node, Tree};
pub use options::ParseOptions;
pub use xml::to_xml;

/// Parses Premark text into a [`Tree`] with default options (no trimming).
///
/// Parsing is total: it never fails and never panics, whatever the input.
/// Malformed markup degrades per the rules in the [`notation`] module.
///
/// # Examples
///
/// ```rust
/// use premark::parse;
///
/// let tree = parse("hello<world>");
/// let element = tree[0].as_element().unwrap();
/// assert_eq!(element.tag, "hello");
/// assert_eq!(element.children[0].as_text(), Some("world"));
/// ```
#[must_use]
pub fn parse(text: &str) -> Tree {
    parse_with_options(text, ParseOptions::default())
}

/// Parses Premark text into a [`Tree`] with explicit [`ParseOptions`].
///
/// # Examples
///
/// ```rust
/// use premark::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::trimmed();
/// let tree = parse_with_options("  \n  ", options);
/// assert!(tree.is_empty());
/// ```
#[must_use]
pub fn parse_with_options(text: &str, options: ParseOptions) -> Tree {
    parser::parse_tree(text, options)
}
