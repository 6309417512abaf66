//! Tree serialization to the bracketed output form.
//!
//! This module renders a [`Tree`](crate::Tree) into an XML-like string: text
//! nodes verbatim, elements as `<tag key="value">children</tag>` or as a
//! self-closing `<tag/>` when they have no children, with attributes in their
//! stored insertion order.
//!
//! The output is a *different* concrete syntax from the Premark source
//! notation, deliberately so: no characters are escaped, so rendering is not
//! a round-trip of the input text and is not guaranteed well-formed when text
//! or attribute values contain reserved characters. Rendering always
//! succeeds.
//!
//! ```rust
//! use premark::{parse, to_xml};
//!
//! let tree = parse(r#"note type="warn"<Be careful>"#);
//! assert_eq!(to_xml(&tree), r#"<note type="warn">Be careful</note>"#);
//! ```

use crate::{Element, Node};

/// Renders a tree into the bracketed XML-like form.
///
/// # Examples
///
/// ```rust
/// use premark::{to_xml, Element, Node};
///
/// let tree = vec![
///     Node::from("see "),
///     Node::from(Element::new("a").with_attr("href", "/x").with_child("this")),
/// ];
/// assert_eq!(to_xml(&tree), r#"see <a href="/x">this</a>"#);
/// ```
#[must_use]
pub fn to_xml(tree: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, tree);
    out
}

pub(crate) fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => write_element(out, element),
        }
    }
}

pub(crate) fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    for (key, value) in element.attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    if element.children.is_empty() {
        out.push_str("/>");
    } else {
        out.push('>');
        write_nodes(out, &element.children);
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}
