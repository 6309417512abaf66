//! Forward tree construction.
//!
//! This module turns raw Premark text into a [`Tree`] in a single
//! left-to-right scan. It buffers plain characters until it hits an unescaped
//! bracket, hands the buffer to the backward
//! [signature recognizer](crate::scan) on `<`, and tracks nesting with a
//! stack of indices into the tree under construction.
//!
//! ## Overview
//!
//! - **Single pass**: O(n) over the input, no backtracking
//! - **Total**: malformed input degrades per defined rules, never errors
//! - **Escapes**: `\<` and `\>` insert literal brackets; a backslash before
//!   any other character passes through verbatim, and the escaped character
//!   never triggers a bracket transition
//! - **Trim mode**: an optional boundary-preserving whitespace policy applied
//!   to every text fragment before it joins the tree
//!
//! ## Degenerate input
//!
//! There is deliberately no error path:
//!
//! - An opening bracket that is never closed leaves its element open until
//!   end of input. The element stays in the tree (it was appended when its
//!   bracket was seen), but trailing text lands in the top-level forest, not
//!   inside it.
//! - A closing bracket with no element open discards the pending buffer and
//!   the bracket, producing nothing.
//! - Malformed attribute syntax is absorbed by the signature scanner.

use crate::scan::recognize;
use crate::{Element, Node, ParseOptions, Tree};

/// Incremental state for one parse pass: the forest being built, the
/// open-element stack, and the pending text buffer.
///
/// Stack entries are indices of open elements within their parent's children,
/// outermost first; an element never refers back to its parent, so indices
/// into the owned tree are all the bookkeeping nesting needs.
struct TreeBuilder {
    root: Tree,
    stack: Vec<usize>,
    buffer: String,
    options: ParseOptions,
}

/// Parses `text` into a tree. Total over all inputs.
pub(crate) fn parse_tree(text: &str, options: ParseOptions) -> Tree {
    let mut builder = TreeBuilder::new(options);
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                // Escaped bracket becomes a literal character.
                Some(bracket @ ('<' | '>')) => builder.buffer.push(bracket),
                // Anything else passes through verbatim, backslash included;
                // the consumed character can no longer open or close a tag.
                Some(other) => {
                    builder.buffer.push('\\');
                    builder.buffer.push(other);
                }
                // A trailing backslash has nothing to escape and is dropped.
                None => {}
            },
            '<' => builder.open_element(),
            '>' => builder.close_element(),
            _ => builder.buffer.push(ch),
        }
    }
    builder.finish()
}

impl TreeBuilder {
    fn new(options: ParseOptions) -> Self {
        TreeBuilder {
            root: Tree::new(),
            stack: Vec::new(),
            buffer: String::new(),
            options,
        }
    }

    /// The children sequence new nodes currently append to: the innermost
    /// open element's, or the root forest when nothing is open.
    fn current_children(&mut self) -> &mut Vec<Node> {
        let mut children = &mut self.root;
        for &idx in &self.stack {
            match &mut children[idx] {
                Node::Element(element) => children = &mut element.children,
                Node::Text(_) => unreachable!("open-element stack indexes elements only"),
            }
        }
        children
    }

    /// Handles an unescaped `<`: recognizes the buffered signature, attaches
    /// the remainder text, and opens a new element.
    fn open_element(&mut self) {
        let signature = recognize(&self.buffer);
        let tag = signature.tag;
        let attributes = signature.attributes;
        let remainder = clean_fragment(signature.remainder, self.options.trim);

        let children = self.current_children();
        if let Some(text) = remainder {
            children.push(Node::Text(text));
        }
        children.push(Node::Element(Element {
            tag,
            attributes,
            children: Vec::new(),
        }));
        let opened = children.len() - 1;
        self.stack.push(opened);
        self.buffer.clear();
    }

    /// Handles an unescaped `>`: attaches buffered text to the innermost open
    /// element, then closes it. With nothing open, buffer and bracket are
    /// both discarded.
    fn close_element(&mut self) {
        if !self.buffer.is_empty() {
            if !self.stack.is_empty() {
                if let Some(text) = clean_fragment(&self.buffer, self.options.trim) {
                    self.current_children().push(Node::Text(text));
                }
            }
            self.buffer.clear();
        }
        self.stack.pop();
    }

    /// Flushes any trailing text into the root forest. Text after an
    /// unterminated opening bracket belongs to the top level, not to the
    /// elements still on the stack.
    fn finish(mut self) -> Tree {
        if let Some(text) = clean_fragment(&self.buffer, self.options.trim) {
            self.root.push(Node::Text(text));
        }
        self.root
    }
}

/// Applies the trim policy to a fragment about to become a text node.
///
/// With trimming off, any non-empty fragment survives verbatim. With it on,
/// the interior is trimmed and at most one space is kept on each side where
/// the fragment had leading/trailing whitespace; fragments that trim to
/// nothing are dropped entirely.
fn clean_fragment(fragment: &str, trim: bool) -> Option<String> {
    if fragment.is_empty() {
        return None;
    }
    if !trim {
        return Some(fragment.to_string());
    }
    let interior = fragment.trim();
    if interior.is_empty() {
        return None;
    }
    let mut cleaned = String::with_capacity(interior.len() + 2);
    if fragment.starts_with(char::is_whitespace) {
        cleaned.push(' ');
    }
    cleaned.push_str(interior);
    if fragment.ends_with(char::is_whitespace) {
        cleaned.push(' ');
    }
    Some(cleaned)
}
