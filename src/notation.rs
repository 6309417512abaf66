//! Premark Notation Reference
//!
//! This module documents the Premark notation as implemented by this library.
//!
//! # Overview
//!
//! Premark is a compact inline markup notation for annotating spans of
//! freeform prose with semantic tags. Unlike XML or HTML, the tag signature
//! is written *before* the opening bracket, so annotations read as part of
//! the sentence they mark up:
//!
//! ```text
//! Remember to call note type="reminder"<Alice> about the launch.
//! ```
//!
//! parses into the text `Remember to call `, an element
//! `note[type=reminder]` containing the text `Alice`, and the trailing text
//! ` about the launch.`.
//!
//! ## Design Philosophy
//!
//! - **Prose first**: markup is sprinkled into running text, so an annotation
//!   never needs its content rewritten, only bracketed
//! - **Total parsing**: malformed markup degrades into text or partial
//!   structure; nothing an author types can make parsing fail
//! - **Minimal vocabulary**: strings are the only value type, and there is no
//!   schema; tags mean whatever the consumer decides they mean
//!
//! # Core Syntax
//!
//! ## Tag signatures
//!
//! A *tag signature* is the run of characters immediately before an unescaped
//! `<`:
//!
//! ```text
//! SIGNATURE := TAGNAME (WS KEY '=' '"' VALUE '"')*
//! ```
//!
//! **Rules**:
//! - `TAGNAME` and `KEY` are maximal runs of non-whitespace characters; there
//!   is no identifier alphabet, so `über-note!` is a valid tag
//! - `VALUE` is any run of characters up to the next quote; quotes cannot be
//!   escaped inside a value
//! - The tag name is the *last* whitespace-delimited token before the
//!   bracket. Everything further left is ordinary text (the *remainder*)
//!
//! ## Elements
//!
//! `<` opens the element described by the preceding signature; the matching
//! unescaped `>` closes the innermost open element. Elements nest:
//!
//! ```text
//! warn<check the fuel valve<B-7> before ignition>
//! ```
//!
//! ## Escapes
//!
//! | Sequence | Meaning |
//! |----------|---------|
//! | `\<`     | literal `<`, never opens an element |
//! | `\>`     | literal `>`, never closes an element |
//! | `\x`     | both characters pass through verbatim |
//!
//! A backslash followed by anything other than a bracket keeps the backslash
//! and consumes the following character, so that character cannot act as a
//! bracket either.
//!
//! ## Duplicate attributes
//!
//! When a key appears more than once in one signature, the occurrence nearest
//! the opening bracket wins; the key keeps the position of its first
//! occurrence:
//!
//! ```text
//! e a="1" b="2" a="3"<x>   ~>   <e a="3" b="2">x</e>
//! ```
//!
//! ## Whitespace trimming
//!
//! With [`ParseOptions::trimmed`](crate::ParseOptions::trimmed), every text
//! fragment is boundary-trimmed before it joins the tree: the interior is
//! trimmed, at most one space survives on each side where the fragment had
//! leading or trailing whitespace, and fragments that trim to nothing are
//! dropped.
//!
//! # Malformed input
//!
//! Parsing never fails. The degradation rules are:
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `<` with no matching `>` | element stays in the tree; trailing text goes to the top level |
//! | `>` with nothing open | bracket and pending text are both discarded |
//! | unterminated quote | the quote swallows the rest of the signature buffer; the unfinished pair is dropped |
//! | missing `=` | the would-be key is absorbed into the tag name or remainder |
//! | bare `<` | element with an empty tag name |
//!
//! # Output form
//!
//! [`to_xml`](crate::to_xml) renders a tree in a conventional bracketed form:
//! `<tag key="value">children</tag>`, self-closing `<tag/>` for childless
//! elements, text verbatim. This is a different concrete syntax from the
//! input notation — no characters are escaped on the way out, and rendering a
//! parsed tree does not reproduce the source text.
